//! Parent menu resolution.
//!
//! Some commands only make sense together with the menu they live in: "Next
//! Method" is clearer as "Go To ▶ Next Method". The resolver maps command ids
//! to the label of a configured root group that contains them.
//!
//! The host's menu structure is static for a session, so the whole map is
//! built in one pass over the roots and kept until the resolver is dropped.

use std::collections::HashMap;

use keycast_core::logging::targets;

/// A node of the host's menu structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// A group of further nodes.
    Group {
        /// Display label, if the group has one.
        label: Option<String>,
        /// Popup groups open as their own submenu.
        popup: bool,
        /// Child nodes in menu order.
        children: Vec<MenuNode>,
    },
    /// A command leaf.
    Command(String),
}

impl MenuNode {
    /// A non-popup group.
    pub fn group(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group {
            label: Some(label.into()),
            popup: false,
            children,
        }
    }

    /// A popup group.
    pub fn popup(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group {
            label: Some(label.into()),
            popup: true,
            children,
        }
    }

    /// A command leaf.
    pub fn command(id: impl Into<String>) -> Self {
        MenuNode::Command(id.into())
    }
}

/// Read access to the host's command groups.
pub trait CommandRegistry {
    /// The group registered under `group_id`, or `None` if the id is unknown
    /// or does not name a group.
    fn menu_group(&self, group_id: &str) -> Option<MenuNode>;
}

// ============================================================================
// Index
// ============================================================================

/// Command id to parent name map, built on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParentNameIndex {
    /// The host has not been traversed yet.
    #[default]
    Unbuilt,
    /// The map from command id to root group label.
    Built(HashMap<String, String>),
}

impl ParentNameIndex {
    /// Traverse the roots once and keep the result.
    ///
    /// Does nothing if the index is already built.
    pub fn ensure_built(&mut self, registry: &dyn CommandRegistry, roots: &[String]) {
        if !self.is_built() {
            *self = ParentNameIndex::Built(Self::build(registry, roots));
        }
    }

    /// Build the map by walking each root in order.
    ///
    /// Non-popup subgroups are walked through and their commands are credited
    /// to the root's label. Popup subgroups are skipped. A command found under
    /// several roots keeps the label of the last one.
    #[tracing::instrument(skip_all, target = "keycast::menu", level = "debug")]
    pub fn build(registry: &dyn CommandRegistry, roots: &[String]) -> HashMap<String, String> {
        let mut names = HashMap::new();

        for root_id in roots {
            let Some(root) = registry.menu_group(root_id) else {
                tracing::warn!(target: targets::MENU, group = %root_id, "root group not found");
                continue;
            };
            let MenuNode::Group {
                label: Some(label),
                children,
                ..
            } = root
            else {
                tracing::warn!(target: targets::MENU, group = %root_id, "root is not a labelled group");
                continue;
            };

            let mut pending = children;
            while let Some(node) = pending.pop() {
                match node {
                    MenuNode::Command(id) => {
                        names.insert(id, label.clone());
                    }
                    MenuNode::Group {
                        popup: false,
                        children,
                        ..
                    } => pending.extend(children),
                    MenuNode::Group { popup: true, .. } => {}
                }
            }
        }

        tracing::debug!(target: targets::MENU, commands = names.len(), "parent name index built");
        names
    }

    /// Check if the host has been traversed.
    pub fn is_built(&self) -> bool {
        matches!(self, ParentNameIndex::Built(_))
    }

    /// Parent name of a command. Always `None` before the index is built.
    pub fn get(&self, command_id: &str) -> Option<&str> {
        match self {
            ParentNameIndex::Unbuilt => None,
            ParentNameIndex::Built(names) => names.get(command_id).map(String::as_str),
        }
    }
}

/// Resolves the parent menu name of commands.
#[derive(Debug, Clone, Default)]
pub struct ParentMenuResolver {
    roots: Vec<String>,
    index: ParentNameIndex,
}

impl ParentMenuResolver {
    /// Resolve against the given root group ids, walked in order.
    pub fn new(roots: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            index: ParentNameIndex::Unbuilt,
        }
    }

    /// The index, built or not.
    pub fn index(&self) -> &ParentNameIndex {
        &self.index
    }

    /// Parent name of a command, building the index on first use.
    pub fn resolve_parent_name(
        &mut self,
        registry: &dyn CommandRegistry,
        command_id: &str,
    ) -> Option<&str> {
        self.index.ensure_built(registry, &self.roots);
        self.index.get(command_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct TestRegistry {
        groups: HashMap<String, MenuNode>,
        lookups: Cell<usize>,
    }

    impl TestRegistry {
        fn new() -> Self {
            let mut groups = HashMap::new();
            groups.insert(
                "GoToMenu".to_string(),
                MenuNode::group(
                    "Go To",
                    vec![
                        MenuNode::command("GotoClass"),
                        MenuNode::Group {
                            label: None,
                            popup: false,
                            children: vec![MenuNode::command("MethodDown")],
                        },
                        MenuNode::popup("Bookmarks", vec![MenuNode::command("ShowBookmarks")]),
                    ],
                ),
            );
            groups.insert(
                "FoldingGroup".to_string(),
                MenuNode::group("Folding", vec![MenuNode::command("ExpandAll"), MenuNode::command("GotoClass")]),
            );
            groups.insert("Copy".to_string(), MenuNode::command("Copy"));
            Self {
                groups,
                lookups: Cell::new(0),
            }
        }
    }

    impl CommandRegistry for TestRegistry {
        fn menu_group(&self, group_id: &str) -> Option<MenuNode> {
            self.lookups.set(self.lookups.get() + 1);
            self.groups.get(group_id).cloned()
        }
    }

    #[test]
    fn test_nested_groups_use_root_label() {
        let registry = TestRegistry::new();
        let mut resolver = ParentMenuResolver::new(["GoToMenu"]);

        assert_eq!(resolver.resolve_parent_name(&registry, "GotoClass"), Some("Go To"));
        assert_eq!(resolver.resolve_parent_name(&registry, "MethodDown"), Some("Go To"));
    }

    #[test]
    fn test_popup_groups_are_skipped() {
        let registry = TestRegistry::new();
        let mut resolver = ParentMenuResolver::new(["GoToMenu"]);
        assert_eq!(resolver.resolve_parent_name(&registry, "ShowBookmarks"), None);
    }

    #[test]
    fn test_last_root_wins() {
        let registry = TestRegistry::new();

        let mut resolver = ParentMenuResolver::new(["GoToMenu", "FoldingGroup"]);
        assert_eq!(resolver.resolve_parent_name(&registry, "GotoClass"), Some("Folding"));

        let mut resolver = ParentMenuResolver::new(["FoldingGroup", "GoToMenu"]);
        assert_eq!(resolver.resolve_parent_name(&registry, "GotoClass"), Some("Go To"));
    }

    #[test]
    fn test_missing_and_invalid_roots_are_skipped() {
        let registry = TestRegistry::new();
        let mut resolver = ParentMenuResolver::new(["NoSuchGroup", "Copy", "FoldingGroup"]);
        assert_eq!(resolver.resolve_parent_name(&registry, "ExpandAll"), Some("Folding"));
        assert_eq!(resolver.resolve_parent_name(&registry, "Copy"), None);
    }

    #[test]
    fn test_index_built_once() {
        let registry = TestRegistry::new();
        let mut resolver = ParentMenuResolver::new(["GoToMenu", "FoldingGroup"]);
        assert!(!resolver.index().is_built());
        assert_eq!(resolver.index().get("GotoClass"), None);

        let first = resolver.resolve_parent_name(&registry, "ExpandAll").map(str::to_owned);
        let lookups = registry.lookups.get();
        let second = resolver.resolve_parent_name(&registry, "ExpandAll").map(str::to_owned);

        assert_eq!(first, second);
        assert_eq!(lookups, 2);
        assert_eq!(registry.lookups.get(), lookups);
        assert!(resolver.index().is_built());
    }
}
