//! Action info composition.
//!
//! Builds the fragments shown when a command fires:
//!
//! ```text
//! <b>Go To ▶ Class</b> via&nbsp;Ctrl+N&nbsp;(⌘O&nbsp;for Mac)
//! ```
//!
//! That is the bold command label (prefixed with its parent menu), the
//! shortcut in the main keymap and, in parentheses, the shortcut in the
//! alternative keymap. A shortcut is left out when it reads the same as the
//! text right before it, so "Copy via Copy" or "Ctrl+C (Ctrl+C)" never show.

use keycast_core::logging::targets;
use keycast_core::KeymapKind;

use crate::fragment::{Fragment, NBSP};
use crate::keymap::{KeymapDescription, KeymapLookup};
use crate::menu::{CommandRegistry, ParentMenuResolver};
use crate::platform::Platform;

/// Glyph between a parent menu name and the command label.
pub const PARENT_SEPARATOR: &str = "\u{25B6}";

/// Trailing ellipsis removed from command labels.
const ELLIPSIS: &str = "...";

/// Host services the composer reads from.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    /// Command groups for parent menu names.
    pub registry: &'a dyn CommandRegistry,
    /// Keymap bindings.
    pub keymaps: &'a dyn KeymapLookup,
    /// Platform and font capabilities.
    pub platform: &'a dyn Platform,
}

/// Composes the overlay text for fired commands.
#[derive(Debug, Clone)]
pub struct ActionInfoComposer {
    main: KeymapDescription,
    alternative: Option<KeymapDescription>,
    resolver: ParentMenuResolver,
}

impl ActionInfoComposer {
    /// Create a composer for a main and an optional alternative keymap.
    pub fn new(
        main: KeymapDescription,
        alternative: Option<KeymapDescription>,
        resolver: ParentMenuResolver,
    ) -> Self {
        Self {
            main,
            alternative,
            resolver,
        }
    }

    /// The parent menu resolver.
    pub fn resolver(&self) -> &ParentMenuResolver {
        &self.resolver
    }

    /// Fragments describing `command_id`.
    ///
    /// `label` is the command's display label as reported by the host. Missing
    /// data only shortens the result; an unknown command with no label and no
    /// bindings yields no fragments.
    #[tracing::instrument(skip_all, target = "keycast::compose", level = "trace", fields(command = command_id))]
    pub fn compose(
        &mut self,
        command_id: &str,
        label: Option<&str>,
        services: Collaborators<'_>,
    ) -> Vec<Fragment> {
        let action_text = self.action_text(command_id, label, services.registry);

        let mut fragments = Vec::new();
        if !action_text.is_empty() {
            fragments.push(Fragment::bold(&action_text));
        }

        let main = shortcut_fragments(&self.main, command_id, &action_text, services);
        if !main.is_empty() {
            if !fragments.is_empty() {
                fragments.push(Fragment::text(format!(" via{NBSP}")));
            }
            fragments.extend(main);
        }

        if let Some(alternative) = &self.alternative {
            let main_text = self.main.shortcut_text(services.keymaps, command_id);
            let alternative = shortcut_fragments(alternative, command_id, &main_text, services);
            if !alternative.is_empty() {
                fragments.push(Fragment::text(format!("{NBSP}(")));
                fragments.extend(alternative);
                fragments.push(Fragment::text(")"));
            }
        }

        tracing::debug!(
            target: targets::COMPOSE,
            command = command_id,
            fragments = fragments.len(),
            "composed action info"
        );
        fragments
    }

    /// Bold label text: `"Parent ▶ Label"`, or just the label.
    fn action_text(
        &mut self,
        command_id: &str,
        label: Option<&str>,
        registry: &dyn CommandRegistry,
    ) -> String {
        let label = label.unwrap_or_default();
        let label = label.strip_suffix(ELLIPSIS).unwrap_or(label);

        match self.resolver.resolve_parent_name(registry, command_id) {
            Some(parent) => format!("{parent} {PARENT_SEPARATOR} {label}"),
            None => label.to_string(),
        }
    }
}

/// Fragments for one keymap's shortcut, or none if the shortcut is unbound or
/// reads the same as `shown`.
///
/// Symbol shortcuts shown on a platform that does not use symbols natively
/// need the platform's symbol font. When that font is missing or cannot draw
/// every glyph, the shortcut is spelled out in native text instead.
fn shortcut_fragments(
    keymap: &KeymapDescription,
    command_id: &str,
    shown: &str,
    services: Collaborators<'_>,
) -> Vec<Fragment> {
    let text = keymap.shortcut_text(services.keymaps, command_id);
    if text.is_empty() || text == shown {
        return Vec::new();
    }

    let platform = services.platform;
    let mut fragments = Vec::new();
    if !keymap.kind.uses_symbols() || platform.uses_symbol_shortcuts() {
        fragments.push(Fragment::text(text));
    } else if let Some(font) = platform
        .symbol_font()
        .filter(|font| platform.can_render(font, &text))
    {
        fragments.push(Fragment::with_font(text, font));
    } else {
        let spelled = keymap.shortcut_text_as(services.keymaps, command_id, KeymapKind::Native);
        tracing::trace!(
            target: targets::COMPOSE,
            symbols = %text,
            native = %spelled,
            "symbol font unavailable, using native text"
        );
        if !spelled.is_empty() && spelled != shown {
            fragments.push(Fragment::text(spelled));
        }
    }

    if !fragments.is_empty() && !keymap.display_text.is_empty() {
        fragments.push(Fragment::text(format!("{NBSP}{}", keymap.display_text)));
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{to_markup, FontRef};
    use crate::keymap::{InMemoryKeymap, KeymapSet};
    use crate::menu::MenuNode;
    use crate::platform::FixedPlatform;
    use keycast_core::{Key, KeyboardModifiers, Shortcut};

    const MAC: &str = "Mac OS X 10.5+";

    struct Menus;

    impl CommandRegistry for Menus {
        fn menu_group(&self, group_id: &str) -> Option<MenuNode> {
            (group_id == "GoToMenu").then(|| {
                MenuNode::group("Go To", vec![MenuNode::command("GotoClass")])
            })
        }
    }

    fn keymaps() -> KeymapSet {
        KeymapSet::new()
            .with(
                "$default",
                InMemoryKeymap::standard(KeymapKind::Native)
                    .with_binding("GotoClass", Shortcut::single(Key::N, KeyboardModifiers::CTRL))
                    .with_binding("Shared", Shortcut::single(Key::F5, KeyboardModifiers::NONE)),
            )
            .with(
                MAC,
                InMemoryKeymap::standard(KeymapKind::CrossPlatform)
                    .with_binding("GotoClass", Shortcut::single(Key::O, KeyboardModifiers::CMD))
                    .with_binding("Shared", Shortcut::single(Key::F5, KeyboardModifiers::NONE))
                    .with_binding("Escape", Shortcut::single(Key::Escape, KeyboardModifiers::NONE)),
            )
    }

    fn native() -> KeymapDescription {
        KeymapDescription::new("$default", KeymapKind::Native)
    }

    fn mac() -> KeymapDescription {
        KeymapDescription::new(MAC, KeymapKind::CrossPlatform)
    }

    fn composer(alternative: Option<KeymapDescription>) -> ActionInfoComposer {
        ActionInfoComposer::new(native(), alternative, ParentMenuResolver::new(["GoToMenu"]))
    }

    fn compose(
        composer: &mut ActionInfoComposer,
        platform: &FixedPlatform,
        command_id: &str,
        label: Option<&str>,
    ) -> Vec<Fragment> {
        let keymaps = keymaps();
        let services = Collaborators {
            registry: &Menus,
            keymaps: &keymaps,
            platform,
        };
        composer.compose(command_id, label, services)
    }

    #[test]
    fn test_copy_main_only() {
        let mut composer = composer(None);
        let fragments = compose(&mut composer, &FixedPlatform::other(), "$Copy", Some("Copy"));
        assert_eq!(
            fragments,
            vec![
                Fragment::text("<b>Copy</b>"),
                Fragment::text(" via&nbsp;"),
                Fragment::text("Ctrl+C"),
            ]
        );
    }

    #[test]
    fn test_display_text_suffix() {
        let mut composer = ActionInfoComposer::new(
            native().with_display_text("for Win/Linux"),
            None,
            ParentMenuResolver::default(),
        );
        let fragments = compose(&mut composer, &FixedPlatform::other(), "$Copy", Some("Copy"));
        assert_eq!(
            to_markup(&fragments),
            "<b>Copy</b> via&nbsp;Ctrl+C&nbsp;for Win/Linux"
        );
    }

    #[test]
    fn test_alternative_on_mac() {
        let mut composer = composer(Some(mac().with_display_text("for Mac")));
        let fragments = compose(&mut composer, &FixedPlatform::mac(), "$Copy", Some("Copy"));
        assert_eq!(
            fragments,
            vec![
                Fragment::text("<b>Copy</b>"),
                Fragment::text(" via&nbsp;"),
                Fragment::text("Ctrl+C"),
                Fragment::text("&nbsp;("),
                Fragment::text("⌘C"),
                Fragment::text("&nbsp;for Mac"),
                Fragment::text(")"),
            ]
        );
    }

    #[test]
    fn test_alternative_with_symbol_font() {
        let font = FontRef::new("Lucida Grande");
        let platform = FixedPlatform::other().with_symbol_font(font.clone());
        let mut composer = composer(Some(mac()));
        let fragments = compose(&mut composer, &platform, "$Copy", Some("Copy"));
        assert_eq!(fragments[4], Fragment::with_font("⌘C", font));
    }

    #[test]
    fn test_alternative_falls_back_to_native_text() {
        let platform = FixedPlatform::other()
            .with_symbol_font(FontRef::new("Lucida Grande"))
            .without_glyphs(['⎋']);
        let mut with_font = composer(Some(mac()));
        let fragments = compose(&mut with_font, &platform, "Escape", Some("Escape"));
        assert_eq!(to_markup(&fragments), "<b>Escape</b>&nbsp;(Escape)");

        let mut without_font = composer(Some(mac()));
        let fragments = compose(&mut without_font, &FixedPlatform::other(), "$Copy", Some("Copy"));
        assert_eq!(to_markup(&fragments), "<b>Copy</b> via&nbsp;Ctrl+C&nbsp;(Meta+C)");
    }

    #[test]
    fn test_identical_alternative_is_omitted() {
        let mut composer = composer(Some(mac().with_display_text("for Mac")));
        let fragments = compose(&mut composer, &FixedPlatform::mac(), "Shared", Some("Rerun"));
        assert_eq!(to_markup(&fragments), "<b>Rerun</b> via&nbsp;F5");
    }

    #[test]
    fn test_unbound_command_has_no_shortcuts() {
        let mut composer = composer(Some(mac()));
        let fragments = compose(&mut composer, &FixedPlatform::mac(), "ShowSettings", Some("Settings..."));
        assert_eq!(fragments, vec![Fragment::text("<b>Settings</b>")]);
    }

    #[test]
    fn test_parent_menu_prefix() {
        let mut composer = composer(None);
        let fragments = compose(&mut composer, &FixedPlatform::other(), "GotoClass", Some("Class..."));
        assert_eq!(to_markup(&fragments), "<b>Go To ▶ Class</b> via&nbsp;Ctrl+N");
        assert!(composer.resolver().index().is_built());
    }

    #[test]
    fn test_shortcut_same_as_label_is_omitted() {
        let mut composer = composer(None);
        let fragments = compose(&mut composer, &FixedPlatform::other(), "$Copy", Some("Ctrl+C"));
        assert_eq!(fragments, vec![Fragment::text("<b>Ctrl+C</b>")]);
    }

    #[test]
    fn test_no_label_no_connective() {
        let mut composer = composer(None);
        let fragments = compose(&mut composer, &FixedPlatform::other(), "$Paste", None);
        assert_eq!(fragments, vec![Fragment::text("Ctrl+V")]);

        let fragments = compose(&mut composer, &FixedPlatform::other(), "Unknown", None);
        assert!(fragments.is_empty());
    }
}
