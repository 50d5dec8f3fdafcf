//! Keymap profiles and their bindings.
//!
//! A [`KeymapDescription`] names one configured profile (for example the
//! native "$default" keymap, or "Mac OS X 10.5+" for teaching macOS users)
//! together with the convention its shortcuts are rendered in. The bindings
//! themselves live with the host and are reached through [`KeymapLookup`].

use std::collections::HashMap;

use keycast_core::logging::targets;
use keycast_core::{
    format_first_shortcut, Key, KeyCombination, KeyboardModifiers, KeymapKind, Shortcut,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

// ============================================================================
// Binding Sources
// ============================================================================

/// Bindings of one keymap profile.
pub trait Keymap {
    /// Shortcuts bound to a command, in the profile's preference order.
    fn shortcuts(&self, command_id: &str) -> &[Shortcut];
}

/// Resolves profile names to their bindings.
pub trait KeymapLookup {
    /// The profile with the given name, if the host knows it.
    fn keymap(&self, name: &str) -> Option<&dyn Keymap>;
}

/// A keymap profile held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryKeymap {
    bindings: HashMap<String, Vec<Shortcut>>,
}

impl InMemoryKeymap {
    /// Create an empty keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding for a command.
    pub fn bind(&mut self, command_id: impl Into<String>, shortcut: Shortcut) {
        self.bindings
            .entry(command_id.into())
            .or_default()
            .push(shortcut);
    }

    /// Builder form of [`bind`](Self::bind).
    pub fn with_binding(mut self, command_id: impl Into<String>, shortcut: Shortcut) -> Self {
        self.bind(command_id, shortcut);
        self
    }

    /// Build a keymap from `(command, shortcut text)` pairs.
    ///
    /// ```
    /// use keycast::InMemoryKeymap;
    ///
    /// let keymap = InMemoryKeymap::from_bindings([
    ///     ("CommentByLineComment", "Ctrl+Slash"),
    ///     ("CommentByBlockComment", "Ctrl+K, Ctrl+C"),
    /// ])
    /// .unwrap();
    /// assert!(keymap.contains("CommentByBlockComment"));
    /// ```
    pub fn from_bindings<I, C, S>(bindings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<String>,
        S: AsRef<str>,
    {
        let mut keymap = Self::new();
        for (command, text) in bindings {
            let command = command.into();
            let shortcut = text.as_ref().parse::<Shortcut>().map_err(|source| {
                tracing::warn!(
                    target: targets::KEYMAP,
                    command = %command,
                    text = text.as_ref(),
                    "rejecting keymap binding"
                );
                ConfigError::invalid_shortcut(command.clone(), source)
            })?;
            keymap.bind(command, shortcut);
        }
        Ok(keymap)
    }

    /// Common editing bindings.
    ///
    /// Uses Ctrl for the native convention and Cmd for the cross-platform one.
    pub fn standard(kind: KeymapKind) -> Self {
        let primary = match kind {
            KeymapKind::Native => KeyboardModifiers::CTRL,
            KeymapKind::CrossPlatform => KeyboardModifiers::CMD,
        };
        let primary_shift = primary.union(KeyboardModifiers::SHIFT);

        let mut keymap = Self::new();
        keymap.bind("$Copy", Shortcut::single(Key::C, primary));
        keymap.bind("$Paste", Shortcut::single(Key::V, primary));
        keymap.bind("$Cut", Shortcut::single(Key::X, primary));
        keymap.bind("$Undo", Shortcut::single(Key::Z, primary));
        match kind {
            KeymapKind::Native => {
                keymap.bind("$Redo", Shortcut::single(Key::Y, primary));
                keymap.bind("$Redo", Shortcut::single(Key::Z, primary_shift));
            }
            KeymapKind::CrossPlatform => {
                keymap.bind("$Redo", Shortcut::single(Key::Z, primary_shift));
            }
        }
        keymap.bind("SaveAll", Shortcut::single(Key::S, primary));
        keymap.bind("Find", Shortcut::single(Key::F, primary));
        keymap.bind("$SelectAll", Shortcut::single(Key::A, primary));
        keymap.bind(
            "CommentByBlockComment",
            Shortcut::chord(KeyCombination::new(Key::K, primary), KeyCombination::new(Key::C, primary)),
        );
        keymap
    }

    /// Check if a command has any binding.
    pub fn contains(&self, command_id: &str) -> bool {
        self.bindings.contains_key(command_id)
    }

    /// Number of commands with bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the keymap has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Keymap for InMemoryKeymap {
    fn shortcuts(&self, command_id: &str) -> &[Shortcut] {
        self.bindings.get(command_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Named keymap profiles held in memory.
#[derive(Debug, Clone, Default)]
pub struct KeymapSet {
    keymaps: HashMap<String, InMemoryKeymap>,
}

impl KeymapSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, keymap: InMemoryKeymap) {
        self.keymaps.insert(name.into(), keymap);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, keymap: InMemoryKeymap) -> Self {
        self.insert(name, keymap);
        self
    }
}

impl KeymapLookup for KeymapSet {
    fn keymap(&self, name: &str) -> Option<&dyn Keymap> {
        self.keymaps.get(name).map(|keymap| keymap as &dyn Keymap)
    }
}

// ============================================================================
// Keymap Description
// ============================================================================

/// A configured keymap profile and how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeymapDescription {
    /// Profile name the host resolves bindings by.
    pub name: String,
    /// Rendering convention for this profile's shortcuts.
    pub kind: KeymapKind,
    /// Label shown after the profile's shortcuts, e.g. "for Mac".
    #[serde(default)]
    pub display_text: String,
}

impl KeymapDescription {
    /// Describe a profile with no display label.
    pub fn new(name: impl Into<String>, kind: KeymapKind) -> Self {
        Self {
            name: name.into(),
            kind,
            display_text: String::new(),
        }
    }

    /// Set the label shown after this profile's shortcuts.
    pub fn with_display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = text.into();
        self
    }

    /// The profile's bindings, if the host knows the profile.
    pub fn keymap<'a>(&self, lookup: &'a dyn KeymapLookup) -> Option<&'a dyn Keymap> {
        let keymap = lookup.keymap(&self.name);
        if keymap.is_none() {
            tracing::trace!(target: targets::KEYMAP, name = %self.name, "keymap profile not found");
        }
        keymap
    }

    /// Shortcuts bound to a command in this profile.
    pub fn shortcuts<'a>(&self, lookup: &'a dyn KeymapLookup, command_id: &str) -> &'a [Shortcut] {
        self.keymap(lookup)
            .map(|keymap| keymap.shortcuts(command_id))
            .unwrap_or(&[])
    }

    /// The command's first shortcut in this profile's own convention.
    pub fn shortcut_text(&self, lookup: &dyn KeymapLookup, command_id: &str) -> String {
        self.shortcut_text_as(lookup, command_id, self.kind)
    }

    /// The command's first shortcut rendered in `kind`.
    pub fn shortcut_text_as(
        &self,
        lookup: &dyn KeymapLookup,
        command_id: &str,
        kind: KeymapKind,
    ) -> String {
        format_first_shortcut(self.shortcuts(lookup, command_id), kind)
    }
}
