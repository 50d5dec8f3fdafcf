//! Core keyboard model for keycast.
//!
//! This crate provides the platform-independent pieces that the presentation
//! pipeline is built on:
//!
//! - **Keys**: key codes and modifier state ([`Key`], [`KeyboardModifiers`])
//! - **Shortcuts**: keystrokes and two-keystroke chords, with parsing from
//!   strings like `"Ctrl+K, Ctrl+C"` ([`KeyCombination`], [`Shortcut`])
//! - **Formatting**: native text ("Ctrl+Shift+F5") and macOS glyph ("⌃⇧F5")
//!   rendering selected by [`KeymapKind`]
//! - **Logging**: tracing targets shared by the workspace
//!
//! # Example
//!
//! ```
//! use keycast_core::{format_shortcut, KeymapKind, Shortcut};
//!
//! let chord: Shortcut = "Ctrl+K, Ctrl+C".parse().unwrap();
//! assert_eq!(format_shortcut(Some(&chord), KeymapKind::Native), "Ctrl+K, Ctrl+C");
//! assert_eq!(format_shortcut(Some(&chord), KeymapKind::CrossPlatform), "⌃K, ⌃C");
//! ```

pub mod format;
pub mod keys;
pub mod logging;
pub mod shortcut;

pub use format::{
    format_first_shortcut, format_keystroke, format_shortcut, native_keystroke_text,
    symbol_keystroke_text, KeymapKind,
};
pub use keys::{Key, KeyboardModifiers};
pub use shortcut::{KeyCombination, Shortcut, ShortcutParseError, MAX_SHORTCUT_KEYSTROKES};
