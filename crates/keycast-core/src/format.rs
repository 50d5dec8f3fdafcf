//! Shortcut formatting.
//!
//! Turns keystrokes into the text shown on screen. Two layout conventions are
//! supported, selected by [`KeymapKind`]:
//!
//! - [`KeymapKind::Native`]: modifier and key names joined by `+`
//!   ("Ctrl+Shift+F5"), the way Windows and Linux keymaps are written.
//! - [`KeymapKind::CrossPlatform`]: macOS keyboard glyphs with no separators
//!   ("⌃⇧F5", "⌘C"). The glyph table covers the modifiers, so there is no
//!   separate modifier segment.
//!
//! Chords render as `"first, second"` in both conventions.
//!
//! ```
//! use keycast_core::{format_shortcut, Key, KeyboardModifiers, KeymapKind, Shortcut};
//!
//! let copy = Shortcut::single(Key::C, KeyboardModifiers::CTRL);
//! assert_eq!(format_shortcut(Some(&copy), KeymapKind::Native), "Ctrl+C");
//!
//! let mac_copy = Shortcut::single(Key::C, KeyboardModifiers::CMD);
//! assert_eq!(format_shortcut(Some(&mac_copy), KeymapKind::CrossPlatform), "⌘C");
//! ```

use serde::{Deserialize, Serialize};

use crate::keys::{Key, KeyboardModifiers};
use crate::shortcut::{KeyCombination, Shortcut};

/// Separator between the keystrokes of a chord.
pub const CHORD_SEPARATOR: &str = ", ";

/// Separator between modifier and key names in native text.
pub const NATIVE_SEPARATOR: &str = "+";

/// The rendering convention of a keymap profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeymapKind {
    /// Text tokens: "Ctrl+Shift+F5".
    #[default]
    Native,
    /// Keyboard glyphs: "⌃⇧F5".
    CrossPlatform,
}

impl KeymapKind {
    /// Check if this kind renders glyphs rather than names.
    pub fn uses_symbols(self) -> bool {
        matches!(self, KeymapKind::CrossPlatform)
    }
}

/// Format a shortcut for display. `None` renders as an empty string.
pub fn format_shortcut(shortcut: Option<&Shortcut>, kind: KeymapKind) -> String {
    let Some(shortcut) = shortcut else {
        return String::new();
    };

    shortcut
        .keystrokes()
        .map(|keystroke| format_keystroke(keystroke, kind))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(CHORD_SEPARATOR)
}

/// Format the first of a command's bound shortcuts.
///
/// Commands may carry several alternative bindings; only the first is shown.
pub fn format_first_shortcut(shortcuts: &[Shortcut], kind: KeymapKind) -> String {
    format_shortcut(shortcuts.first(), kind)
}

/// Format one keystroke in the given convention.
pub fn format_keystroke(keystroke: &KeyCombination, kind: KeymapKind) -> String {
    match kind {
        KeymapKind::Native => native_keystroke_text(keystroke),
        KeymapKind::CrossPlatform => symbol_keystroke_text(keystroke),
    }
}

// =============================================================================
// Native (text) convention
// =============================================================================

/// Render a keystroke as `Modifier+Modifier+Key`.
///
/// The modifier segment is left out when no modifiers are held and empty
/// tokens are skipped, so an unnamed key never leaves a trailing `+`.
pub fn native_keystroke_text(keystroke: &KeyCombination) -> String {
    let modifiers = keystroke.modifiers;
    let tokens = [
        modifiers.any().then(|| native_modifiers_text(modifiers)),
        Some(native_key_text(keystroke.key).to_string()),
    ];

    tokens
        .into_iter()
        .flatten()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(NATIVE_SEPARATOR)
        .trim()
        .to_string()
}

/// Names of the held modifiers joined by `+`, in Ctrl, Alt, Shift, Meta order.
pub fn native_modifiers_text(modifiers: KeyboardModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.control {
        parts.push("Ctrl");
    }
    if modifiers.alt {
        parts.push("Alt");
    }
    if modifiers.shift {
        parts.push("Shift");
    }
    if modifiers.meta {
        parts.push("Meta");
    }

    parts.join(NATIVE_SEPARATOR)
}

/// Name of a key in native text. Unknown keys have no name.
pub fn native_key_text(key: Key) -> &'static str {
    match key {
        Key::A => "A",
        Key::B => "B",
        Key::C => "C",
        Key::D => "D",
        Key::E => "E",
        Key::F => "F",
        Key::G => "G",
        Key::H => "H",
        Key::I => "I",
        Key::J => "J",
        Key::K => "K",
        Key::L => "L",
        Key::M => "M",
        Key::N => "N",
        Key::O => "O",
        Key::P => "P",
        Key::Q => "Q",
        Key::R => "R",
        Key::S => "S",
        Key::T => "T",
        Key::U => "U",
        Key::V => "V",
        Key::W => "W",
        Key::X => "X",
        Key::Y => "Y",
        Key::Z => "Z",
        Key::Digit0 => "0",
        Key::Digit1 => "1",
        Key::Digit2 => "2",
        Key::Digit3 => "3",
        Key::Digit4 => "4",
        Key::Digit5 => "5",
        Key::Digit6 => "6",
        Key::Digit7 => "7",
        Key::Digit8 => "8",
        Key::Digit9 => "9",
        Key::F1 => "F1",
        Key::F2 => "F2",
        Key::F3 => "F3",
        Key::F4 => "F4",
        Key::F5 => "F5",
        Key::F6 => "F6",
        Key::F7 => "F7",
        Key::F8 => "F8",
        Key::F9 => "F9",
        Key::F10 => "F10",
        Key::F11 => "F11",
        Key::F12 => "F12",
        Key::ArrowUp => "Up",
        Key::ArrowDown => "Down",
        Key::ArrowLeft => "Left",
        Key::ArrowRight => "Right",
        Key::Home => "Home",
        Key::End => "End",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Backspace => "Backspace",
        Key::Delete => "Delete",
        Key::Insert => "Insert",
        Key::Enter => "Enter",
        Key::Tab => "Tab",
        Key::Space => "Space",
        Key::Escape => "Escape",
        Key::CapsLock => "CapsLock",
        Key::PrintScreen => "PrintScreen",
        Key::Pause => "Pause",
        Key::Minus => "Minus",
        Key::Equal => "Equals",
        Key::BracketLeft => "Open Bracket",
        Key::BracketRight => "Close Bracket",
        Key::Backslash => "Back Slash",
        Key::Semicolon => "Semicolon",
        Key::Quote => "Quote",
        Key::Comma => "Comma",
        Key::Period => "Period",
        Key::Slash => "Slash",
        Key::Grave => "Back Quote",
        Key::Numpad0 => "Numpad0",
        Key::Numpad1 => "Numpad1",
        Key::Numpad2 => "Numpad2",
        Key::Numpad3 => "Numpad3",
        Key::Numpad4 => "Numpad4",
        Key::Numpad5 => "Numpad5",
        Key::Numpad6 => "Numpad6",
        Key::Numpad7 => "Numpad7",
        Key::Numpad8 => "Numpad8",
        Key::Numpad9 => "Numpad9",
        Key::NumpadAdd => "NumpadAdd",
        Key::NumpadSubtract => "NumpadSubtract",
        Key::NumpadMultiply => "NumpadMultiply",
        Key::NumpadDivide => "NumpadDivide",
        Key::NumpadDecimal => "NumpadDecimal",
        Key::NumpadEnter => "NumpadEnter",
        Key::Unknown(_) => "",
    }
}

// =============================================================================
// Cross-platform (symbol) convention
// =============================================================================

/// Glyph for the Control modifier.
pub const CONTROL_GLYPH: &str = "\u{2303}";
/// Glyph for the Option/Alt modifier.
pub const OPTION_GLYPH: &str = "\u{2325}";
/// Glyph for the Shift modifier.
pub const SHIFT_GLYPH: &str = "\u{21E7}";
/// Glyph for the Command modifier.
pub const COMMAND_GLYPH: &str = "\u{2318}";

/// Render a keystroke with macOS keyboard glyphs: `⌃⌥⇧⌘` then the key.
pub fn symbol_keystroke_text(keystroke: &KeyCombination) -> String {
    let key = symbol_key_text(keystroke.key);
    if key.is_empty() {
        return String::new();
    }

    let modifiers = keystroke.modifiers;
    let mut text = String::new();
    if modifiers.control {
        text.push_str(CONTROL_GLYPH);
    }
    if modifiers.alt {
        text.push_str(OPTION_GLYPH);
    }
    if modifiers.shift {
        text.push_str(SHIFT_GLYPH);
    }
    if modifiers.meta {
        text.push_str(COMMAND_GLYPH);
    }
    text.push_str(key);
    text
}

/// Glyph or short name of a key in the symbol convention.
pub fn symbol_key_text(key: Key) -> &'static str {
    match key {
        Key::ArrowUp => "\u{2191}",
        Key::ArrowDown => "\u{2193}",
        Key::ArrowLeft => "\u{2190}",
        Key::ArrowRight => "\u{2192}",
        Key::Home => "\u{2196}",
        Key::End => "\u{2198}",
        Key::PageUp => "\u{21DE}",
        Key::PageDown => "\u{21DF}",
        Key::Backspace => "\u{232B}",
        Key::Delete => "\u{2326}",
        Key::Enter => "\u{21A9}",
        Key::NumpadEnter => "\u{2324}",
        Key::Tab => "\u{21E5}",
        Key::Escape => "\u{238B}",
        Key::CapsLock => "\u{21EA}",
        Key::Space => "Space",
        Key::Minus => "-",
        Key::Equal => "=",
        Key::BracketLeft => "[",
        Key::BracketRight => "]",
        Key::Backslash => "\\",
        Key::Semicolon => ";",
        Key::Quote => "'",
        Key::Comma => ",",
        Key::Period => ".",
        Key::Slash => "/",
        Key::Grave => "`",
        other => native_key_text(other),
    }
}
