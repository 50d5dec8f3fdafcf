//! Keystrokes and shortcuts.
//!
//! - [`KeyCombination`]: one keystroke (a key plus held modifiers), e.g. "Ctrl+S"
//! - [`Shortcut`]: a keystroke optionally followed by a second one, e.g.
//!   "Ctrl+K, Ctrl+C"
//! - Parsing from human-readable strings, used by configuration and keymap
//!   tables
//!
//! ```
//! use keycast_core::{Key, KeyboardModifiers, Shortcut};
//!
//! let copy = Shortcut::single(Key::C, KeyboardModifiers::CTRL);
//! assert_eq!(copy.to_string(), "Ctrl+C");
//!
//! let chord: Shortcut = "Ctrl+K, Ctrl+C".parse().unwrap();
//! assert!(chord.is_chord());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::format::{native_keystroke_text, native_modifiers_text};
use crate::keys::{Key, KeyboardModifiers};

// =============================================================================
// Key Combination (Single Key + Modifiers)
// =============================================================================

/// A single keystroke: one key with the modifiers held while pressing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    /// The primary key.
    pub key: Key,
    /// The modifier keys that must be held.
    pub modifiers: KeyboardModifiers,
}

impl KeyCombination {
    /// Create a new key combination from a key and modifiers.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combination with no modifiers.
    pub fn key_only(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// Create a Ctrl+key combination.
    pub fn ctrl(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::CTRL)
    }

    /// Create a Cmd+key combination (Meta+key outside macOS).
    pub fn cmd(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::CMD)
    }
}

/// Prefix of the text form of a [`Key::Unknown`] code, as in `"Ctrl+Key#7"`.
const UNKNOWN_KEY_PREFIX: &str = "Key#";

/// Native text, except that unknown keys are written as `Key#<code>` so the
/// output always parses back.
impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Key::Unknown(code) => {
                if self.modifiers.any() {
                    write!(f, "{}+", native_modifiers_text(self.modifiers))?;
                }
                write!(f, "{UNKNOWN_KEY_PREFIX}{code}")
            }
            _ => f.write_str(&native_keystroke_text(self)),
        }
    }
}

impl FromStr for KeyCombination {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_combination(s)
    }
}

// =============================================================================
// Shortcut (one keystroke, or a two-keystroke chord)
// =============================================================================

/// Maximum number of keystrokes in a shortcut.
pub const MAX_SHORTCUT_KEYSTROKES: usize = 2;

/// A keyboard shortcut bound to a command.
///
/// Either a single keystroke, or a chord of two keystrokes pressed one after
/// the other ("Ctrl+K, Ctrl+C").
///
/// # String Format
///
/// Keystrokes are separated by a comma, modifiers and key by `+`:
/// - Single: `"Ctrl+S"`, `"Alt+F4"`, `"F1"`
/// - Chord: `"Ctrl+K, Ctrl+C"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    first: KeyCombination,
    second: Option<KeyCombination>,
}

impl Shortcut {
    /// Create a single-keystroke shortcut.
    pub fn single(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self::from_combination(KeyCombination::new(key, modifiers))
    }

    /// Create a shortcut from one keystroke.
    pub fn from_combination(first: KeyCombination) -> Self {
        Self {
            first,
            second: None,
        }
    }

    /// Create a two-keystroke chord.
    pub fn chord(first: KeyCombination, second: KeyCombination) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// The keystroke pressed first.
    pub fn first(&self) -> &KeyCombination {
        &self.first
    }

    /// The keystroke pressed second, for chords.
    pub fn second(&self) -> Option<&KeyCombination> {
        self.second.as_ref()
    }

    /// Check if this shortcut needs two keystrokes.
    pub fn is_chord(&self) -> bool {
        self.second.is_some()
    }

    /// Iterate the keystrokes in press order.
    pub fn keystrokes(&self) -> impl Iterator<Item = &KeyCombination> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some(second) = &self.second {
            write!(f, ", {second}")?;
        }
        Ok(())
    }
}

impl From<KeyCombination> for Shortcut {
    fn from(combo: KeyCombination) -> Self {
        Self::from_combination(combo)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error type for parsing shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutParseError {
    /// The string is empty.
    #[error("empty shortcut")]
    Empty,
    /// No key was specified (only modifiers).
    #[error("no key specified (only modifiers)")]
    NoKey,
    /// Unknown key name.
    #[error("unknown key: {0}")]
    UnknownKey(String),
    /// More keystrokes than a shortcut can hold.
    #[error("too many keystrokes (max {MAX_SHORTCUT_KEYSTROKES})")]
    TooManyKeys,
}

/// Parse a single key combination from a string like "Ctrl+S".
fn parse_key_combination(s: &str) -> Result<KeyCombination, ShortcutParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ShortcutParseError::Empty);
    }

    let mut modifiers = KeyboardModifiers::NONE;
    let mut key: Option<Key> = None;

    for part in s.split('+') {
        let part = part.trim();
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.control = true,
            "alt" | "option" | "opt" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            "meta" | "cmd" | "command" | "win" | "super" => modifiers.meta = true,
            _ => key = Some(parse_key(part)?),
        }
    }

    key.map(|k| KeyCombination::new(k, modifiers))
        .ok_or(ShortcutParseError::NoKey)
}

impl FromStr for Shortcut {
    type Err = ShortcutParseError;

    /// Parse a shortcut such as `"Ctrl+S"` or `"Ctrl+K, Ctrl+C"`.
    ///
    /// Modifiers: `Ctrl`, `Alt`, `Shift`, `Meta` (also `Cmd`). Keys: letters,
    /// digits, `F1`-`F12`, named keys and punctuation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() > MAX_SHORTCUT_KEYSTROKES {
            return Err(ShortcutParseError::TooManyKeys);
        }

        let first = parse_key_combination(parts[0])?;
        let second = match parts.get(1) {
            Some(part) => Some(parse_key_combination(part)?),
            None => None,
        };

        Ok(Shortcut { first, second })
    }
}

/// Parse a key name to a Key enum value.
fn parse_key(s: &str) -> Result<Key, ShortcutParseError> {
    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if let Some(key) = char_to_key(ch) {
            return Ok(key);
        }
    }

    let lower = s.to_lowercase();
    if let Some(code) = lower.strip_prefix("key#") {
        return code
            .parse()
            .map(Key::Unknown)
            .map_err(|_| ShortcutParseError::UnknownKey(s.to_string()));
    }

    match lower.as_str() {
        // Function keys
        "f1" => Ok(Key::F1),
        "f2" => Ok(Key::F2),
        "f3" => Ok(Key::F3),
        "f4" => Ok(Key::F4),
        "f5" => Ok(Key::F5),
        "f6" => Ok(Key::F6),
        "f7" => Ok(Key::F7),
        "f8" => Ok(Key::F8),
        "f9" => Ok(Key::F9),
        "f10" => Ok(Key::F10),
        "f11" => Ok(Key::F11),
        "f12" => Ok(Key::F12),

        // Navigation
        "up" | "arrowup" => Ok(Key::ArrowUp),
        "down" | "arrowdown" => Ok(Key::ArrowDown),
        "left" | "arrowleft" => Ok(Key::ArrowLeft),
        "right" | "arrowright" => Ok(Key::ArrowRight),
        "home" => Ok(Key::Home),
        "end" => Ok(Key::End),
        "pageup" | "pgup" | "page up" => Ok(Key::PageUp),
        "pagedown" | "pgdn" | "page down" => Ok(Key::PageDown),

        // Editing
        "backspace" | "back space" => Ok(Key::Backspace),
        "delete" | "del" => Ok(Key::Delete),
        "insert" | "ins" => Ok(Key::Insert),
        "enter" | "return" => Ok(Key::Enter),
        "tab" => Ok(Key::Tab),
        "space" | "spacebar" => Ok(Key::Space),
        "escape" | "esc" => Ok(Key::Escape),
        "capslock" | "caps lock" => Ok(Key::CapsLock),
        "printscreen" | "print screen" => Ok(Key::PrintScreen),
        "pause" => Ok(Key::Pause),

        // Punctuation
        "minus" => Ok(Key::Minus),
        "equal" | "equals" => Ok(Key::Equal),
        "bracketleft" | "open bracket" => Ok(Key::BracketLeft),
        "bracketright" | "close bracket" => Ok(Key::BracketRight),
        "backslash" | "back slash" => Ok(Key::Backslash),
        "semicolon" => Ok(Key::Semicolon),
        "quote" => Ok(Key::Quote),
        "comma" => Ok(Key::Comma),
        "period" => Ok(Key::Period),
        "slash" => Ok(Key::Slash),
        "grave" | "back quote" => Ok(Key::Grave),

        // Numpad
        "numpad0" => Ok(Key::Numpad0),
        "numpad1" => Ok(Key::Numpad1),
        "numpad2" => Ok(Key::Numpad2),
        "numpad3" => Ok(Key::Numpad3),
        "numpad4" => Ok(Key::Numpad4),
        "numpad5" => Ok(Key::Numpad5),
        "numpad6" => Ok(Key::Numpad6),
        "numpad7" => Ok(Key::Numpad7),
        "numpad8" => Ok(Key::Numpad8),
        "numpad9" => Ok(Key::Numpad9),
        "numpad +" | "numpadadd" => Ok(Key::NumpadAdd),
        "numpad -" | "numpadsubtract" => Ok(Key::NumpadSubtract),
        "numpad *" | "numpadmultiply" => Ok(Key::NumpadMultiply),
        "numpad /" | "numpaddivide" => Ok(Key::NumpadDivide),
        "numpad ." | "numpaddecimal" => Ok(Key::NumpadDecimal),
        "numpadenter" => Ok(Key::NumpadEnter),

        _ => Err(ShortcutParseError::UnknownKey(s.to_string())),
    }
}

/// Map a single printable character to its key.
fn char_to_key(ch: char) -> Option<Key> {
    match ch.to_ascii_uppercase() {
        'A' => Some(Key::A),
        'B' => Some(Key::B),
        'C' => Some(Key::C),
        'D' => Some(Key::D),
        'E' => Some(Key::E),
        'F' => Some(Key::F),
        'G' => Some(Key::G),
        'H' => Some(Key::H),
        'I' => Some(Key::I),
        'J' => Some(Key::J),
        'K' => Some(Key::K),
        'L' => Some(Key::L),
        'M' => Some(Key::M),
        'N' => Some(Key::N),
        'O' => Some(Key::O),
        'P' => Some(Key::P),
        'Q' => Some(Key::Q),
        'R' => Some(Key::R),
        'S' => Some(Key::S),
        'T' => Some(Key::T),
        'U' => Some(Key::U),
        'V' => Some(Key::V),
        'W' => Some(Key::W),
        'X' => Some(Key::X),
        'Y' => Some(Key::Y),
        'Z' => Some(Key::Z),
        '0' => Some(Key::Digit0),
        '1' => Some(Key::Digit1),
        '2' => Some(Key::Digit2),
        '3' => Some(Key::Digit3),
        '4' => Some(Key::Digit4),
        '5' => Some(Key::Digit5),
        '6' => Some(Key::Digit6),
        '7' => Some(Key::Digit7),
        '8' => Some(Key::Digit8),
        '9' => Some(Key::Digit9),
        '-' => Some(Key::Minus),
        '=' => Some(Key::Equal),
        '[' => Some(Key::BracketLeft),
        ']' => Some(Key::BracketRight),
        '\\' => Some(Key::Backslash),
        ';' => Some(Key::Semicolon),
        '\'' => Some(Key::Quote),
        '.' => Some(Key::Period),
        '/' => Some(Key::Slash),
        '`' => Some(Key::Grave),
        _ => None,
    }
}

static_assertions::assert_impl_all!(Shortcut: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_single_shortcut() {
        let shortcut = Shortcut::single(Key::S, KeyboardModifiers::CTRL);
        assert_eq!(shortcut.first().key, Key::S);
        assert!(shortcut.first().modifiers.control);
        assert!(!shortcut.is_chord());
        assert_eq!(shortcut.keystrokes().count(), 1);
    }

    #[test]
    fn test_chord_shortcut() {
        let shortcut = Shortcut::chord(KeyCombination::ctrl(Key::K), KeyCombination::ctrl(Key::C));
        assert!(shortcut.is_chord());
        assert_eq!(shortcut.second().map(|c| c.key), Some(Key::C));
        assert_eq!(shortcut.keystrokes().count(), 2);
    }

    #[test]
    fn test_shortcut_display() {
        assert_eq!(Shortcut::single(Key::S, KeyboardModifiers::CTRL).to_string(), "Ctrl+S");
        assert_eq!(Shortcut::single(Key::F4, KeyboardModifiers::ALT).to_string(), "Alt+F4");
        assert_eq!(
            Shortcut::single(Key::N, KeyboardModifiers::CTRL_SHIFT).to_string(),
            "Ctrl+Shift+N"
        );
        assert_eq!(Shortcut::from(KeyCombination::key_only(Key::F1)).to_string(), "F1");
        assert_eq!(
            Shortcut::chord(KeyCombination::ctrl(Key::K), KeyCombination::ctrl(Key::C)).to_string(),
            "Ctrl+K, Ctrl+C"
        );
    }

    // =========================================================================
    // Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_simple_key() {
        let shortcut: Shortcut = "S".parse().unwrap();
        assert_eq!(shortcut.first().key, Key::S);
        assert!(shortcut.first().modifiers.none());
    }

    #[test]
    fn test_parse_modifiers() {
        let shortcut: Shortcut = "Ctrl+Shift+N".parse().unwrap();
        assert_eq!(shortcut.first().key, Key::N);
        assert!(shortcut.first().modifiers.control);
        assert!(shortcut.first().modifiers.shift);

        let mac: Shortcut = "Cmd+C".parse().unwrap();
        assert_eq!(*mac.first(), KeyCombination::cmd(Key::C));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let lower: Shortcut = "ctrl+s".parse().unwrap();
        let upper: Shortcut = "CTRL+S".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_named_and_punctuation_keys() {
        let enter: Shortcut = "Ctrl+Enter".parse().unwrap();
        assert_eq!(enter.first().key, Key::Enter);

        let minus: Shortcut = "Ctrl+-".parse().unwrap();
        assert_eq!(minus.first().key, Key::Minus);

        let f5: Shortcut = "Shift+F5".parse().unwrap();
        assert_eq!(f5.first().key, Key::F5);
    }

    #[test]
    fn test_parse_chord() {
        let chord: Shortcut = "Ctrl+K, Ctrl+C".parse().unwrap();
        assert_eq!(*chord.first(), KeyCombination::ctrl(Key::K));
        assert_eq!(chord.second(), Some(&KeyCombination::ctrl(Key::C)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Shortcut>(), Err(ShortcutParseError::Empty));
        assert_eq!("Ctrl+Shift".parse::<Shortcut>(), Err(ShortcutParseError::NoKey));
        assert_eq!(
            "Ctrl+Nope".parse::<Shortcut>(),
            Err(ShortcutParseError::UnknownKey("Nope".to_string()))
        );
        assert_eq!("A, B, C".parse::<Shortcut>(), Err(ShortcutParseError::TooManyKeys));
        assert_eq!("Ctrl+K,".parse::<Shortcut>(), Err(ShortcutParseError::Empty));
    }

    #[test]
    fn test_display_parses_back() {
        let original: Shortcut = "Ctrl+Alt+Delete".parse().unwrap();
        let reparsed: Shortcut = original.to_string().parse().unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_unknown_key_display_parses_back() {
        let original = Shortcut::single(Key::Unknown(7), KeyboardModifiers::CTRL);
        assert_eq!(original.to_string(), "Ctrl+Key#7");
        let reparsed: Shortcut = original.to_string().parse().unwrap();
        assert_eq!(original, reparsed);

        let chord = Shortcut::chord(KeyCombination::ctrl(Key::K), KeyCombination::key_only(Key::Unknown(300)));
        assert_eq!(chord.to_string(), "Ctrl+K, Key#300");
        assert_eq!(chord.to_string().parse::<Shortcut>().unwrap(), chord);

        assert!(matches!("Ctrl+Key#x".parse::<Shortcut>(), Err(ShortcutParseError::UnknownKey(_))));
    }

    #[test]
    fn test_punctuation_display_parses_back() {
        for key in [Key::Minus, Key::Equal, Key::BracketLeft, Key::Backslash, Key::Period, Key::Grave] {
            let original = Shortcut::single(key, KeyboardModifiers::CTRL_SHIFT);
            let reparsed: Shortcut = original.to_string().parse().unwrap();
            assert_eq!(original, reparsed);
        }
    }
}
