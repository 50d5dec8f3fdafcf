//! Platform capabilities consulted while rendering shortcuts.
//!
//! Two questions decide how a shortcut is shown: does the running platform
//! use the symbol (macOS) keymap convention natively, and can the symbol font
//! draw a given glyph string. Both are answered through [`Platform`] so the
//! composer can run against a deterministic fake in tests.

use std::collections::HashSet;

use crate::fragment::FontRef;

/// Platform identification and glyph rendering capability.
pub trait Platform {
    /// Whether the platform natively shows shortcuts as symbol glyphs.
    fn uses_symbol_shortcuts(&self) -> bool;

    /// Font able to draw keystroke glyphs, if the platform has one.
    fn symbol_font(&self) -> Option<FontRef>;

    /// Whether `font` can draw every character of `text`.
    fn can_render(&self, font: &FontRef, text: &str) -> bool;
}

/// The platform this binary was compiled for.
///
/// No glyph probing is available without a font backend, so non-macOS
/// builds report no symbol font and fall back to text rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePlatform;

impl Platform for NativePlatform {
    fn uses_symbol_shortcuts(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn symbol_font(&self) -> Option<FontRef> {
        None
    }

    fn can_render(&self, _font: &FontRef, _text: &str) -> bool {
        false
    }
}

/// A platform with fixed answers.
///
/// The symbol font renders everything except the characters registered with
/// [`FixedPlatform::without_glyphs`].
#[derive(Debug, Clone, Default)]
pub struct FixedPlatform {
    symbol_shortcuts: bool,
    symbol_font: Option<FontRef>,
    missing_glyphs: HashSet<char>,
}

impl FixedPlatform {
    /// A macOS-like platform.
    pub fn mac() -> Self {
        Self {
            symbol_shortcuts: true,
            ..Self::default()
        }
    }

    /// A Windows/Linux-like platform without a symbol font.
    pub fn other() -> Self {
        Self::default()
    }

    /// Provide a symbol font.
    pub fn with_symbol_font(mut self, font: FontRef) -> Self {
        self.symbol_font = Some(font);
        self
    }

    /// Characters the symbol font cannot draw.
    pub fn without_glyphs(mut self, glyphs: impl IntoIterator<Item = char>) -> Self {
        self.missing_glyphs.extend(glyphs);
        self
    }
}

impl Platform for FixedPlatform {
    fn uses_symbol_shortcuts(&self) -> bool {
        self.symbol_shortcuts
    }

    fn symbol_font(&self) -> Option<FontRef> {
        self.symbol_font.clone()
    }

    fn can_render(&self, font: &FontRef, text: &str) -> bool {
        self.symbol_font.as_ref() == Some(font)
            && !text.chars().any(|c| self.missing_glyphs.contains(&c))
    }
}
