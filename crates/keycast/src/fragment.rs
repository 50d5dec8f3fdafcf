//! Rich-text fragments handed to the overlay.
//!
//! The overlay concatenates fragments left to right. Fragment text may contain
//! two markup tokens understood by the overlay renderer: `<b>…</b>` for bold
//! and `&nbsp;` for a non-breaking space.

use std::fmt;

/// Non-breaking space markup token.
pub const NBSP: &str = "&nbsp;";

/// A font the overlay should use for one fragment instead of its default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRef {
    family: String,
}

impl FontRef {
    /// Refer to a font by family name.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// The font family name.
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl fmt::Display for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.family)
    }
}

/// One unit of formatted overlay text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Markup text.
    pub text: String,
    /// Font override, `None` for the overlay's default font.
    pub font: Option<FontRef>,
}

impl Fragment {
    /// A fragment in the default font.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    /// A fragment rendered with a specific font.
    pub fn with_font(text: impl Into<String>, font: FontRef) -> Self {
        Self {
            text: text.into(),
            font: Some(font),
        }
    }

    /// A bold fragment in the default font.
    pub fn bold(text: &str) -> Self {
        Self::text(bold(text))
    }
}

/// Wrap text in bold markup.
pub fn bold(text: &str) -> String {
    format!("<b>{text}</b>")
}

/// Concatenate the markup of a fragment sequence, ignoring fonts.
pub fn to_markup(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

static_assertions::assert_impl_all!(Fragment: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_fragment() {
        let fragment = Fragment::bold("Copy");
        assert_eq!(fragment.text, "<b>Copy</b>");
        assert_eq!(fragment.font, None);
    }

    #[test]
    fn test_font_fragment() {
        let font = FontRef::new("Lucida Grande");
        let fragment = Fragment::with_font("⌘C", font.clone());
        assert_eq!(fragment.font.as_ref().map(FontRef::family), Some("Lucida Grande"));
        assert_eq!(font.to_string(), "Lucida Grande");
    }

    #[test]
    fn test_to_markup() {
        let fragments = vec![
            Fragment::bold("Copy"),
            Fragment::text(" via&nbsp;"),
            Fragment::text("Ctrl+C"),
        ];
        assert_eq!(to_markup(&fragments), "<b>Copy</b> via&nbsp;Ctrl+C");
    }
}
