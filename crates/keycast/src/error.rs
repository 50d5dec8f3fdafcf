//! Error types for configuration loading.
//!
//! The presentation pipeline itself never fails; these errors only come out of
//! reading presenter settings and keymap bindings.

use keycast_core::ShortcutParseError;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or schema error.
    #[error("Failed to parse presenter configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A keymap binding whose shortcut text could not be parsed.
    #[error("Invalid shortcut for command '{command}': {source}")]
    InvalidShortcut {
        command: String,
        #[source]
        source: ShortcutParseError,
    },

    /// Main and alternative keymap refer to the same profile.
    #[error("Main and alternative keymap are both '{name}'")]
    SameKeymaps { name: String },
}

impl ConfigError {
    /// Create an invalid shortcut error.
    pub fn invalid_shortcut(command: impl Into<String>, source: ShortcutParseError) -> Self {
        Self::InvalidShortcut {
            command: command.into(),
            source,
        }
    }

    /// Create a same-keymaps error.
    pub fn same_keymaps(name: impl Into<String>) -> Self {
        Self::SameKeymaps { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::invalid_shortcut("$Copy", ShortcutParseError::Empty);
        assert!(err.to_string().starts_with("Invalid shortcut for command '$Copy'"));

        let err = ConfigError::same_keymaps("$default");
        assert_eq!(err.to_string(), "Main and alternative keymap are both '$default'");
    }
}
