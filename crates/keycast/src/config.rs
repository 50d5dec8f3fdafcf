//! Presenter settings.
//!
//! Settings are read from TOML and never written back:
//!
//! ```toml
//! parent_groups = ["GoToMenu", "FoldingGroup"]
//! ignored_commands = ["EditorEscape"]
//! project_banner = true
//!
//! [main_keymap]
//! name = "$default"
//! kind = "native"
//!
//! [alternative_keymap]
//! name = "Mac OS X 10.5+"
//! kind = "cross-platform"
//! display_text = "for Mac"
//! ```

use keycast_core::logging::targets;
use keycast_core::KeymapKind;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::keymap::KeymapDescription;

/// Name of the host's default (Windows/Linux) keymap profile.
pub const DEFAULT_KEYMAP: &str = "$default";

/// Name of the host's macOS keymap profile.
pub const MAC_KEYMAP: &str = "Mac OS X 10.5+";

/// Root menu groups whose commands are prefixed with the group label.
pub const DEFAULT_PARENT_GROUPS: [&str; 4] = [
    "CodeCompletionGroup",
    "FoldingGroup",
    "GoToMenu",
    "IntroduceActionsGroup",
];

/// Presenter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Keymap whose shortcuts are shown first.
    pub main_keymap: KeymapDescription,

    /// Keymap shown in parentheses after the main shortcut.
    #[serde(default)]
    pub alternative_keymap: Option<KeymapDescription>,

    /// Root menu groups for parent names, walked in order. Later groups win
    /// when a command appears in several.
    #[serde(default = "default_parent_groups")]
    pub parent_groups: Vec<String>,

    /// Commands never announced, in addition to cursor movement and typing.
    #[serde(default)]
    pub ignored_commands: Vec<String>,

    /// Announce the project when its window gains focus.
    #[serde(default = "default_true")]
    pub project_banner: bool,
}

fn default_parent_groups() -> Vec<String> {
    DEFAULT_PARENT_GROUPS.iter().map(|id| id.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self::for_platform(cfg!(target_os = "macos"))
    }
}

impl PresenterConfig {
    /// Defaults for a platform.
    ///
    /// The platform's own keymap is the main one; the other platform's keymap
    /// is the alternative, labelled with who it is for.
    pub fn for_platform(mac: bool) -> Self {
        let mac_keymap = KeymapDescription::new(MAC_KEYMAP, KeymapKind::CrossPlatform);
        let default_keymap = KeymapDescription::new(DEFAULT_KEYMAP, KeymapKind::Native);

        let (main_keymap, alternative_keymap) = if mac {
            (mac_keymap, default_keymap.with_display_text("for Win/Linux"))
        } else {
            (default_keymap, mac_keymap.with_display_text("for Mac"))
        };

        Self {
            main_keymap,
            alternative_keymap: Some(alternative_keymap),
            parent_groups: default_parent_groups(),
            ignored_commands: Vec::new(),
            project_banner: true,
        }
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(
            target: targets::CONFIG,
            main = %config.main_keymap.name,
            alternative = config.alternative_keymap.as_ref().map(|k| k.name.as_str()),
            "loaded presenter configuration"
        );
        Ok(config)
    }

    /// Check that the keymaps are distinct.
    pub fn validate(&self) -> Result<()> {
        match &self.alternative_keymap {
            Some(alternative) if alternative.name == self.main_keymap.name => {
                Err(ConfigError::same_keymaps(alternative.name.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Builder: replace the alternative keymap.
    pub fn with_alternative(mut self, alternative: Option<KeymapDescription>) -> Self {
        self.alternative_keymap = alternative;
        self
    }

    /// Builder: replace the parent groups.
    pub fn with_parent_groups(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.parent_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: add ignored commands.
    pub fn with_ignored_commands(
        mut self,
        commands: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.ignored_commands.extend(commands.into_iter().map(Into::into));
        self
    }

    /// Builder: enable or disable the project banner.
    pub fn with_project_banner(mut self, enabled: bool) -> Self {
        self.project_banner = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults() {
        let mac = PresenterConfig::for_platform(true);
        assert_eq!(mac.main_keymap.name, MAC_KEYMAP);
        assert_eq!(mac.main_keymap.kind, KeymapKind::CrossPlatform);
        let alternative = mac.alternative_keymap.unwrap();
        assert_eq!(alternative.name, DEFAULT_KEYMAP);
        assert_eq!(alternative.display_text, "for Win/Linux");

        let other = PresenterConfig::for_platform(false);
        assert_eq!(other.main_keymap.kind, KeymapKind::Native);
        assert_eq!(other.alternative_keymap.unwrap().display_text, "for Mac");
        assert_eq!(other.parent_groups.len(), 4);
        assert!(other.project_banner);
    }

    #[test]
    fn test_minimal_toml() {
        let config = PresenterConfig::from_toml_str(
            r#"
            [main_keymap]
            name = "$default"
            kind = "native"
            "#,
        )
        .unwrap();

        assert_eq!(config.alternative_keymap, None);
        assert_eq!(config.parent_groups, default_parent_groups());
        assert!(config.ignored_commands.is_empty());
        assert!(config.project_banner);
    }

    #[test]
    fn test_full_toml() {
        let config = PresenterConfig::from_toml_str(
            r#"
            parent_groups = ["GoToMenu"]
            ignored_commands = ["EditorEscape"]
            project_banner = false

            [main_keymap]
            name = "$default"
            kind = "native"

            [alternative_keymap]
            name = "Mac OS X 10.5+"
            kind = "cross-platform"
            display_text = "for Mac"
            "#,
        )
        .unwrap();

        assert_eq!(config.parent_groups, vec!["GoToMenu".to_string()]);
        assert_eq!(config.ignored_commands, vec!["EditorEscape".to_string()]);
        assert!(!config.project_banner);
        assert_eq!(config, PresenterConfig::for_platform(false)
            .with_parent_groups(["GoToMenu"])
            .with_ignored_commands(["EditorEscape"])
            .with_project_banner(false));
    }

    #[test]
    fn test_same_keymaps_rejected() {
        let err = PresenterConfig::from_toml_str(
            r#"
            [main_keymap]
            name = "$default"
            kind = "native"

            [alternative_keymap]
            name = "$default"
            kind = "cross-platform"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::SameKeymaps { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = PresenterConfig::from_toml_str("[main_keymap]\nkind = \"qwerty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
