//! Prelude module for keycast.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use keycast::prelude::*;
//! ```
//!
//! This provides access to:
//! - The presenter and its configuration (`ShortcutPresenter`, `PresenterConfig`)
//! - The host seam (`Host`, `OverlayPanel`, `HostEvent`, ids)
//! - Keymaps and shortcuts (`KeymapDescription`, `InMemoryKeymap`, `Shortcut`)
//! - Composer output (`Fragment`, `FontRef`)

// ============================================================================
// Presenter
// ============================================================================

pub use crate::config::PresenterConfig;
pub use crate::presenter::ShortcutPresenter;

// ============================================================================
// Host Seam
// ============================================================================

pub use crate::host::{
    CommandContext, CommandEvent, EventStream, Host, HostEvent, ListenerId, OverlayPanel,
    ProjectId, ProjectInfo, SubscriptionId, WindowId,
};
pub use crate::menu::{CommandRegistry, MenuNode};
pub use crate::platform::{FixedPlatform, NativePlatform, Platform};

// ============================================================================
// Keymaps and Shortcuts
// ============================================================================

pub use crate::keymap::{InMemoryKeymap, Keymap, KeymapDescription, KeymapLookup, KeymapSet};
pub use keycast_core::{Key, KeyCombination, KeyboardModifiers, KeymapKind, Shortcut};

// ============================================================================
// Composition
// ============================================================================

pub use crate::compose::{ActionInfoComposer, Collaborators};
pub use crate::fragment::{FontRef, Fragment};

#[cfg(test)]
mod tests {
    #![allow(unused)]
    use super::*;

    /// Verify that the prelude exports are accessible.
    #[test]
    fn test_prelude_types_exist() {
        let _config = PresenterConfig::default();
        let _keymap = InMemoryKeymap::standard(KeymapKind::Native);
        let _fragment = Fragment::bold("Copy");
        let _shortcut = Shortcut::single(Key::C, KeyboardModifiers::CTRL);
        let _platform = FixedPlatform::mac();
    }

    /// Compile-time check that a presenter can be built over any host.
    #[allow(dead_code)]
    fn _presenter_check<H: Host>(host: H) -> ShortcutPresenter<H> {
        ShortcutPresenter::new(host, PresenterConfig::default())
    }
}
