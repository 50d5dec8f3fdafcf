//! keycast - show the keyboard shortcut of every command as it fires.
//!
//! Built for live demos and screencasts: when a command runs in the host
//! editor, an overlay shows its name, the menu it belongs to, and the keys that
//! trigger it, optionally in a second keymap for viewers on another platform:
//!
//! ```text
//! Go To ▶ Class via Ctrl+N (⌘O for Mac)
//! ```
//!
//! The crate is organised as a pipeline:
//!
//! - [`keymap`]: configured keymap profiles and their bindings
//! - [`menu`]: parent menu names for commands
//! - [`compose`]: the overlay fragments for one command
//! - [`presenter`]: host event routing and overlay lifecycle
//!
//! Everything the pipeline needs from the editor goes through the [`Host`]
//! trait. Keyboard model and shortcut formatting come from `keycast-core` and
//! are re-exported here.
//!
//! # Example
//!
//! ```
//! use keycast::prelude::*;
//!
//! struct NoMenus;
//! impl CommandRegistry for NoMenus {
//!     fn menu_group(&self, _group_id: &str) -> Option<MenuNode> {
//!         None
//!     }
//! }
//!
//! let keymaps = KeymapSet::new().with("$default", InMemoryKeymap::standard(KeymapKind::Native));
//! let mut composer = ActionInfoComposer::new(
//!     KeymapDescription::new("$default", KeymapKind::Native),
//!     None,
//!     Default::default(),
//! );
//!
//! let services = Collaborators {
//!     registry: &NoMenus,
//!     keymaps: &keymaps,
//!     platform: &FixedPlatform::other(),
//! };
//! let fragments = composer.compose("$Copy", Some("Copy"), services);
//! assert_eq!(keycast::fragment::to_markup(&fragments), "<b>Copy</b> via&nbsp;Ctrl+C");
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod fragment;
pub mod host;
pub mod keymap;
pub mod menu;
pub mod platform;
pub mod prelude;
pub mod presenter;

pub use keycast_core::*;

pub use compose::{ActionInfoComposer, Collaborators, PARENT_SEPARATOR};
pub use config::PresenterConfig;
pub use error::{ConfigError, Result};
pub use fragment::{FontRef, Fragment};
pub use host::{
    CommandContext, CommandEvent, EventStream, Host, HostEvent, ListenerId, OverlayPanel,
    ProjectId, ProjectInfo, SubscriptionId, WindowId,
};
pub use keymap::{InMemoryKeymap, Keymap, KeymapDescription, KeymapLookup, KeymapSet};
pub use menu::{CommandRegistry, MenuNode, ParentMenuResolver, ParentNameIndex};
pub use platform::{FixedPlatform, NativePlatform, Platform};
pub use presenter::ShortcutPresenter;
