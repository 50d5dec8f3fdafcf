//! Logging targets for keycast.
//!
//! keycast uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in the host adapter:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("keycast=debug")
//!     .init();
//! ```
//!
//! Nothing in keycast logs at `error`: every resolution step degrades to an
//! empty value instead of failing. Skipped host handles are reported at
//! `warn`, routing decisions at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Root target.
    pub const ROOT: &str = "keycast";
    /// Keymap lookups.
    pub const KEYMAP: &str = "keycast::keymap";
    /// Parent menu resolution.
    pub const MENU: &str = "keycast::menu";
    /// Fragment composition.
    pub const COMPOSE: &str = "keycast::compose";
    /// Lifecycle controller.
    pub const PRESENTER: &str = "keycast::presenter";
    /// Configuration loading.
    pub const CONFIG: &str = "keycast::config";
}
