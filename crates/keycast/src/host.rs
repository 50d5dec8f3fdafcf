//! The host application as seen by the presenter.
//!
//! The presenter never talks to an editor directly. A host adapter implements
//! [`Host`] on top of the editor's project manager, window manager, action
//! system and keymap service, and feeds the editor's notifications back in as
//! [`HostEvent`]s. The adapter hands out the id types below and keeps the map
//! from ids to its own native handles.

use crate::fragment::Fragment;
use crate::keymap::KeymapLookup;
use crate::menu::CommandRegistry;
use crate::platform::Platform;

slotmap::new_key_type! {
    /// Identifies an open project.
    pub struct ProjectId;

    /// Identifies a project frame window.
    pub struct WindowId;

    /// Identifies a focus listener attached to a window.
    pub struct ListenerId;

    /// Identifies a subscription to a host event stream.
    pub struct SubscriptionId;
}

/// What the presenter needs to know about a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Display name.
    pub name: String,
    /// The project is open.
    pub open: bool,
    /// The project has been disposed.
    pub disposed: bool,
}

impl ProjectInfo {
    /// An open, live project.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: true,
            disposed: false,
        }
    }

    /// Check if overlays may be shown for this project.
    pub fn is_live(&self) -> bool {
        self.open && !self.disposed
    }
}

/// Host notification streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStream {
    /// Application activation and deactivation.
    AppActivation,
    /// Project opened and closed.
    ProjectLifecycle,
    /// Commands about to fire.
    CommandFiring,
}

impl EventStream {
    /// Every stream the presenter subscribes to.
    pub const ALL: [EventStream; 3] = [
        EventStream::AppActivation,
        EventStream::ProjectLifecycle,
        EventStream::CommandFiring,
    ];
}

/// UI context a command fired in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    /// Project the command acts on.
    pub project: Option<ProjectId>,
    /// Window the command was invoked from.
    pub window: Option<WindowId>,
    /// Label the host shows for the command.
    pub display_label: Option<String>,
}

/// A command about to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    /// Command id.
    pub command_id: String,
    /// UI context, absent for commands fired programmatically.
    pub context: Option<CommandContext>,
}

impl CommandEvent {
    /// A command fired with a display label and project.
    pub fn new(
        command_id: impl Into<String>,
        label: impl Into<String>,
        project: Option<ProjectId>,
    ) -> Self {
        Self {
            command_id: command_id.into(),
            context: Some(CommandContext {
                project,
                window: None,
                display_label: Some(label.into()),
            }),
        }
    }

    /// A command fired without UI context.
    pub fn without_context(command_id: impl Into<String>) -> Self {
        Self {
            command_id: command_id.into(),
            context: None,
        }
    }
}

/// Notifications delivered by the host, in host order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The application came to the foreground.
    AppActivated,
    /// The application went to the background.
    AppDeactivated,
    /// A project finished opening.
    ProjectOpened(ProjectId),
    /// A project closed.
    ProjectClosed(ProjectId),
    /// A window with an attached focus listener gained focus.
    WindowFocusGained(WindowId),
    /// A command is about to fire.
    CommandFired(CommandEvent),
}

/// The on-screen panel showing composed fragments.
pub trait OverlayPanel {
    /// Whether this panel can show text for `project` in place.
    fn can_be_reused(&self, project: ProjectId) -> bool;

    /// Replace the panel's text.
    fn update_text(&mut self, project: ProjectId, fragments: Vec<Fragment>);

    /// Hide the panel and release its resources.
    fn close(&mut self);
}

/// Services the presenter consumes from the host application.
pub trait Host {
    /// Projects currently open, in host order.
    fn open_projects(&self) -> Vec<ProjectId>;

    /// Details of a project, or `None` for a stale id.
    fn project_info(&self, project: ProjectId) -> Option<ProjectInfo>;

    /// The frame window of a project, if it has one.
    fn frame_for(&self, project: ProjectId) -> Option<WindowId>;

    /// Attach a focus listener to a window.
    ///
    /// The host reports focus gains as [`HostEvent::WindowFocusGained`] until
    /// the listener is removed.
    fn add_focus_listener(&mut self, window: WindowId) -> ListenerId;

    /// Detach a focus listener. Unknown listeners are ignored.
    fn remove_focus_listener(&mut self, window: WindowId, listener: ListenerId);

    /// Start delivering events of a stream.
    fn subscribe(&mut self, stream: EventStream) -> SubscriptionId;

    /// Stop delivering events of a subscription. Unknown ids are ignored.
    fn unsubscribe(&mut self, subscription: SubscriptionId);

    /// Show a new overlay panel for a project.
    fn create_panel(&mut self, project: ProjectId, fragments: Vec<Fragment>) -> Box<dyn OverlayPanel>;

    /// The action system's command groups.
    fn command_registry(&self) -> &dyn CommandRegistry;

    /// The keymap service.
    fn keymaps(&self) -> &dyn KeymapLookup;

    /// Platform capabilities.
    fn platform(&self) -> &dyn Platform;
}

static_assertions::assert_impl_all!(HostEvent: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_liveness() {
        let mut info = ProjectInfo::open("keycast");
        assert!(info.is_live());
        info.disposed = true;
        assert!(!info.is_live());
        info = ProjectInfo {
            open: false,
            ..ProjectInfo::open("keycast")
        };
        assert!(!info.is_live());
    }

    #[test]
    fn test_command_event_constructors() {
        let event = CommandEvent::new("$Copy", "Copy", None);
        let context = event.context.unwrap();
        assert_eq!(context.display_label.as_deref(), Some("Copy"));
        assert_eq!(context.project, None);

        assert!(CommandEvent::without_context("$Copy").context.is_none());
    }

    #[test]
    fn test_all_streams() {
        assert_eq!(EventStream::ALL.len(), 3);
        assert!(EventStream::ALL.contains(&EventStream::CommandFiring));
    }
}
