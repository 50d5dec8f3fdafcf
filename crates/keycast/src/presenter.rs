//! The presenter lifecycle controller.
//!
//! [`ShortcutPresenter`] ties the pipeline to a [`Host`]. Once enabled it
//! listens for focus changes on every project window and for commands firing,
//! and keeps a single overlay panel up to date:
//!
//! - A project window gaining focus announces the project, once per switch.
//! - A command firing shows its label and shortcuts, unless it is cursor
//!   movement or typing.
//!
//! # Example
//!
//! ```ignore
//! let mut presenter = ShortcutPresenter::new(host, PresenterConfig::default());
//! presenter.enable();
//!
//! // From the host's event loop:
//! presenter.handle_event(HostEvent::CommandFired(event));
//!
//! presenter.disable();
//! ```
//!
//! All state lives in the presenter value, so several presenters can run side
//! by side against different hosts.

use std::collections::{HashMap, HashSet};

use keycast_core::logging::targets;

use crate::compose::{ActionInfoComposer, Collaborators};
use crate::config::PresenterConfig;
use crate::fragment::{bold, Fragment};
use crate::host::{
    CommandEvent, EventStream, Host, HostEvent, ListenerId, OverlayPanel, ProjectId,
    SubscriptionId, WindowId,
};
use crate::menu::ParentMenuResolver;

/// Commands that move the caret or scroll.
pub const MOVING_COMMANDS: [&str; 22] = [
    "EditorLeft",
    "EditorRight",
    "EditorDown",
    "EditorUp",
    "EditorLineStart",
    "EditorLineEnd",
    "EditorPageUp",
    "EditorPageDown",
    "EditorPreviousWord",
    "EditorNextWord",
    "EditorScrollUp",
    "EditorScrollDown",
    "EditorTextStart",
    "EditorTextEnd",
    "EditorDownWithSelection",
    "EditorUpWithSelection",
    "EditorRightWithSelection",
    "EditorLeftWithSelection",
    "EditorLineStartWithSelection",
    "EditorLineEndWithSelection",
    "EditorPageDownWithSelection",
    "EditorPageUpWithSelection",
];

/// Commands fired while typing.
pub const TYPING_COMMANDS: [&str; 3] = ["EditorBackSpace", "EditorEnter", "NextTemplateVariable"];

/// A focus listener attached to a project window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FocusListener {
    id: ListenerId,
    project: ProjectId,
}

/// Presenter state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PresenterState {
    Disabled,
    Enabled { subscriptions: Vec<SubscriptionId> },
}

/// Shows commands and their shortcuts as they fire.
pub struct ShortcutPresenter<H: Host> {
    host: H,
    composer: ActionInfoComposer,
    ignored: HashSet<String>,
    project_banner: bool,
    state: PresenterState,
    listeners: HashMap<WindowId, FocusListener>,
    last_shown_project: Option<ProjectId>,
    panel: Option<Box<dyn OverlayPanel>>,
}

impl<H: Host> ShortcutPresenter<H> {
    /// Create a disabled presenter.
    pub fn new(host: H, config: PresenterConfig) -> Self {
        let ignored = MOVING_COMMANDS
            .iter()
            .chain(TYPING_COMMANDS.iter())
            .map(|id| id.to_string())
            .chain(config.ignored_commands)
            .collect();
        let composer = ActionInfoComposer::new(
            config.main_keymap,
            config.alternative_keymap,
            ParentMenuResolver::new(config.parent_groups),
        );

        Self {
            host,
            composer,
            ignored,
            project_banner: config.project_banner,
            state: PresenterState::Disabled,
            listeners: HashMap::new(),
            last_shown_project: None,
            panel: None,
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The composer.
    pub fn composer(&self) -> &ActionInfoComposer {
        &self.composer
    }

    /// Check if the presenter is enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(self.state, PresenterState::Enabled { .. })
    }

    /// Check if a command is never announced.
    pub fn is_ignored(&self, command_id: &str) -> bool {
        self.ignored.contains(command_id)
    }

    /// The project most recently announced by a focus change.
    pub fn last_shown_project(&self) -> Option<ProjectId> {
        self.last_shown_project
    }

    /// Number of windows with an attached focus listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Check if an overlay panel is held.
    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to every open project window and subscribe to host events.
    ///
    /// Does nothing if already enabled.
    #[tracing::instrument(skip_all, target = "keycast::presenter", level = "debug")]
    pub fn enable(&mut self) {
        if self.is_enabled() {
            return;
        }

        for project in self.host.open_projects() {
            self.attach_listener(project);
        }
        let subscriptions: Vec<SubscriptionId> = EventStream::ALL
            .iter()
            .map(|stream| self.host.subscribe(*stream))
            .collect();
        self.state = PresenterState::Enabled { subscriptions };

        tracing::debug!(
            target: targets::PRESENTER,
            listeners = self.listeners.len(),
            "presenter enabled"
        );
    }

    /// Detach all listeners, drop subscriptions and close the overlay.
    ///
    /// Does nothing if already disabled.
    #[tracing::instrument(skip_all, target = "keycast::presenter", level = "debug")]
    pub fn disable(&mut self) {
        let PresenterState::Enabled { subscriptions } =
            std::mem::replace(&mut self.state, PresenterState::Disabled)
        else {
            return;
        };

        for subscription in subscriptions {
            self.host.unsubscribe(subscription);
        }
        for (window, listener) in self.listeners.drain() {
            self.host.remove_focus_listener(window, listener.id);
        }
        self.last_shown_project = None;
        if let Some(mut panel) = self.panel.take() {
            panel.close();
        }

        tracing::debug!(target: targets::PRESENTER, "presenter disabled");
    }

    // =========================================================================
    // Event Routing
    // =========================================================================

    /// Process one host notification. Ignored while disabled.
    #[tracing::instrument(skip_all, target = "keycast::presenter", level = "trace")]
    pub fn handle_event(&mut self, event: HostEvent) {
        if !self.is_enabled() {
            tracing::trace!(target: targets::PRESENTER, ?event, "presenter disabled, event dropped");
            return;
        }

        match event {
            HostEvent::AppActivated => {}
            HostEvent::AppDeactivated => self.last_shown_project = None,
            HostEvent::ProjectOpened(project) => self.attach_listener(project),
            HostEvent::ProjectClosed(project) => self.detach_listener(project),
            HostEvent::WindowFocusGained(window) => {
                match self.listeners.get(&window).map(|listener| listener.project) {
                    Some(project) => self.show_project_info(project),
                    None => {
                        tracing::trace!(target: targets::PRESENTER, ?window, "focus on unlistened window");
                    }
                }
            }
            HostEvent::CommandFired(command) => self.show_action_info(command),
        }
    }

    fn attach_listener(&mut self, project: ProjectId) {
        let Some(window) = self.host.frame_for(project) else {
            tracing::warn!(target: targets::PRESENTER, ?project, "project has no frame window");
            return;
        };

        if let Some(old) = self.listeners.remove(&window) {
            self.host.remove_focus_listener(window, old.id);
        }
        let id = self.host.add_focus_listener(window);
        self.listeners.insert(window, FocusListener { id, project });
    }

    fn detach_listener(&mut self, project: ProjectId) {
        let windows: Vec<WindowId> = self
            .listeners
            .iter()
            .filter(|(_, listener)| listener.project == project)
            .map(|(window, _)| *window)
            .collect();

        for window in windows {
            if let Some(listener) = self.listeners.remove(&window) {
                self.host.remove_focus_listener(window, listener.id);
            }
        }
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    fn show_project_info(&mut self, project: ProjectId) {
        if !self.project_banner {
            return;
        }
        let Some(info) = self.host.project_info(project).filter(|info| info.is_live()) else {
            return;
        };
        if self.last_shown_project == Some(project) {
            tracing::trace!(target: targets::PRESENTER, ?project, "project already announced");
            return;
        }

        self.last_shown_project = Some(project);
        let fragments = vec![Fragment::text(format!("{}{}", bold("Project: "), info.name))];
        self.show(project, fragments);
    }

    fn show_action_info(&mut self, command: CommandEvent) {
        let CommandEvent {
            command_id,
            context,
        } = command;

        if command_id.is_empty() || self.ignored.contains(&command_id) {
            tracing::trace!(target: targets::PRESENTER, command = %command_id, "command ignored");
            return;
        }
        let Some(context) = context else {
            tracing::trace!(target: targets::PRESENTER, command = %command_id, "command has no context");
            return;
        };

        let services = Collaborators {
            registry: self.host.command_registry(),
            keymaps: self.host.keymaps(),
            platform: self.host.platform(),
        };
        let fragments =
            self.composer
                .compose(&command_id, context.display_label.as_deref(), services);

        let target = context
            .project
            .or_else(|| {
                context
                    .window
                    .and_then(|window| self.listeners.get(&window))
                    .map(|listener| listener.project)
            })
            .or_else(|| self.host.open_projects().first().copied());
        let Some(project) = target else {
            tracing::trace!(target: targets::PRESENTER, command = %command_id, "no project to show in");
            return;
        };
        if self.host.project_info(project).is_some_and(|info| info.is_live()) {
            self.show(project, fragments);
        }
    }

    fn show(&mut self, project: ProjectId, fragments: Vec<Fragment>) {
        if let Some(panel) = self
            .panel
            .as_mut()
            .filter(|panel| panel.can_be_reused(project))
        {
            panel.update_text(project, fragments);
            return;
        }
        self.panel = Some(self.host.create_panel(project, fragments));
    }
}

impl<H: Host> Drop for ShortcutPresenter<H> {
    fn drop(&mut self) {
        self.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_lists() {
        assert!(MOVING_COMMANDS.contains(&"EditorPageUpWithSelection"));
        assert!(TYPING_COMMANDS.contains(&"EditorBackSpace"));
        let unique: HashSet<&str> = MOVING_COMMANDS.iter().chain(TYPING_COMMANDS.iter()).copied().collect();
        assert_eq!(unique.len(), MOVING_COMMANDS.len() + TYPING_COMMANDS.len());
    }
}
