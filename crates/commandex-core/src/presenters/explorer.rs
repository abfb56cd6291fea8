use std::time::{Duration, Instant};

use commandex_core_types::RefreshId;
use tracing::debug;

use super::collaborators::{
    CommandsExplorerView, Notification, NotificationManager, PartDescriptor, PartStackType,
    WorkspaceAgent,
};
use crate::delayed_task::DelayedTask;
use crate::errors::{CommandexError, Result};
use crate::grouping::group_with_registry;
use crate::model::{ApplicableContext, Command};
use crate::ops::CommandStore;
use crate::registry::GoalRegistry;

pub const EXPLORER_PART: PartDescriptor = PartDescriptor {
    id: "commands-explorer",
    title: "Commands",
    tooltip: "Manage commands",
};

pub const CREATE_FAILED_TITLE: &str = "Unable to create command";
pub const DUPLICATE_FAILED_TITLE: &str = "Unable to duplicate command";
pub const REMOVE_FAILED_TITLE: &str = "Unable to remove command";

/// Commands explorer presenter
///
/// Shows every registered goal with its commands. Store changes re-arm a
/// debounced refresh; `tick` runs it once the quiet period has passed.
pub struct CommandsExplorer {
    view: Box<dyn CommandsExplorerView>,
    notifications: Box<dyn NotificationManager>,
    workspace_agent: Box<dyn WorkspaceAgent>,
    refresh_task: DelayedTask,
    last_refresh: Option<RefreshId>,
}

impl CommandsExplorer {
    pub fn new(
        view: Box<dyn CommandsExplorerView>,
        notifications: Box<dyn NotificationManager>,
        workspace_agent: Box<dyn WorkspaceAgent>,
        refresh_delay: Duration,
    ) -> Self {
        Self {
            view,
            notifications,
            workspace_agent,
            refresh_task: DelayedTask::new(refresh_delay),
            last_refresh: None,
        }
    }

    pub fn part(&self) -> &'static PartDescriptor {
        &EXPLORER_PART
    }

    pub fn title(&self) -> &'static str {
        EXPLORER_PART.title
    }

    pub fn title_tooltip(&self) -> &'static str {
        EXPLORER_PART.tooltip
    }

    /// Show the explorer: refresh right away, no debounce
    pub fn open(&mut self, store: &CommandStore, registry: &GoalRegistry) {
        self.refresh_task.cancel();
        self.refresh(store, registry);
    }

    /// A command was added, updated or removed
    pub fn on_command_changed(&mut self, now: Instant) {
        self.refresh_task.notify(now);
    }

    /// Run the pending refresh if it is due. Returns true if it ran.
    pub fn tick(&mut self, now: Instant, store: &CommandStore, registry: &GoalRegistry) -> bool {
        if self.refresh_task.poll(now) {
            self.refresh(store, registry);
            true
        } else {
            false
        }
    }

    pub fn next_refresh_deadline(&self) -> Option<Instant> {
        self.refresh_task.deadline()
    }

    /// Regroup store contents over every registered goal and hand the
    /// result to the view
    pub fn refresh(&mut self, store: &CommandStore, registry: &GoalRegistry) {
        let refresh_id = RefreshId::new();
        let grouped = group_with_registry(store.list_commands(), registry);
        debug!(
            refresh_id = %refresh_id,
            command_count = grouped.total_commands(),
            bucket_count = grouped.bucket_count(),
            "explorer refresh"
        );
        self.view.set_commands(&grouped);
        self.last_refresh = Some(refresh_id);
    }

    pub fn last_refresh_id(&self) -> Option<&RefreshId> {
        self.last_refresh.as_ref()
    }

    /// Create a `type_id` command in the goal selected in the view
    ///
    /// Returns `Ok(None)` when no goal is selected.
    ///
    /// # Errors
    ///
    /// Store failures are reported as a notification and returned.
    pub fn on_command_add(
        &mut self,
        store: &mut CommandStore,
        type_id: &str,
    ) -> Result<Option<Command>> {
        let Some(goal) = self.view.selected_goal() else {
            debug!(type_id, "no goal selected, skipping command creation");
            return Ok(None);
        };

        let created = store.create_command(goal.id(), type_id, ApplicableContext::workspace());
        let command = self.report(CREATE_FAILED_TITLE, created)?;
        self.view.select_command(&command);
        Ok(Some(command))
    }

    /// # Errors
    ///
    /// Store failures are reported as a notification and returned.
    pub fn on_command_duplicate(
        &mut self,
        store: &mut CommandStore,
        command: &Command,
    ) -> Result<Command> {
        self.on_duplicate_named(store, &command.name)
    }

    /// Duplicate the command called `name`
    ///
    /// An unknown name is a store failure like any other and is notified.
    ///
    /// # Errors
    ///
    /// Store failures are reported as a notification and returned.
    pub fn on_duplicate_named(&mut self, store: &mut CommandStore, name: &str) -> Result<Command> {
        let duplicated = store.duplicate_command(name);
        let copy = self.report(DUPLICATE_FAILED_TITLE, duplicated)?;
        self.view.select_command(&copy);
        Ok(copy)
    }

    /// # Errors
    ///
    /// Store failures are reported as a notification and returned.
    pub fn on_command_remove(&mut self, store: &mut CommandStore, command: &Command) -> Result<()> {
        self.on_remove_named(store, &command.name).map(|_| ())
    }

    /// Remove the command called `name`, returning it
    ///
    /// # Errors
    ///
    /// Store failures are reported as a notification and returned.
    pub fn on_remove_named(&mut self, store: &mut CommandStore, name: &str) -> Result<Command> {
        let removed = store.remove_command(name);
        self.report(REMOVE_FAILED_TITLE, removed)
    }

    pub fn on_ws_agent_started(&mut self) {
        self.workspace_agent
            .open_part(&EXPLORER_PART, PartStackType::Navigation);
        self.workspace_agent.set_active_part(&EXPLORER_PART);
    }

    pub fn on_ws_agent_stopped(&mut self) {}

    /// Drop any pending refresh. Returns true if one was pending.
    pub fn dispose(&mut self) -> bool {
        self.refresh_task.cancel()
    }

    fn report<T>(&mut self, title: &str, result: Result<T>) -> Result<T> {
        result.map_err(|err: CommandexError| {
            self.notifications
                .notify(Notification::failure(title, err.to_string()));
            err
        })
    }
}
