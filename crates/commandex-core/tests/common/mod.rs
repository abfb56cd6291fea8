#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use commandex_core::presenters::{
    CommandExecutor, CommandsExplorerView, Notification, NotificationManager, PartDescriptor,
    PartStackType, WorkspaceAgent,
};
use commandex_core::{Command, CommandStore, CommandsExplorer, Goal, GroupedCommands};

/// Shared record of everything the explorer collaborators were asked to do
#[derive(Default)]
pub struct Recorded {
    pub renders: Vec<GroupedCommands>,
    pub selected: Vec<String>,
    pub notifications: Vec<Notification>,
    pub parts: Vec<(String, Option<PartStackType>)>,
    pub executed: Vec<String>,
    pub selected_goal: Option<Goal>,
}

pub type Shared = Arc<Mutex<Recorded>>;

pub struct RecordingView(pub Shared);

impl CommandsExplorerView for RecordingView {
    fn set_commands(&mut self, grouped: &GroupedCommands) {
        self.0.lock().unwrap().renders.push(grouped.clone());
    }

    fn select_command(&mut self, command: &Command) {
        self.0.lock().unwrap().selected.push(command.name.clone());
    }

    fn selected_goal(&self) -> Option<Goal> {
        self.0.lock().unwrap().selected_goal.clone()
    }
}

pub struct RecordingNotifications(pub Shared);

impl NotificationManager for RecordingNotifications {
    fn notify(&mut self, notification: Notification) {
        self.0.lock().unwrap().notifications.push(notification);
    }
}

pub struct RecordingAgent(pub Shared);

impl WorkspaceAgent for RecordingAgent {
    fn open_part(&mut self, part: &PartDescriptor, stack: PartStackType) {
        self.0
            .lock()
            .unwrap()
            .parts
            .push((part.id.to_string(), Some(stack)));
    }

    fn set_active_part(&mut self, part: &PartDescriptor) {
        self.0.lock().unwrap().parts.push((part.id.to_string(), None));
    }
}

pub struct RecordingExecutor(pub Shared);

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, command: &Command) {
        self.0.lock().unwrap().executed.push(command.name.clone());
    }
}

pub fn recording_explorer(delay: Duration) -> (CommandsExplorer, Shared) {
    let shared: Shared = Arc::default();
    let explorer = CommandsExplorer::new(
        Box::new(RecordingView(shared.clone())),
        Box::new(RecordingNotifications(shared.clone())),
        Box::new(RecordingAgent(shared.clone())),
        delay,
    );
    (explorer, shared)
}

/// Command with an optional goal attribute
pub fn cmd(name: &str, goal: Option<&str>) -> Command {
    let command = Command::new(name, "custom");
    match goal {
        Some(g) => command.with_goal(g),
        None => command,
    }
}

pub fn store_with(commands: Vec<Command>) -> CommandStore {
    CommandStore::from_commands(commands).unwrap()
}

pub fn names(commands: &[Command]) -> Vec<&str> {
    commands.iter().map(|c| c.name.as_str()).collect()
}
