use tracing::{info, warn};

use crate::grouping::GroupedCommands;
use crate::model::{Command, Goal};

/// View behind the commands explorer
pub trait CommandsExplorerView: Send {
    /// Replace the displayed tree with a fresh grouping
    fn set_commands(&mut self, grouped: &GroupedCommands);

    fn select_command(&mut self, command: &Command);

    /// Goal node currently selected by the user, if any
    fn selected_goal(&self) -> Option<Goal>;
}

/// View behind the command palette
pub trait CommandPaletteView: Send {
    /// Show the dialog with an empty filter
    fn show(&mut self);

    fn close(&mut self);

    fn set_commands(&mut self, grouped: &GroupedCommands);
}

/// Callbacks a view makes back into the application
pub trait CommandActions {
    fn on_command_selected(&mut self, command: &Command);

    fn on_command_execute_requested(&mut self, command: &Command);
}

/// Runs a command picked from the palette
pub trait CommandExecutor: Send {
    fn execute(&mut self, command: &Command);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Pops up over the workbench until dismissed
    Emerge,
    /// Shows briefly, then goes to the notification list
    Float,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub content: String,
    pub status: NotificationStatus,
    pub display_mode: DisplayMode,
}

impl Notification {
    pub fn failure(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: NotificationStatus::Fail,
            display_mode: DisplayMode::Emerge,
        }
    }
}

/// Non-blocking user notifications
pub trait NotificationManager: Send {
    fn notify(&mut self, notification: Notification);
}

/// Notification sink that writes to the log
#[derive(Debug, Default)]
pub struct TracingNotificationManager;

impl NotificationManager for TracingNotificationManager {
    fn notify(&mut self, notification: Notification) {
        match notification.status {
            NotificationStatus::Fail => warn!(
                title = %notification.title,
                content = %notification.content,
                "notification"
            ),
            NotificationStatus::Success => info!(
                title = %notification.title,
                content = %notification.content,
                "notification"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartStackType {
    Navigation,
    Editing,
    Information,
    Tooling,
}

/// Identity of a workbench part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub tooltip: &'static str,
}

/// Places parts in the workbench layout
pub trait WorkspaceAgent: Send {
    fn open_part(&mut self, part: &PartDescriptor, stack: PartStackType);

    fn set_active_part(&mut self, part: &PartDescriptor);
}
