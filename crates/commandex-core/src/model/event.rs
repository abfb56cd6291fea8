use super::command::Command;

/// Change notification published by the command store
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    Added(Command),
    /// `previous_name` differs from `command.name` on rename
    Updated {
        previous_name: String,
        command: Command,
    },
    Removed(Command),
}

impl CommandEvent {
    /// The command as it is after the change (or was, for removals)
    pub fn command(&self) -> &Command {
        match self {
            CommandEvent::Added(c) | CommandEvent::Removed(c) => c,
            CommandEvent::Updated { command, .. } => command,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CommandEvent::Added(_) => "added",
            CommandEvent::Updated { .. } => "updated",
            CommandEvent::Removed(_) => "removed",
        }
    }
}
