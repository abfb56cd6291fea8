use crate::errors::{CommandexError, Result};
use crate::events::{EventBus, SubscriptionId};
use crate::model::{ApplicableContext, Command, CommandEvent};

use super::command_ops;

/// In-memory command store
///
/// Keeps commands in insertion order (the "store order" the grouping engine
/// preserves inside each bucket) and publishes a `CommandEvent` after every
/// successful mutation. Failed mutations change nothing and publish nothing.
#[derive(Debug, Default)]
pub struct CommandStore {
    pub(crate) commands: Vec<Command>,
    pub(crate) bus: EventBus<CommandEvent>,
}

impl CommandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing commands without publishing events
    ///
    /// # Errors
    ///
    /// Fails on the first invalid or duplicate command.
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Result<Self> {
        let mut store = Self::new();
        for command in commands {
            command_ops::validate(&command)?;
            if store.contains(&command.name) {
                return Err(CommandexError::CommandAlreadyExists { name: command.name });
            }
            store.commands.push(command);
        }
        Ok(store)
    }

    pub fn list_commands(&self) -> &[Command] {
        &self.commands
    }

    /// # Errors
    ///
    /// Returns `CommandNotFound` if no command has this name.
    pub fn get_command(&self, name: &str) -> Result<&Command> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CommandexError::CommandNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CommandEvent) + Send + 'static,
    {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// See [`command_ops::create_command`]
    ///
    /// # Errors
    ///
    /// Returns `MissingCommandType` for an empty type id.
    pub fn create_command(
        &mut self,
        goal_id: &str,
        type_id: &str,
        context: ApplicableContext,
    ) -> Result<Command> {
        command_ops::create_command(self, goal_id, type_id, context)
    }

    /// See [`command_ops::duplicate_command`]
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound` if the source does not exist.
    pub fn duplicate_command(&mut self, name: &str) -> Result<Command> {
        command_ops::duplicate_command(self, name)
    }

    /// See [`command_ops::add_command`]
    ///
    /// # Errors
    ///
    /// Returns a validation error or `CommandAlreadyExists`.
    pub fn add_command(&mut self, command: Command) -> Result<()> {
        command_ops::add_command(self, command)
    }

    /// See [`command_ops::update_command`]
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound`, a validation error, or `CommandAlreadyExists`
    /// when renaming onto another command.
    pub fn update_command(&mut self, name: &str, command: Command) -> Result<()> {
        command_ops::update_command(self, name, command)
    }

    /// See [`command_ops::remove_command`]
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound` if no command has this name.
    pub fn remove_command(&mut self, name: &str) -> Result<Command> {
        command_ops::remove_command(self, name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.name == name)
    }

    pub(crate) fn publish(&mut self, event: CommandEvent) {
        self.bus.publish(&event);
    }
}
