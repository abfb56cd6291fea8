use tracing::debug;

use super::store::CommandStore;
use crate::errors::{CommandexError, Result};
use crate::model::{ApplicableContext, Command, CommandEvent, GOAL_ATTRIBUTE_NAME};

/// Base name for commands created from the explorer
pub const NEW_COMMAND_NAME: &str = "newCommand";

/// Suffix appended to the source name on duplicate
pub const COPY_SUFFIX: &str = " copy";

/// First free name among `base`, `base-1`, `base-2`, ...
pub fn unique_name(store: &CommandStore, base: &str) -> String {
    if !store.contains(base) {
        return base.to_string();
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !store.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Check name and type id
///
/// # Errors
///
/// * `InvalidCommandName` - name empty or whitespace-only
/// * `MissingCommandType` - empty type id
pub fn validate(command: &Command) -> Result<()> {
    if command.name.trim().is_empty() {
        return Err(CommandexError::InvalidCommandName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    if command.type_id.trim().is_empty() {
        return Err(CommandexError::MissingCommandType {
            name: command.name.clone(),
        });
    }
    Ok(())
}

/// Create a command of the given type in the given goal
///
/// The name is generated (`newCommand`, `newCommand-1`, ...). An empty
/// `goal_id` leaves the goal attribute unset.
///
/// # Errors
/// * `MissingCommandType` - If `type_id` is empty
pub fn create_command(
    store: &mut CommandStore,
    goal_id: &str,
    type_id: &str,
    context: ApplicableContext,
) -> Result<Command> {
    let name = unique_name(store, NEW_COMMAND_NAME);
    let mut command = Command::new(name, type_id).with_context(context);
    if !goal_id.is_empty() {
        command = command.with_goal(goal_id);
    }

    add_command(store, command.clone())?;
    Ok(command)
}

/// Copy a command under a fresh `<name> copy` name
///
/// Type, command line, attributes (goal included) and context are copied.
///
/// # Errors
/// * `CommandNotFound` - If no command has this name
pub fn duplicate_command(store: &mut CommandStore, name: &str) -> Result<Command> {
    let source = store.get_command(name)?.clone();
    let copy_name = unique_name(store, &format!("{}{}", source.name, COPY_SUFFIX));

    let copy = Command {
        name: copy_name,
        ..source
    };
    add_command(store, copy.clone())?;
    Ok(copy)
}

/// Append a fully formed command
///
/// # Errors
/// * `InvalidCommandName` / `MissingCommandType` - If validation fails
/// * `CommandAlreadyExists` - If the name is taken
pub fn add_command(store: &mut CommandStore, command: Command) -> Result<()> {
    validate(&command)?;
    if store.contains(&command.name) {
        return Err(CommandexError::CommandAlreadyExists { name: command.name });
    }

    debug!(
        command_name = %command.name,
        goal_id = command.goal_id().unwrap_or_default(),
        "command added"
    );
    store.commands.push(command.clone());
    store.publish(CommandEvent::Added(command));
    Ok(())
}

/// Replace the command called `name`, keeping its position
///
/// # Errors
/// * `CommandNotFound` - If `name` does not exist
/// * `InvalidCommandName` / `MissingCommandType` - If validation fails
/// * `CommandAlreadyExists` - If renaming onto another existing command
pub fn update_command(store: &mut CommandStore, name: &str, command: Command) -> Result<()> {
    let idx = store
        .position(name)
        .ok_or_else(|| CommandexError::CommandNotFound {
            name: name.to_string(),
        })?;
    validate(&command)?;
    if command.name != name && store.contains(&command.name) {
        return Err(CommandexError::CommandAlreadyExists { name: command.name });
    }

    debug!(
        command_name = %command.name,
        previous_name = name,
        goal = command.attribute(GOAL_ATTRIBUTE_NAME).unwrap_or_default(),
        "command updated"
    );
    store.commands[idx] = command.clone();
    store.publish(CommandEvent::Updated {
        previous_name: name.to_string(),
        command,
    });
    Ok(())
}

/// Remove and return the command called `name`
///
/// # Errors
/// * `CommandNotFound` - If `name` does not exist
pub fn remove_command(store: &mut CommandStore, name: &str) -> Result<Command> {
    let idx = store
        .position(name)
        .ok_or_else(|| CommandexError::CommandNotFound {
            name: name.to_string(),
        })?;

    let removed = store.commands.remove(idx);
    debug!(command_name = %removed.name, "command removed");
    store.publish(CommandEvent::Removed(removed.clone()));
    Ok(removed)
}
