use tracing::debug;

use super::collaborators::{CommandExecutor, CommandPaletteView};
use crate::grouping::{group_non_empty, GroupedCommands};
use crate::model::Command;
use crate::ops::CommandStore;
use crate::registry::GoalRegistry;

pub const PALETTE_TITLE: &str = "Command Palette";
pub const FILTER_PLACEHOLDER: &str = "Search command";

/// Command palette presenter
///
/// Filters commands by name and shows them grouped by goal. Only goals with
/// at least one matching command get a bucket.
pub struct CommandPalette {
    view: Box<dyn CommandPaletteView>,
    executor: Box<dyn CommandExecutor>,
    filter: String,
}

impl CommandPalette {
    pub fn new(view: Box<dyn CommandPaletteView>, executor: Box<dyn CommandExecutor>) -> Self {
        Self {
            view,
            executor,
            filter: String::new(),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Open the dialog with an empty filter and every command listed
    pub fn show_dialog(
        &mut self,
        store: &CommandStore,
        registry: &GoalRegistry,
    ) -> GroupedCommands {
        self.filter.clear();
        self.view.show();
        self.render(store, registry)
    }

    pub fn on_filter_changed(
        &mut self,
        store: &CommandStore,
        registry: &GoalRegistry,
        filter: &str,
    ) -> GroupedCommands {
        self.filter = filter.to_string();
        self.render(store, registry)
    }

    pub fn on_command_execute(&mut self, command: &Command) {
        debug!(command_name = %command.name, "executing from palette");
        self.view.close();
        self.executor.execute(command);
    }

    fn render(&mut self, store: &CommandStore, registry: &GoalRegistry) -> GroupedCommands {
        let matching = filter_commands(store.list_commands(), &self.filter);
        let grouped = group_non_empty(matching, registry);
        self.view.set_commands(&grouped);
        grouped
    }
}

/// Commands whose name contains `filter`, ignoring case. A blank filter
/// matches everything.
pub fn filter_commands<'a>(commands: &'a [Command], filter: &str) -> Vec<&'a Command> {
    let needle = filter.trim().to_lowercase();
    commands
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .collect()
}
