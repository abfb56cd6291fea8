use std::sync::{Arc, Mutex};

use super::tree_render::render_grouped;
use crate::grouping::GroupedCommands;
use crate::model::{Command, Goal};
use crate::presenters::{CommandPaletteView, CommandsExplorerView};

#[derive(Debug, Default)]
struct TextViewState {
    rendered: String,
    render_count: usize,
    selected_goal: Option<Goal>,
    selected_command: Option<String>,
    visible: bool,
}

/// Headless view that keeps the last render as text
///
/// Cloning gives another handle onto the same state, so a caller can keep one
/// handle while a presenter owns the other.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    state: Arc<Mutex<TextViewState>>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> String {
        self.with_state(|s| s.rendered.clone())
    }

    pub fn render_count(&self) -> usize {
        self.with_state(|s| s.render_count)
    }

    pub fn selected_command(&self) -> Option<String> {
        self.with_state(|s| s.selected_command.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.with_state(|s| s.visible)
    }

    /// Simulate the user picking a goal node
    pub fn select_goal(&self, goal: Option<Goal>) {
        self.with_state(|s| s.selected_goal = goal);
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut TextViewState) -> T) -> T {
        // State is plain data, so a poisoned lock is still readable.
        let mut guard = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    fn render(&self, grouped: &GroupedCommands) {
        let text = render_grouped(grouped);
        self.with_state(|s| {
            s.rendered = text;
            s.render_count += 1;
        });
    }
}

impl CommandsExplorerView for TextView {
    fn set_commands(&mut self, grouped: &GroupedCommands) {
        self.render(grouped);
    }

    fn select_command(&mut self, command: &Command) {
        let name = command.name.clone();
        self.with_state(|s| s.selected_command = Some(name));
    }

    fn selected_goal(&self) -> Option<Goal> {
        self.with_state(|s| s.selected_goal.clone())
    }
}

impl CommandPaletteView for TextView {
    fn show(&mut self) {
        self.with_state(|s| s.visible = true);
    }

    fn close(&mut self) {
        self.with_state(|s| s.visible = false);
    }

    fn set_commands(&mut self, grouped: &GroupedCommands) {
        self.render(grouped);
    }
}
