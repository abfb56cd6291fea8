//! Known command goals

use tracing::debug;

use crate::errors::{CommandexError, Result};
use crate::model::Goal;

/// Id of the fallback goal for commands without a goal attribute
pub const DEFAULT_GOAL_ID: &str = "common";

const PREDEFINED_GOALS: [(&str, &str); 6] = [
    ("build", "Build"),
    ("test", "Test"),
    ("run", "Run"),
    ("deploy", "Deploy"),
    ("debug", "Debug"),
    (DEFAULT_GOAL_ID, "Common"),
];

/// Registry of goals by id, in registration order
///
/// The default goal is always resolvable: constructing a registry with a
/// default id that is not predefined registers a goal for it.
#[derive(Debug, Clone)]
pub struct GoalRegistry {
    goals: Vec<Goal>,
    default_goal_id: String,
}

impl GoalRegistry {
    /// Registry with the predefined goals and `common` as default
    pub fn new() -> Self {
        Self::with_default(DEFAULT_GOAL_ID)
    }

    /// Registry with the predefined goals and a custom default id
    pub fn with_default(default_goal_id: &str) -> Self {
        let mut registry = Self {
            goals: Vec::with_capacity(PREDEFINED_GOALS.len() + 1),
            default_goal_id: default_goal_id.to_string(),
        };
        for (id, label) in PREDEFINED_GOALS {
            registry.goals.push(Goal::new(id, label));
        }
        registry.ensure_default();
        registry
    }

    /// Registry holding only the default goal
    pub fn empty(default_goal_id: &str) -> Self {
        let mut registry = Self {
            goals: Vec::new(),
            default_goal_id: default_goal_id.to_string(),
        };
        registry.ensure_default();
        registry
    }

    /// Add a goal, replacing the label of an existing goal with the same id
    ///
    /// # Errors
    ///
    /// Returns `InvalidGoal` if id or label is blank.
    pub fn register(&mut self, goal: Goal) -> Result<()> {
        if goal.id().trim().is_empty() {
            return Err(CommandexError::InvalidGoal {
                reason: "Goal id cannot be empty".to_string(),
            });
        }
        if goal.label().trim().is_empty() {
            return Err(CommandexError::InvalidGoal {
                reason: format!("Goal '{}' has an empty label", goal.id()),
            });
        }

        debug!(goal_id = goal.id(), label = goal.label(), "goal registered");
        match self.goals.iter_mut().find(|g| **g == goal) {
            Some(existing) => *existing = goal,
            None => self.goals.push(goal),
        }
        Ok(())
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn resolve(&self, id: &str) -> Option<Goal> {
        self.goals.iter().find(|g| g.id() == id).cloned()
    }

    pub fn default_goal_id(&self) -> &str {
        &self.default_goal_id
    }

    pub fn default_goal(&self) -> Goal {
        self.resolve(&self.default_goal_id)
            .unwrap_or_else(|| Goal::synthesized(&self.default_goal_id))
    }

    fn ensure_default(&mut self) {
        if self.resolve(&self.default_goal_id).is_none() {
            let label = capitalize(&self.default_goal_id);
            self.goals.push(Goal::new(self.default_goal_id.clone(), label));
        }
    }
}

impl Default for GoalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_goals() {
        let registry = GoalRegistry::new();
        let ids: Vec<&str> = registry.goals().iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec!["build", "test", "run", "deploy", "debug", "common"]);
        assert_eq!(registry.default_goal().label(), "Common");
    }

    #[test]
    fn test_custom_default_is_registered() {
        let registry = GoalRegistry::with_default("misc");
        assert_eq!(registry.default_goal_id(), "misc");
        assert_eq!(
            registry.resolve("misc").map(|g| g.label().to_string()),
            Some("Misc".to_string())
        );
    }

    #[test]
    fn test_empty_registry_has_only_default() {
        let registry = GoalRegistry::empty(DEFAULT_GOAL_ID);
        assert_eq!(registry.goals().len(), 1);
        assert!(registry.resolve("build").is_none());
    }

    #[test]
    fn test_register_replaces_label() {
        let mut registry = GoalRegistry::new();
        registry.register(Goal::new("build", "Compile")).unwrap();
        registry.register(Goal::new("lint", "Lint")).unwrap();

        assert_eq!(registry.resolve("build").unwrap().label(), "Compile");
        assert_eq!(registry.goals().len(), 7);
    }

    #[test]
    fn test_relabel_default_keeps_single_entry() {
        let mut registry = GoalRegistry::new();
        registry.register(Goal::new("common", "Shared")).unwrap();

        let common: Vec<&Goal> = registry
            .goals()
            .iter()
            .filter(|g| g.id() == "common")
            .collect();
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].label(), "Shared");
        assert_eq!(registry.goals().len(), 6);
    }

    #[test]
    fn test_register_rejects_blank() {
        let mut registry = GoalRegistry::new();
        assert!(registry.register(Goal::new("", "x")).is_err());
        assert!(registry.register(Goal::new("x", " ")).is_err());
    }
}
