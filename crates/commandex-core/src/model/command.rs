use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::applicable_context::ApplicableContext;

/// Attribute key holding the id of the goal a command belongs to
pub const GOAL_ATTRIBUTE_NAME: &str = "goal";

/// A user-defined command
///
/// Names are unique within a `CommandStore`. The goal a command belongs to
/// lives in its attributes under `GOAL_ATTRIBUTE_NAME`; an absent or empty
/// value means "the default goal".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub name: String,

    /// Command type id (e.g. "custom", "mvn")
    #[serde(rename = "type")]
    pub type_id: String,

    #[serde(default)]
    pub command_line: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub applicable_context: ApplicableContext,
}

impl Command {
    pub fn new(name: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: type_id.into(),
            command_line: String::new(),
            attributes: BTreeMap::new(),
            applicable_context: ApplicableContext::default(),
        }
    }

    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = command_line.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_goal(self, goal_id: impl Into<String>) -> Self {
        self.with_attribute(GOAL_ATTRIBUTE_NAME, goal_id)
    }

    pub fn with_context(mut self, context: ApplicableContext) -> Self {
        self.applicable_context = context;
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Goal id from the attributes, `None` when absent or empty
    pub fn goal_id(&self) -> Option<&str> {
        self.attribute(GOAL_ATTRIBUTE_NAME).filter(|g| !g.is_empty())
    }
}
