use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A command goal (build, test, run, ...)
///
/// Identity is the id alone: two goals with the same id and different labels
/// are equal and hash the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    id: String,
    label: String,
}

impl Goal {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Goal made up on the fly for an id nobody registered
    pub fn synthesized(raw: &str) -> Self {
        Self::new(raw, raw)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Goal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Goal {}

impl Hash for Goal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
