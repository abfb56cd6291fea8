use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Where a command may run
///
/// Opaque to the grouping engine; carried through store operations and
/// copied on duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableContext {
    /// Applicable to the workspace as a whole
    #[serde(default)]
    pub workspace_applicable: bool,

    /// Project paths the command applies to
    #[serde(default)]
    pub projects: BTreeSet<String>,
}

impl ApplicableContext {
    /// Context applicable to the workspace and no specific project
    pub fn workspace() -> Self {
        Self {
            workspace_applicable: true,
            projects: BTreeSet::new(),
        }
    }

    pub fn with_project(mut self, path: impl Into<String>) -> Self {
        self.projects.insert(path.into());
        self
    }

    pub fn is_applicable_to(&self, project: &str) -> bool {
        self.projects.contains(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_context() {
        let ctx = ApplicableContext::workspace();
        assert!(ctx.workspace_applicable);
        assert!(ctx.projects.is_empty());
    }

    #[test]
    fn test_default_is_not_applicable_anywhere() {
        let ctx = ApplicableContext::default();
        assert!(!ctx.workspace_applicable);
        assert!(!ctx.is_applicable_to("/console"));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let ctx: ApplicableContext =
            serde_json::from_str(r#"{"workspaceApplicable": true}"#).unwrap();
        assert_eq!(ctx, ApplicableContext::workspace());

        let ctx: ApplicableContext = serde_json::from_str(r#"{"projects": ["/web"]}"#).unwrap();
        assert!(ctx.is_applicable_to("/web"));
    }
}
