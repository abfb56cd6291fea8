//! Correlation identifiers
//!
//! Every user action (create, duplicate, remove, execute) carries a `RequestId`
//! and every debounced refresh pass gets a `RefreshId`, so log lines from the
//! same burst of activity can be tied together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh, time-ordered id (UUIDv7)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Wrap an id received from elsewhere (e.g. a client request)
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifier of one user-initiated operation against the command store
    RequestId
);

correlation_id!(
    /// Identifier of one grouping+render pass
    RefreshId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_refresh_id_display_matches_str() {
        let id = RefreshId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn test_from_string_keeps_value() {
        let id = RequestId::from_string("req-42".to_string());
        assert_eq!(id.as_str(), "req-42");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RefreshId::from_string("r-1".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"r-1\"");
        let back: RefreshId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
