//! Strongly-typed ID wrappers
//!
//! Newtype wrappers prevent mixing up IDs from different entity types at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ScenarioId, "scn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_id_creation() {
        let id = ScenarioId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = ScenarioId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("scn-"));
        assert_eq!(display.len(), 12); // "scn-" + 8 chars
    }

    #[test]
    fn test_id_serialization() {
        let id = ScenarioId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ScenarioId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
