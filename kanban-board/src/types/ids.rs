//! Identifier newtypes for board entities.
//!
//! Identifiers are opaque strings. Fresh ones are ULIDs (80 random bits plus a
//! millisecond timestamp), so identifiers of deleted entities never come back
//! after a persistence round-trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh identifier
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
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
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a column
    ColumnId
);
define_id!(
    /// Identifier of a task
    TaskId
);
define_id!(
    /// Identifier of a comment, unique within its task's whole forest
    CommentId
);
