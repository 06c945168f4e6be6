//! Operation traits.
//!
//! Every state change is a struct whose fields are its parameters. The struct
//! describes itself through [`Operation`] and computes the next board through
//! [`Apply`]. `apply` consumes the current board and returns the next one; it
//! never fails and returns the input unchanged when an addressed id is unknown.

use crate::types::Board;

/// Self-description of an operation, used for logging
pub trait Operation {
    /// The verb, e.g. `"move"`
    fn verb(&self) -> &'static str;

    /// The noun, e.g. `"task"`
    fn noun(&self) -> &'static str;

    /// One-line description of what the operation does
    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. `"move task"`
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// The transition of one operation
pub trait Apply: Operation {
    /// Compute the next board from `board`
    fn apply(&self, board: Board) -> Board;
}

/// Implements [`Operation`] for an operation struct
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

pub(crate) use operation;
