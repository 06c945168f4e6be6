//! Core types for the board document

mod board;
pub mod comment;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use comment::Comment;
pub use ids::{ColumnId, CommentId, TaskId};
pub use task::{Task, TaskPatch};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be absent or `null` as its default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
