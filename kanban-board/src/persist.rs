//! Snapshot encoding for the storage collaborator.
//!
//! The whole board is one JSON document stored under a single key:
//!
//! ```text
//! {"columns": [{"id", "title", "tasks": [{"id", "title", "description",
//!   "comments": [{"id", "content", "replies": [...]}]}]}]}
//! ```
//!
//! There is no schema version. Older snapshots may omit `tasks`, `comments`,
//! `replies` or `description`, or write them as `null`; those decode as empty.

use crate::error::Result;
use crate::types::Board;

/// Key the snapshot is stored under
pub const STORAGE_KEY: &str = "kanban-board-state";

/// Serialize a board to snapshot text
pub fn encode(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

/// Parse snapshot text into a board
pub fn decode(raw: &str) -> Result<Board> {
    Ok(serde_json::from_str(raw)?)
}
