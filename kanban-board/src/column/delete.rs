//! DeleteColumn command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Delete a column together with all of its tasks and their comments
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and everything in it"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteColumn {
    fn apply(&self, mut board: Board) -> Board {
        board.columns.retain(|c| c.id != self.id);
        board
    }
}
