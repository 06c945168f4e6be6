//! ReorderTasks command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Move a task within its column: splice out at `dragged_index`, splice in at
/// `target_index` of the shortened sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReorderTasks {
    /// The column being reordered
    pub column_id: ColumnId,
    /// Index of the dragged task; `None` when no drag is in progress
    pub dragged_index: Option<usize>,
    /// Insertion index, valid in `0..=len`
    pub target_index: usize,
}

operation!(
    ReorderTasks,
    verb = "reorder",
    noun = "tasks",
    description = "Reorder tasks within a column"
);

impl ReorderTasks {
    pub fn new(
        column_id: impl Into<ColumnId>,
        dragged_index: Option<usize>,
        target_index: usize,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            dragged_index,
            target_index,
        }
    }
}

impl Apply for ReorderTasks {
    fn apply(&self, mut board: Board) -> Board {
        let Some(column) = board.find_column_mut(&self.column_id) else {
            return board;
        };
        let len = column.tasks.len();
        let Some(from) = self.dragged_index.filter(|&i| i < len) else {
            return board;
        };
        if self.target_index > len {
            return board;
        }

        let moved = column.tasks.remove(from);
        // Inserting at `len` after the removal lands at the end
        let to = self.target_index.min(column.tasks.len());
        column.tasks.insert(to, moved);
        board
    }
}
