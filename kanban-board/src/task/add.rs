//! AddTask command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Append a task to the end of a column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddTask {
    /// The column receiving the task
    pub column_id: ColumnId,
    /// The task itself; its id is chosen by the caller
    pub task: Task,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Add a task to the end of a column"
);

impl AddTask {
    pub fn new(column_id: impl Into<ColumnId>, task: Task) -> Self {
        Self {
            column_id: column_id.into(),
            task,
        }
    }
}

impl Apply for AddTask {
    fn apply(&self, mut board: Board) -> Board {
        // A task lives in exactly one column
        if board.locate_task(&self.task.id).is_some() {
            return board;
        }
        if let Some(column) = board.find_column_mut(&self.column_id) {
            column.tasks.push(self.task.clone());
        }
        board
    }
}
