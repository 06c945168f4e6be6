//! EditTask command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};

/// Merge new field values into a task
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditTask {
    /// The column holding the task
    pub column_id: ColumnId,
    /// The task ID to edit
    pub id: TaskId,
    /// Fields to replace; absent fields are kept
    pub fields: TaskPatch,
}

operation!(
    EditTask,
    verb = "edit",
    noun = "task",
    description = "Update a task's title and/or description"
);

impl EditTask {
    pub fn new(column_id: impl Into<ColumnId>, id: impl Into<TaskId>, fields: TaskPatch) -> Self {
        Self {
            column_id: column_id.into(),
            id: id.into(),
            fields,
        }
    }
}

impl Apply for EditTask {
    fn apply(&self, mut board: Board) -> Board {
        if let Some(task) = board.find_task_mut(&self.column_id, &self.id) {
            self.fields.merge_into(task);
        }
        board
    }
}
