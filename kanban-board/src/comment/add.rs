//! AddComment command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId, Comment, TaskId};
use serde::{Deserialize, Serialize};

/// Add a root comment to a task
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddComment {
    /// The column holding the task
    pub column_id: ColumnId,
    /// The task ID to comment on
    pub task_id: TaskId,
    /// The comment; its id is chosen by the caller
    pub comment: Comment,
}

operation!(
    AddComment,
    verb = "add",
    noun = "comment",
    description = "Add a comment to a task"
);

impl AddComment {
    pub fn new(
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        comment: Comment,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            task_id: task_id.into(),
            comment,
        }
    }
}

impl Apply for AddComment {
    fn apply(&self, mut board: Board) -> Board {
        if let Some(task) = board.find_task_mut(&self.column_id, &self.task_id) {
            if task.find_comment(&self.comment.id).is_none() {
                task.comments.push(self.comment.clone());
            }
        }
        board
    }
}
