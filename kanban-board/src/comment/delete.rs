//! DeleteComment command

use crate::operation::{operation, Apply};
use crate::types::comment::remove_comment;
use crate::types::{Board, ColumnId, CommentId, TaskId};
use serde::{Deserialize, Serialize};

/// Delete a comment and all replies below it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteComment {
    /// The column holding the task
    pub column_id: ColumnId,
    /// The task holding the comment
    pub task_id: TaskId,
    /// The comment ID to delete
    pub id: CommentId,
}

operation!(
    DeleteComment,
    verb = "delete",
    noun = "comment",
    description = "Delete a comment and its replies"
);

impl DeleteComment {
    pub fn new(
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        id: impl Into<CommentId>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            task_id: task_id.into(),
            id: id.into(),
        }
    }
}

impl Apply for DeleteComment {
    fn apply(&self, mut board: Board) -> Board {
        if let Some(task) = board.find_task_mut(&self.column_id, &self.task_id) {
            remove_comment(&mut task.comments, &self.id);
        }
        board
    }
}
