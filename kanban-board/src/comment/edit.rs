//! EditComment command

use crate::operation::{operation, Apply};
use crate::types::comment::edit_content;
use crate::types::{Board, ColumnId, CommentId, TaskId};
use serde::{Deserialize, Serialize};

/// Replace a comment's content, wherever it sits in the forest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditComment {
    /// The column holding the task
    pub column_id: ColumnId,
    /// The task holding the comment
    pub task_id: TaskId,
    /// The comment ID to edit
    pub id: CommentId,
    /// New comment content
    pub content: String,
}

operation!(
    EditComment,
    verb = "edit",
    noun = "comment",
    description = "Update a comment's content"
);

impl EditComment {
    pub fn new(
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        id: impl Into<CommentId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            task_id: task_id.into(),
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Apply for EditComment {
    fn apply(&self, mut board: Board) -> Board {
        if let Some(task) = board.find_task_mut(&self.column_id, &self.task_id) {
            edit_content(&mut task.comments, &self.id, &self.content);
        }
        board
    }
}
