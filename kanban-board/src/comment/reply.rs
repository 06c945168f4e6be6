//! AddReply command

use crate::operation::{operation, Apply};
use crate::types::comment::append_reply;
use crate::types::{Board, ColumnId, Comment, CommentId, TaskId};
use serde::{Deserialize, Serialize};

/// Reply to a comment at any depth of a task's forest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddReply {
    /// The column holding the task
    pub column_id: ColumnId,
    /// The task holding the comment
    pub task_id: TaskId,
    /// The comment being replied to
    pub parent_id: CommentId,
    /// The reply; its id is chosen by the caller
    pub reply: Comment,
}

operation!(
    AddReply,
    verb = "add",
    noun = "reply",
    description = "Reply to a comment"
);

impl AddReply {
    pub fn new(
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        parent_id: impl Into<CommentId>,
        reply: Comment,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            task_id: task_id.into(),
            parent_id: parent_id.into(),
            reply,
        }
    }
}

impl Apply for AddReply {
    fn apply(&self, mut board: Board) -> Board {
        if let Some(task) = board.find_task_mut(&self.column_id, &self.task_id) {
            if task.find_comment(&self.reply.id).is_none() {
                append_reply(&mut task.comments, &self.parent_id, self.reply.clone());
            }
        }
        board
    }
}
