//! MoveTask command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Move a task to the end of another column, comments and all
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The column currently holding the task
    pub from: ColumnId,
    /// The destination column
    pub to: ColumnId,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to the end of a different column"
);

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, from: impl Into<ColumnId>, to: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Apply for MoveTask {
    fn apply(&self, mut board: Board) -> Board {
        if self.from == self.to || board.find_column(&self.to).is_none() {
            return board;
        }

        let Some(source) = board.find_column_mut(&self.from) else {
            return board;
        };
        let Some(index) = source.task_index(&self.id) else {
            return board;
        };
        let task = source.tasks.remove(index);

        if let Some(target) = board.find_column_mut(&self.to) {
            target.tasks.push(task);
        }
        board
    }
}
