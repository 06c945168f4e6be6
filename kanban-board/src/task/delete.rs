//! DeleteTask command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Delete a task and its whole comment forest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The column holding the task
    pub column_id: ColumnId,
    /// The task ID to delete
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task and its comments"
);

impl DeleteTask {
    pub fn new(column_id: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column_id: column_id.into(),
            id: id.into(),
        }
    }
}

impl Apply for DeleteTask {
    fn apply(&self, mut board: Board) -> Board {
        if let Some(column) = board.find_column_mut(&self.column_id) {
            column.tasks.retain(|t| t.id != self.id);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_board;

    #[test]
    fn test_delete_task_removes_forest() {
        let after = DeleteTask::new("todo", "a").apply(sample_board());
        assert!(after.locate_task(&"a".into()).is_none());
        assert_eq!(after.find_column(&"todo".into()).unwrap().tasks.len(), 3);
    }

    #[test]
    fn test_delete_task_wrong_column_is_noop() {
        let before = sample_board();
        assert_eq!(DeleteTask::new("doing", "a").apply(before.clone()), before);
    }

    #[test]
    fn test_delete_unknown_task_is_noop() {
        let before = sample_board();
        assert_eq!(DeleteTask::new("todo", "zzz").apply(before.clone()), before);
    }
}
