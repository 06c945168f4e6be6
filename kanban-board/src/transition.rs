//! The closed set of board operations and the transition function.

use crate::board::RestoreBoard;
use crate::column::{AddColumn, DeleteColumn, RenameColumn};
use crate::comment::{AddComment, AddReply, DeleteComment, EditComment};
use crate::operation::{Apply, Operation};
use crate::task::{AddTask, DeleteTask, EditTask, MoveTask, ReorderTasks};
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Every state change the store accepts.
///
/// Serialized with an `op` tag, e.g. `{"op": "move_task", "id": .., "from": .., "to": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardOperation {
    AddColumn(AddColumn),
    RenameColumn(RenameColumn),
    DeleteColumn(DeleteColumn),
    AddTask(AddTask),
    EditTask(EditTask),
    DeleteTask(DeleteTask),
    MoveTask(MoveTask),
    ReorderTasks(ReorderTasks),
    AddComment(AddComment),
    AddReply(AddReply),
    EditComment(EditComment),
    DeleteComment(DeleteComment),
    RestoreBoard(RestoreBoard),
}

macro_rules! board_operations {
    ($($variant:ident),* $(,)?) => {
        impl BoardOperation {
            fn as_apply(&self) -> &dyn Apply {
                match self {
                    $(Self::$variant(op) => op,)*
                }
            }
        }

        $(
            impl From<$variant> for BoardOperation {
                fn from(op: $variant) -> Self {
                    Self::$variant(op)
                }
            }
        )*
    };
}

board_operations!(
    AddColumn,
    RenameColumn,
    DeleteColumn,
    AddTask,
    EditTask,
    DeleteTask,
    MoveTask,
    ReorderTasks,
    AddComment,
    AddReply,
    EditComment,
    DeleteComment,
    RestoreBoard,
);

impl Operation for BoardOperation {
    fn verb(&self) -> &'static str {
        self.as_apply().verb()
    }

    fn noun(&self) -> &'static str {
        self.as_apply().noun()
    }

    fn description(&self) -> &'static str {
        self.as_apply().description()
    }
}

/// Compute the next board.
///
/// Total: an operation that addresses an unknown column, task or comment
/// returns `board` unchanged.
pub fn apply(board: Board, op: &BoardOperation) -> Board {
    op.as_apply().apply(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_board;
    use crate::types::{Comment, Task, TaskPatch};

    #[test]
    fn test_op_strings() {
        let op: BoardOperation = MoveTask::new("a", "todo", "done").into();
        assert_eq!(op.op_string(), "move task");

        let op: BoardOperation = ReorderTasks::new("todo", Some(0), 1).into();
        assert_eq!(op.op_string(), "reorder tasks");
    }

    #[test]
    fn test_apply_dispatches_to_operation() {
        let op = BoardOperation::from(RenameColumn::new("done", "Shipped"));
        let board = apply(sample_board(), &op);
        assert_eq!(board.find_column(&"done".into()).unwrap().title, "Shipped");
    }

    #[test]
    fn test_unknown_ids_are_noops_for_every_operation() {
        let before = sample_board();
        let ops: Vec<BoardOperation> = vec![
            RenameColumn::new("x", "Title").into(),
            DeleteColumn::new("x").into(),
            AddTask::new("x", Task::new("T")).into(),
            EditTask::new("x", "a", TaskPatch::new().with_title("T")).into(),
            EditTask::new("todo", "x", TaskPatch::new().with_title("T")).into(),
            DeleteTask::new("x", "a").into(),
            DeleteTask::new("todo", "x").into(),
            MoveTask::new("x", "todo", "done").into(),
            MoveTask::new("a", "x", "done").into(),
            ReorderTasks::new("x", Some(0), 1).into(),
            AddComment::new("x", "a", Comment::new("c")).into(),
            AddComment::new("todo", "x", Comment::new("c")).into(),
            AddReply::new("todo", "a", "x", Comment::new("c")).into(),
            AddReply::new("todo", "x", "c1", Comment::new("c")).into(),
            EditComment::new("todo", "a", "x", "c").into(),
            EditComment::new("x", "a", "c1", "c").into(),
            DeleteComment::new("todo", "a", "x").into(),
            DeleteComment::new("todo", "x", "c1").into(),
        ];

        for op in &ops {
            assert_eq!(apply(before.clone(), op), before, "{}", op.op_string());
        }
    }

    #[test]
    fn test_operation_json_shape() {
        let op = BoardOperation::from(MoveTask::new("t1", "todo", "done"));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "move_task", "id": "t1", "from": "todo", "to": "done"})
        );

        let parsed: BoardOperation = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, op);
    }

    #[test]
    fn test_reorder_json_accepts_null_dragged_index() {
        let op: BoardOperation = serde_json::from_str(
            r#"{"op":"reorder_tasks","column_id":"todo","dragged_index":null,"target_index":1}"#,
        )
        .unwrap();
        assert_eq!(apply(sample_board(), &op), sample_board());
    }
}
