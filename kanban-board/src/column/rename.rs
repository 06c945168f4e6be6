//! RenameColumn command

use crate::operation::{operation, Apply};
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};

/// Rename a column. A title that trims to nothing keeps the previous title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenameColumn {
    /// The column ID to rename
    pub id: ColumnId,
    /// New display title, trimmed before use
    pub title: String,
}

operation!(
    RenameColumn,
    verb = "rename",
    noun = "column",
    description = "Change a column's display title"
);

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Apply for RenameColumn {
    fn apply(&self, mut board: Board) -> Board {
        let title = self.title.trim();
        if title.is_empty() {
            return board;
        }
        if let Some(column) = board.find_column_mut(&self.id) {
            column.title = title.to_string();
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_board;

    #[test]
    fn test_rename_column_trims() {
        let board = RenameColumn::new("doing", "  Doing now  ").apply(sample_board());
        assert_eq!(board.find_column(&"doing".into()).unwrap().title, "Doing now");
    }

    #[test]
    fn test_rename_column_whitespace_keeps_title() {
        let before = sample_board();
        let after = RenameColumn::new("doing", "   ").apply(before.clone());
        assert_eq!(after, before);
        assert_eq!(after.find_column(&"doing".into()).unwrap().title, "In Progress");
    }

    #[test]
    fn test_rename_unknown_column_is_noop() {
        let before = sample_board();
        let after = RenameColumn::new("missing", "Anything").apply(before.clone());
        assert_eq!(after, before);
    }
}
