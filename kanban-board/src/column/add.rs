//! AddColumn command

use crate::operation::{operation, Apply};
use crate::types::{Board, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Append a new, empty column to the board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column ID, generated by the caller
    pub id: ColumnId,
    /// Display title; blank or absent falls back to [`Column::DEFAULT_TITLE`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Apply for AddColumn {
    fn apply(&self, mut board: Board) -> Board {
        // Column ids are unique on a board
        if board.find_column(&self.id).is_some() {
            return board;
        }

        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(Column::DEFAULT_TITLE);

        board.columns.push(Column::with_id(self.id.clone(), title));
        board
    }
}
