//! RestoreBoard command

use crate::operation::{operation, Apply};
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Replace the whole board with a previously persisted one.
///
/// Only the store's hydration path issues this. The board is taken as-is;
/// rejecting malformed snapshots is the decoder's job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RestoreBoard {
    pub board: Board,
}

operation!(
    RestoreBoard,
    verb = "restore",
    noun = "board",
    description = "Replace the board with a persisted snapshot"
);

impl RestoreBoard {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl Apply for RestoreBoard {
    fn apply(&self, _board: Board) -> Board {
        self.board.clone()
    }
}
