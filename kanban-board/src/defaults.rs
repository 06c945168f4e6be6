//! The board a store starts from when nothing usable is persisted.

use crate::types::{Board, Column, Task};

/// Titles of the starting columns, in display order
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Default board: "To Do" holding the sample tasks, then empty "In Progress"
/// and "Done" columns. Every entity gets a fresh id on each call.
pub fn default_board() -> Board {
    default_board_with(true)
}

/// Default board, optionally without the sample tasks
pub fn default_board_with(seed_sample_tasks: bool) -> Board {
    let mut columns: Vec<Column> = DEFAULT_COLUMN_TITLES
        .iter()
        .map(|title| Column::new(*title))
        .collect();

    if seed_sample_tasks {
        columns[0].tasks = sample_tasks();
    }

    Board::new(columns)
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("Header"),
        Task::new("Button"),
        Task::new("Integration").with_description("use axios"),
    ]
}
