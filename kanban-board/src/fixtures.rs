//! Shared test boards with stable ids

use crate::types::{Board, Column, Comment, Task};

/// Three columns with readable ids:
///
/// - `todo` ("To Do"): tasks `a`, `b`, `c`, `d`. Task `a` carries the thread
///   `c1 -> c1-1 -> c1-1-1` and a second root comment `c2`.
/// - `doing` ("In Progress"): task `e`
/// - `done` ("Done"): empty
pub(crate) fn sample_board() -> Board {
    let thread = Comment::with_id("c1", "first").with_reply(
        Comment::with_id("c1-1", "reply").with_reply(Comment::with_id("c1-1-1", "nested reply")),
    );

    let todo = Column::with_id("todo", "To Do")
        .with_task(
            Task::with_id("a", "Header")
                .with_description("top of the page")
                .with_comment(thread)
                .with_comment(Comment::with_id("c2", "second")),
        )
        .with_task(Task::with_id("b", "Button"))
        .with_task(Task::with_id("c", "Integration").with_description("use axios"))
        .with_task(Task::with_id("d", "Footer"));

    let doing = Column::with_id("doing", "In Progress").with_task(Task::with_id("e", "Layout"));
    let done = Column::with_id("done", "Done");

    Board::new(vec![todo, doing, done])
}
