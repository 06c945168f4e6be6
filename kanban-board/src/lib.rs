//! Kanban board state core
//!
//! This crate holds the state of a single kanban board: ordered columns, the
//! tasks inside them, and a nested comment thread per task. Every change is an
//! operation applied by a pure transition function; a store owns the current
//! board, saves it through a storage collaborator, and tells observers.
//!
//! ## Overview
//!
//! - **One document** - The whole board is one value, replaced on every change
//! - **Closed operation set** - Every change is a [`BoardOperation`]
//! - **No-op on unknown ids** - Operations that address missing entities leave the board as is
//! - **Snapshot persistence** - The board is saved as one JSON value under `"kanban-board-state"`
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::{KanbanStore, MemoryStorage};
//!
//! # fn example() -> kanban_board::Result<()> {
//! let mut store = KanbanStore::open(MemoryStorage::new());
//! let todo = store.board().columns[0].id.clone();
//! let done = store.board().columns[2].id.clone();
//!
//! let task = store.actions().add_task(&todo, "Write release notes", "")?;
//! store.actions().add_comment(&todo, &task, "Draft is in the wiki")?;
//! store.actions().move_task(&task, &todo, &done);
//!
//! assert_eq!(store.board().columns[2].tasks[0].id, task);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Operations
//!
//! | op | addresses | effect |
//! |----|-----------|--------|
//! | `add_column` | new id | append a column |
//! | `rename_column` | column | set a non-blank title |
//! | `delete_column` | column | remove it with its tasks |
//! | `add_task` | column | append a task |
//! | `edit_task` | column, task | merge title/description |
//! | `delete_task` | column, task | remove it with its comments |
//! | `move_task` | task, from, to | append to the end of `to` |
//! | `reorder_tasks` | column, indices | move one task within a column |
//! | `add_comment` | column, task | append a root comment |
//! | `add_reply` | column, task, comment | append a reply at any depth |
//! | `edit_comment` | column, task, comment | replace content at any depth |
//! | `delete_comment` | column, task, comment | remove it with its replies |
//! | `restore_board` | - | replace the whole board |

pub mod actions;
pub mod board;
pub mod column;
pub mod comment;
pub mod config;
pub mod defaults;
mod error;
pub mod operation;
pub mod persist;
pub mod storage;
mod store;
pub mod task;
pub mod transition;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use actions::BoardActions;
pub use config::BoardConfig;
pub use defaults::default_board;
pub use error::{KanbanError, Result};
pub use operation::{Apply, Operation};
pub use persist::STORAGE_KEY;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageLock};
pub use store::{HydrationSource, KanbanStore, SubscriptionId};
pub use transition::{apply, BoardOperation};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Comment, CommentId, Task, TaskId, TaskPatch};
