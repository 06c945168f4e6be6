//! Task operations

mod add;
mod delete;
mod edit;
mod mv;
mod reorder;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use edit::EditTask;
pub use mv::MoveTask;
pub use reorder::ReorderTasks;
