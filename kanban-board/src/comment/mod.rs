//! Comment operations

mod add;
mod delete;
mod edit;
mod reply;

pub use add::AddComment;
pub use delete::DeleteComment;
pub use edit::EditComment;
pub use reply::AddReply;
