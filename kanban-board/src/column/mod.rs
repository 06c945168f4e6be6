//! Column operations

mod add;
mod delete;
mod rename;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use rename::RenameColumn;
