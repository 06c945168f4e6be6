//! Board operations

mod restore;

pub use restore::RestoreBoard;
