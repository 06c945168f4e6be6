//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// The whole board. Column order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create a board from its columns
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by ID (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Find a task inside a specific column
    pub fn find_task(&self, column_id: &ColumnId, task_id: &TaskId) -> Option<&Task> {
        self.find_column(column_id)?.find_task(task_id)
    }

    /// Find a task inside a specific column (mutable)
    pub fn find_task_mut(&mut self, column_id: &ColumnId, task_id: &TaskId) -> Option<&mut Task> {
        self.find_column_mut(column_id)?.find_task_mut(task_id)
    }

    /// The column currently holding `task_id`
    pub fn locate_task(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.find_task(task_id).is_some())
    }

    /// Number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// A column defines a workflow stage and owns its tasks in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Title given to columns created without one
    pub const DEFAULT_TITLE: &'static str = "New Column";

    /// Create an empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(ColumnId::new(), title)
    }

    /// Create an empty column with a caller-supplied id
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task (builder style)
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Find a task by ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Find a task by ID (mutable)
    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Position of a task in this column
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}
