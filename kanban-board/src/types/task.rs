//! Task types: Task, TaskPatch

use super::comment::{self, Comment};
use super::ids::{CommentId, TaskId};
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,

    /// Root comments of the discussion forest
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comments: Vec<Comment>,
}

impl Task {
    /// Create a new task with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(TaskId::new(), title)
    }

    /// Create a task with a caller-supplied id
    pub fn with_id(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            comments: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a root comment
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Find a comment by ID at any depth
    pub fn find_comment(&self, id: &CommentId) -> Option<&Comment> {
        comment::find_comment(&self.comments, id)
    }

    /// Number of comments in the whole forest
    pub fn comment_count(&self) -> usize {
        comment::forest_len(&self.comments)
    }
}

/// Partial update for a task. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Merge the supplied fields into `task`; comments are never touched
    pub fn merge_into(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
    }
}
