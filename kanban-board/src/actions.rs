//! BoardActions - one call per board operation.
//!
//! Takes the arguments a UI has on hand, generates ids for new entities, builds
//! the operation and dispatches it on the store. Text input is trimmed here;
//! blank titles and comment bodies are rejected before anything is dispatched.

use crate::column::{AddColumn, DeleteColumn, RenameColumn};
use crate::comment::{AddComment, AddReply, DeleteComment, EditComment};
use crate::error::{KanbanError, Result};
use crate::storage::Storage;
use crate::store::KanbanStore;
use crate::task::{AddTask, DeleteTask, EditTask, MoveTask, ReorderTasks};
use crate::types::{ColumnId, Comment, CommentId, Task, TaskId, TaskPatch};

/// Facade over a [`KanbanStore`], see [`KanbanStore::actions`]
pub struct BoardActions<'a, S: Storage> {
    store: &'a mut KanbanStore<S>,
}

impl<'a, S: Storage> BoardActions<'a, S> {
    pub(crate) fn new(store: &'a mut KanbanStore<S>) -> Self {
        Self { store }
    }

    /// Append a column with the configured default title
    pub fn add_column(&mut self) -> ColumnId {
        let id = ColumnId::new();
        let title = self.store.new_column_title().to_string();
        self.store.dispatch(AddColumn::new(id.clone()).with_title(title));
        id
    }

    /// Append a column with `title`, falling back to the default when blank
    pub fn add_column_titled(&mut self, title: &str) -> ColumnId {
        let title = match title.trim() {
            "" => self.store.new_column_title().to_string(),
            trimmed => trimmed.to_string(),
        };
        let id = ColumnId::new();
        self.store.dispatch(AddColumn::new(id.clone()).with_title(title));
        id
    }

    pub fn rename_column(&mut self, id: &ColumnId, title: &str) {
        self.store.dispatch(RenameColumn::new(id, title));
    }

    /// Remove a column along with its tasks
    pub fn delete_column(&mut self, id: &ColumnId) {
        self.store.dispatch(DeleteColumn::new(id));
    }

    /// Append a task to `column_id` and return its id
    pub fn add_task(
        &mut self,
        column_id: &ColumnId,
        title: &str,
        description: &str,
    ) -> Result<TaskId> {
        let title = required(title, "title")?;
        let task = Task::new(title).with_description(description.trim());
        let id = task.id.clone();
        self.store.dispatch(AddTask::new(column_id, task));
        Ok(id)
    }

    /// Update the supplied fields of a task. An empty patch dispatches nothing.
    pub fn edit_task(
        &mut self,
        column_id: &ColumnId,
        id: &TaskId,
        fields: TaskPatch,
    ) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let fields = TaskPatch {
            title: fields
                .title
                .as_deref()
                .map(|title| required(title, "title"))
                .transpose()?,
            description: fields.description.map(|d| d.trim().to_string()),
        };
        self.store.dispatch(EditTask::new(column_id, id, fields));
        Ok(())
    }

    pub fn delete_task(&mut self, column_id: &ColumnId, id: &TaskId) {
        self.store.dispatch(DeleteTask::new(column_id, id));
    }

    /// Move a task to the end of another column
    pub fn move_task(&mut self, id: &TaskId, from: &ColumnId, to: &ColumnId) {
        self.store.dispatch(MoveTask::new(id, from, to));
    }

    /// Move the task at `dragged_index` so it lands at `target_index`.
    ///
    /// `None` means no drag is in progress; the call is then a no-op.
    pub fn reorder_tasks(
        &mut self,
        column_id: &ColumnId,
        dragged_index: Option<usize>,
        target_index: usize,
    ) {
        self.store.dispatch(ReorderTasks::new(column_id, dragged_index, target_index));
    }

    /// Append a root comment to a task and return its id
    pub fn add_comment(
        &mut self,
        column_id: &ColumnId,
        task_id: &TaskId,
        content: &str,
    ) -> Result<CommentId> {
        let comment = Comment::new(required(content, "content")?);
        let id = comment.id.clone();
        self.store.dispatch(AddComment::new(column_id, task_id, comment));
        Ok(id)
    }

    /// Reply to any comment in a task's thread and return the reply's id
    pub fn add_reply(
        &mut self,
        column_id: &ColumnId,
        task_id: &TaskId,
        parent_id: &CommentId,
        content: &str,
    ) -> Result<CommentId> {
        let reply = Comment::new(required(content, "content")?);
        let id = reply.id.clone();
        self.store.dispatch(AddReply::new(column_id, task_id, parent_id, reply));
        Ok(id)
    }

    pub fn edit_comment(
        &mut self,
        column_id: &ColumnId,
        task_id: &TaskId,
        id: &CommentId,
        content: &str,
    ) -> Result<()> {
        let content = required(content, "content")?;
        self.store.dispatch(EditComment::new(column_id, task_id, id, content));
        Ok(())
    }

    /// Remove a comment and all of its replies
    pub fn delete_comment(&mut self, column_id: &ColumnId, task_id: &TaskId, id: &CommentId) {
        self.store.dispatch(DeleteComment::new(column_id, task_id, id));
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    match value.trim() {
        "" => Err(KanbanError::missing_field(field)),
        trimmed => Ok(trimmed.to_string()),
    }
}
