//! Threaded comments.
//!
//! A task owns a forest: an ordered list of root comments, each of which may own
//! replies to any depth. Comment ids are unique across the whole forest, so every
//! lookup here walks all levels and stops at the first match.

use super::ids::CommentId;
use serde::{Deserialize, Serialize};

/// A comment on a task, together with its reply subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    /// Older snapshots omit the field or write `null`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Create a new comment with a fresh id and no replies
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(CommentId::new(), content)
    }

    /// Create a comment with a caller-supplied id
    pub fn with_id(id: impl Into<CommentId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            replies: Vec::new(),
        }
    }

    /// Attach a reply (builder style)
    pub fn with_reply(mut self, reply: Comment) -> Self {
        self.replies.push(reply);
        self
    }

    /// Number of comments in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + forest_len(&self.replies)
    }
}

/// Total number of comments in a forest, at every depth
pub fn forest_len(forest: &[Comment]) -> usize {
    forest.iter().map(Comment::subtree_len).sum()
}

/// Find a comment anywhere in the forest
pub fn find_comment<'a>(forest: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
    for comment in forest {
        if &comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find_comment(&comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Find a comment anywhere in the forest (mutable)
pub fn find_comment_mut<'a>(forest: &'a mut [Comment], id: &CommentId) -> Option<&'a mut Comment> {
    for comment in forest.iter_mut() {
        if &comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find_comment_mut(&mut comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Append `reply` to the replies of `parent_id`.
///
/// Returns false, dropping the reply, when the parent is not in the forest.
pub fn append_reply(forest: &mut [Comment], parent_id: &CommentId, reply: Comment) -> bool {
    match find_comment_mut(forest, parent_id) {
        Some(parent) => {
            parent.replies.push(reply);
            true
        }
        None => false,
    }
}

/// Replace the content of the comment `id`. Returns false when not found.
pub fn edit_content(forest: &mut [Comment], id: &CommentId, content: &str) -> bool {
    match find_comment_mut(forest, id) {
        Some(comment) => {
            comment.content = content.to_string();
            true
        }
        None => false,
    }
}

/// Remove the comment `id` and its whole subtree from whichever level holds it.
pub fn remove_comment(forest: &mut Vec<Comment>, id: &CommentId) -> Option<Comment> {
    if let Some(pos) = forest.iter().position(|c| &c.id == id) {
        return Some(forest.remove(pos));
    }
    for comment in forest.iter_mut() {
        if let Some(removed) = remove_comment(&mut comment.replies, id) {
            return Some(removed);
        }
    }
    None
}
