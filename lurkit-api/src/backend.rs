use async_trait::async_trait;

use crate::{Comment, CommentId, Error, PostId};

/// The comment-creation side of the backend.
///
/// Identity, author, timestamp and initial vote count of a new comment are
/// all assigned here, never by the caller: a successful call returns the
/// comment exactly as the backend recorded it.
#[async_trait]
pub trait Backend {
    /// Create a top-level comment on `post`.
    async fn create_comment(&mut self, post: &PostId, content: &str) -> Result<Comment, Error>;

    /// Create a reply to `parent`, which may sit at any depth of the tree.
    async fn create_reply(
        &mut self,
        post: &PostId,
        parent: &CommentId,
        content: &str,
    ) -> Result<Comment, Error>;
}
