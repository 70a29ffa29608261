//! In-memory stand-in for the comment-creation backend, for use in tests.
//!
//! Behaves like the real thing as far as the client can tell: it assigns
//! identity, author and timestamp, persists the created comment into its own
//! copy of the thread, and returns the comment as recorded.

use std::collections::HashMap;

use async_trait::async_trait;
use lurkit_client::{
    api::{Backend, Comment, CommentId, Error, Post, PostId},
    Thread,
};

const MOCK_AUTHOR: &str = "demo_user";
const MOCK_TIMESTAMP: &str = "just now";

pub struct MockServer {
    posts: HashMap<PostId, Thread>,
    next_comment: usize,
    failing: bool,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            posts: HashMap::new(),
            next_comment: 0,
            failing: false,
        }
    }

    pub fn admin_create_post(&mut self, post: Post) {
        let id = post.id.clone();
        assert!(
            self.posts.insert(id.clone(), Thread::new(post)).is_none(),
            "post id {id} already used"
        );
    }

    /// Make every subsequent creation call fail as if the request never got
    /// through.
    pub fn test_set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// The server-side state of a post, for assertions.
    pub fn test_thread(&self, post: &PostId) -> &Thread {
        self.posts
            .get(post)
            .unwrap_or_else(|| panic!("no post {post} on the mock server"))
    }

    fn fresh_comment_id(&mut self, post: &PostId) -> CommentId {
        loop {
            self.next_comment += 1;
            let id = CommentId(format!("c{}", self.next_comment));
            if !self.posts[post].contains(&id) {
                return id;
            }
        }
    }

    fn record(&mut self, post: &PostId, content: &str) -> Result<Comment, Error> {
        if content.is_empty() {
            return Err(Error::ContentRequired);
        }
        let id = self.fresh_comment_id(post);
        Ok(Comment::created(
            id,
            String::from(MOCK_AUTHOR),
            String::from(content),
            String::from(MOCK_TIMESTAMP),
        ))
    }
}

impl Default for MockServer {
    fn default() -> MockServer {
        MockServer::new()
    }
}

#[async_trait]
impl Backend for MockServer {
    async fn create_comment(&mut self, post: &PostId, content: &str) -> Result<Comment, Error> {
        if self.failing {
            return Err(Error::SubmissionFailed);
        }
        if !self.posts.contains_key(post) {
            return Err(Error::PostNotFound(post.clone()));
        }
        let comment = self.record(post, content)?;
        self.posts
            .get_mut(post)
            .expect("post vanished while recording a comment")
            .append_comment(comment.clone());
        Ok(comment)
    }

    async fn create_reply(
        &mut self,
        post: &PostId,
        parent: &CommentId,
        content: &str,
    ) -> Result<Comment, Error> {
        if self.failing {
            return Err(Error::SubmissionFailed);
        }
        if !self.posts.contains_key(post) {
            return Err(Error::PostNotFound(post.clone()));
        }
        if !self.posts[post].contains(parent) {
            return Err(Error::CommentNotFound(parent.clone()));
        }
        let reply = self.record(post, content)?;
        self.posts
            .get_mut(post)
            .expect("post vanished while recording a reply")
            .append_reply(parent, reply.clone())?;
        Ok(reply)
    }
}
