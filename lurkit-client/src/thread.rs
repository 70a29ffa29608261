use crate::api::{Comment, CommentId, Error, Post};

/// The comment tree of one post.
///
/// Comments are append-only for the lifetime of the view: no edit, no delete,
/// no reordering. Lookups walk the tree recursively; discussion threads are
/// small and shallow enough that an index would buy nothing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Thread {
    pub post: Post,
}

fn find_in<'a>(comments: &'a mut Vec<Comment>, id: &CommentId) -> Option<&'a mut Comment> {
    for c in comments.iter_mut() {
        if c.id == *id {
            return Some(c);
        }
        if let Some(res) = find_in(&mut c.replies, id) {
            return Some(res);
        }
    }
    None
}

impl Thread {
    pub fn new(post: Post) -> Thread {
        Thread { post }
    }

    /// Append `comment` at the end of the post's top-level comments.
    pub fn append_comment(&mut self, comment: Comment) {
        if self.contains(&comment.id) {
            tracing::warn!(id = %comment.id, "appending comment whose id is already in the thread");
        }
        self.post.comments.push(comment);
    }

    /// Append `reply` under the comment with id `parent`, wherever it sits in
    /// the tree. The tree is left untouched when `parent` is unknown.
    pub fn append_reply(&mut self, parent: &CommentId, reply: Comment) -> Result<(), Error> {
        if self.contains(&reply.id) {
            tracing::warn!(id = %reply.id, "appending reply whose id is already in the thread");
        }
        match find_in(&mut self.post.comments, parent) {
            Some(p) => {
                p.replies.push(reply);
                Ok(())
            }
            None => Err(Error::CommentNotFound(parent.clone())),
        }
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.iter().find(|c| c.id == *id)
    }

    pub fn contains(&self, id: &CommentId) -> bool {
        self.comment(id).is_some()
    }

    /// All comments of the thread, depth-first, each parent before its own
    /// replies.
    pub fn iter(&self) -> Comments<'_> {
        Comments {
            stack: vec![self.post.comments.iter()],
        }
    }

    /// Total number of comments at all depths.
    pub fn comment_count(&self) -> usize {
        self.iter().count()
    }
}

/// Lazy pre-order traversal over a [`Thread`], see [`Thread::iter`].
pub struct Comments<'a> {
    stack: Vec<std::slice::Iter<'a, Comment>>,
}

impl<'a> Iterator for Comments<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<&'a Comment> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(c) => {
                    self.stack.push(c.replies.iter());
                    return Some(c);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
