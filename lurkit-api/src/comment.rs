/// Identity of a comment, assigned by the backend on creation.
///
/// The client never mints these; it stores whatever the backend returned, so
/// the backend stays the single source of truth for identity.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub String);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub content: String,

    /// Display string formatted by the backend, eg. "4 hours ago"
    pub timestamp: String,

    pub votes: i64,

    /// Child comments, in insertion order
    pub replies: Vec<Comment>,
}

impl Comment {
    /// A freshly-created comment as the backend returns it: no votes, no
    /// replies yet.
    pub fn created(id: CommentId, author: String, content: String, timestamp: String) -> Comment {
        Comment {
            id,
            author,
            content,
            timestamp,
            votes: 0,
            replies: Vec::new(),
        }
    }
}
