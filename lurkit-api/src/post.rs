use crate::Comment;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct PostId(pub String);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub content: String,

    /// Display string formatted by the backend, eg. "5 hours ago"
    pub timestamp: String,

    pub votes: i64,
    pub subreddit: String,

    /// Top-level comments, in insertion order
    pub comments: Vec<Comment>,
}
