use anyhow::{anyhow, Context};
use serde_json::json;

use crate::{CommentId, PostId};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Content is required")]
    ContentRequired,

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    /// The request itself failed: transport error, or a response body that
    /// could not be understood.
    #[error("Submission failed")]
    SubmissionFailed,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::ContentRequired => StatusCode::BAD_REQUEST,
            Error::PostNotFound(_) => StatusCode::NOT_FOUND,
            Error::CommentNotFound(_) => StatusCode::NOT_FOUND,
            Error::SubmissionFailed => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::ContentRequired => json!({
                "message": "Content is required",
                "type": "content-required",
            }),
            Error::PostNotFound(p) => json!({
                "message": "post not found",
                "type": "post-not-found",
                "post": p.0,
            }),
            Error::CommentNotFound(c) => json!({
                "message": "comment not found",
                "type": "comment-not-found",
                "comment": c.0,
            }),
            Error::SubmissionFailed => json!({
                "message": "submission failed",
                "type": "submission-failed",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "content-required" => Error::ContentRequired,
                "post-not-found" => Error::PostNotFound(PostId(String::from(
                    data.get("post")
                        .and_then(|p| p.as_str())
                        .ok_or_else(|| anyhow!("error is a post-not-found without a post id"))?,
                ))),
                "comment-not-found" => Error::CommentNotFound(CommentId(String::from(
                    data.get("comment").and_then(|c| c.as_str()).ok_or_else(|| {
                        anyhow!("error is a comment-not-found without a comment id")
                    })?,
                ))),
                "submission-failed" => Error::SubmissionFailed,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
