use lurkit_client::api::{Comment, CommentId, Error, PostId};

use crate::ServerInfo;

pub async fn create_comment(
    server: &ServerInfo,
    post: &PostId,
    content: &str,
) -> Result<Comment, Error> {
    submit(
        format!("{}/posts/{}/comments/", server.base_url, post),
        content,
    )
    .await
}

pub async fn create_reply(
    server: &ServerInfo,
    post: &PostId,
    parent: &CommentId,
    content: &str,
) -> Result<Comment, Error> {
    submit(
        format!(
            "{}/posts/{}/comments/{}/replies/",
            server.base_url, post, parent
        ),
        content,
    )
    .await
}

/// POST `{"content": …}` and decode the created comment. Non-2xx responses
/// carry a structured error body; anything unintelligible is a plain
/// submission failure.
async fn submit(url: String, content: &str) -> Result<Comment, Error> {
    let resp = crate::CLIENT
        .post(url)
        .json(&serde_json::json!({ "content": content }))
        .send()
        .await
        .map_err(|e| {
            tracing::error!("submission request failed: {e}");
            Error::SubmissionFailed
        })?;
    let status = resp.status();
    if status.is_success() {
        resp.json().await.map_err(|e| {
            tracing::error!("failed to decode created comment: {e}");
            Error::SubmissionFailed
        })
    } else {
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("failed to read error response: {e}");
            Error::SubmissionFailed
        })?;
        Err(Error::parse(&body).unwrap_or_else(|e| {
            tracing::error!("unintelligible error response (status {status}): {e}");
            Error::SubmissionFailed
        }))
    }
}
