//! Shared fixtures and drivers for the workspace integration tests.

use lurkit_client::{
    api::{Backend, Comment, CommentId, Error, Post, PostId},
    Composer, Thread,
};

pub fn comment(id: &str, content: &str) -> Comment {
    Comment::created(
        CommentId(String::from(id)),
        String::from("commenter1"),
        String::from(content),
        String::from("4 hours ago"),
    )
}

pub fn sample_post() -> Post {
    Post {
        id: PostId(String::from("1")),
        title: String::from("A question for everyone"),
        author: String::from("username123"),
        content: String::from("Tell me things."),
        timestamp: String::from("5 hours ago"),
        votes: 15200,
        subreddit: String::from("AskReddit"),
        comments: vec![comment("c1", "First!")],
    }
}

/// Drive one composer submission the way the page does: begin, call the
/// backend, then either append the created comment to the local thread or
/// surface the failure while keeping the buffer.
pub async fn submit<B: Backend + Send>(
    composer: &mut Composer,
    backend: &mut B,
    thread: &mut Thread,
    parent: Option<&CommentId>,
) -> Result<Comment, Error> {
    let content = composer
        .begin_submit()
        .expect("submitted with a blank buffer or a submission in flight");
    let post = thread.post.id.clone();
    let res = match parent {
        None => backend.create_comment(&post, &content).await,
        Some(p) => backend.create_reply(&post, p, &content).await,
    };
    match res {
        Ok(created) => {
            composer.finish_submit(Ok(()));
            match parent {
                None => thread.append_comment(created.clone()),
                Some(p) => thread.append_reply(p, created.clone())?,
            }
            Ok(created)
        }
        Err(e) => {
            composer.finish_submit(Err(e.clone()));
            Err(e)
        }
    }
}
