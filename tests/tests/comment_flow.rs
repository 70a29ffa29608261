use std::collections::HashSet;

use lurkit_client::{
    api::{Backend, CommentId, Error},
    Composer, ComposerKind, Format, Thread,
};
use lurkit_mock_server::MockServer;
use tests::{sample_post, submit};

fn setup() -> (MockServer, Thread) {
    let post = sample_post();
    let mut server = MockServer::new();
    server.admin_create_post(post.clone());
    (server, Thread::new(post))
}

fn id(s: &str) -> CommentId {
    CommentId(String::from(s))
}

#[tokio::test]
async fn top_level_submit_appends_last() {
    let (mut server, mut thread) = setup();
    let mut composer = Composer::new(ComposerKind::Comment);
    composer.set_buffer(String::from("Great point!"));

    let created = submit(&mut composer, &mut server, &mut thread, None)
        .await
        .unwrap();

    assert_eq!(created.content, "Great point!");
    assert_eq!(created.votes, 0);
    assert!(created.replies.is_empty());
    assert_eq!(thread.post.comments.last().unwrap(), &created);
    assert_eq!(composer.buffer(), "");
    // the mock server recorded the same thing we display
    assert_eq!(
        server.test_thread(&thread.post.id).post.comments,
        thread.post.comments,
    );
}

#[tokio::test]
async fn reply_lands_under_its_parent() {
    let (mut server, mut thread) = setup();
    let mut composer = Composer::new(ComposerKind::Reply);
    composer.set_buffer(String::from("I agree"));

    let parent = id("c1");
    let created = submit(&mut composer, &mut server, &mut thread, Some(&parent))
        .await
        .unwrap();

    let c1 = thread.comment(&parent).unwrap();
    assert_eq!(c1.replies.last().unwrap(), &created);
    // not duplicated at the top level
    assert_eq!(thread.post.comments.len(), 1);
}

#[tokio::test]
async fn deep_replies_stay_deep() {
    let (mut server, mut thread) = setup();

    // build a chain four levels down, replying to the previous reply each time
    let mut parent = id("c1");
    for depth in 0..4 {
        let mut composer = Composer::new(ComposerKind::Reply);
        composer.set_buffer(format!("reply at depth {}", depth + 1));
        let created = submit(&mut composer, &mut server, &mut thread, Some(&parent))
            .await
            .unwrap();
        let node = thread.comment(&parent).unwrap();
        assert_eq!(node.replies.last().unwrap().id, created.id);
        parent = created.id;
    }

    assert_eq!(thread.post.comments.len(), 1);
    assert_eq!(thread.comment_count(), 5);
}

#[tokio::test]
async fn ids_stay_unique_across_many_appends() {
    let (mut server, mut thread) = setup();

    for i in 0..10 {
        let mut composer = Composer::new(ComposerKind::Comment);
        composer.set_buffer(format!("comment {i}"));
        submit(&mut composer, &mut server, &mut thread, None)
            .await
            .unwrap();

        let mut reply = Composer::new(ComposerKind::Reply);
        reply.set_buffer(format!("reply {i}"));
        let parent = id("c1");
        submit(&mut reply, &mut server, &mut thread, Some(&parent))
            .await
            .unwrap();
    }

    let ids: HashSet<_> = thread.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), thread.comment_count());
    assert_eq!(thread.comment_count(), 21);
}

#[tokio::test]
async fn failed_submission_preserves_the_buffer() {
    let (mut server, mut thread) = setup();
    server.test_set_failing(true);

    let mut composer = Composer::new(ComposerKind::Comment);
    composer.set_buffer(String::from("hard-won prose"));
    let res = submit(&mut composer, &mut server, &mut thread, None).await;

    assert_eq!(res, Err(Error::SubmissionFailed));
    assert_eq!(composer.buffer(), "hard-won prose");
    assert_eq!(
        composer.error(),
        Some("Failed to add comment. Please try again.")
    );
    assert_eq!(thread.comment_count(), 1);

    // the user retries once the backend is back, without retyping
    server.test_set_failing(false);
    let created = submit(&mut composer, &mut server, &mut thread, None)
        .await
        .unwrap();
    assert_eq!(created.content, "hard-won prose");
    assert_eq!(composer.buffer(), "");
}

#[tokio::test]
async fn reply_to_unknown_parent_is_not_found() {
    let (mut server, _thread) = setup();
    let post = sample_post().id;
    let parent = id("c404");
    assert_eq!(
        server.create_reply(&post, &parent, "hello").await,
        Err(Error::CommentNotFound(parent)),
    );
}

#[tokio::test]
async fn formatting_then_submitting_round_trips() {
    let (mut server, mut thread) = setup();
    let mut composer = Composer::new(ComposerKind::Comment);
    composer.set_buffer(String::from("hello"));

    // select all of "hello" and click the link button
    let caret = composer.apply_format(Format::Link, 0, 5);
    assert_eq!(composer.buffer(), "[hello](url)");
    assert_eq!(caret, "[hello](url)".len());

    let created = submit(&mut composer, &mut server, &mut thread, None)
        .await
        .unwrap();
    assert_eq!(created.content, "[hello](url)");
}
