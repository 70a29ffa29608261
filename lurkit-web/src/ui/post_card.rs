use std::rc::Rc;

use lurkit_client::{
    api::{Comment, CommentId},
    Thread,
};
use yew::prelude::*;

use crate::{ui, ServerInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct PostCardProps {
    pub thread: Rc<Thread>,
    pub server: Rc<ServerInfo>,
    pub on_comment_added: Callback<Comment>,
    pub on_reply_added: Callback<(CommentId, Comment)>,
}

#[function_component(PostCard)]
pub fn post_card(p: &PostCardProps) -> Html {
    let post = &p.thread.post;
    html! {
        <div class="card shadow-sm">
            <div class="d-flex">
                // vote column, display only
                <div class="d-flex flex-column align-items-center bg-light p-2 rounded-start">
                    <button type="button" class="btn bi-btn bi-arrow-up-circle" aria-label="Upvote"></button>
                    <span class="fw-bold small my-1">{ post.votes }</span>
                    <button type="button" class="btn bi-btn bi-arrow-down-circle" aria-label="Downvote"></button>
                </div>
                <div class="flex-fill p-2">
                    <div class="text-muted small mb-2">
                        <span class="fw-bold text-body">{ format!("r/{}", post.subreddit) }</span>
                        <span class="mx-1">{ "•" }</span>
                        { format!("Posted by u/{}", post.author) }
                        <span class="mx-1">{ "•" }</span>
                        { &post.timestamp }
                    </div>
                    <h2 class="h4 fw-bold mb-3">{ &post.title }</h2>
                    <div class="mb-3">{ &post.content }</div>
                    <div class="d-flex gap-2 text-muted small">
                        <button type="button" class="btn btn-sm">
                            <span class="bi-chat-left me-1"></span>
                            { format!("{} Comments", p.thread.comment_count()) }
                        </button>
                        <button type="button" class="btn btn-sm">
                            <span class="bi-share me-1"></span>
                            { "Share" }
                        </button>
                        <button type="button" class="btn btn-sm">
                            <span class="bi-bookmark-plus me-1"></span>
                            { "Save" }
                        </button>
                        <button type="button" class="btn btn-sm">
                            <span class="bi-flag me-1"></span>
                            { "Report" }
                        </button>
                    </div>
                </div>
            </div>
            <ui::CommentList
                thread={p.thread.clone()}
                server={p.server.clone()}
                on_comment_added={p.on_comment_added.clone()}
                on_reply_added={p.on_reply_added.clone()}
            />
        </div>
    }
}
