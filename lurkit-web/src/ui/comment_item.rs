use std::rc::Rc;

use lurkit_client::api::{Comment, CommentId, PostId};
use yew::prelude::*;

use crate::{ui, ServerInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
    pub post_id: PostId,
    pub server: Rc<ServerInfo>,
    pub replying_to: Option<CommentId>,
    pub on_toggle_reply: Callback<CommentId>,
    pub on_reply_created: Callback<(CommentId, Comment)>,
}

/// One comment and, recursively, its replies.
#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let id = p.comment.id.clone();

    let reply_form = (p.replying_to.as_ref() == Some(&p.comment.id)).then(|| {
        let on_created = {
            let id = id.clone();
            p.on_reply_created.reform(move |reply| (id.clone(), reply))
        };
        let on_cancel = {
            let id = id.clone();
            p.on_toggle_reply.reform(move |()| id.clone())
        };
        html! {
            <div class="mt-3">
                <ui::CommentForm
                    post_id={p.post_id.clone()}
                    parent={Some(p.comment.id.clone())}
                    server={p.server.clone()}
                    {on_created}
                    {on_cancel}
                />
            </div>
        }
    });

    let on_reply_click = {
        let on_toggle_reply = p.on_toggle_reply.clone();
        let id = id.clone();
        Callback::from(move |_| on_toggle_reply.emit(id.clone()))
    };

    html! {
        <div class="border-start border-2 ps-3 mb-3">
            <div class="text-muted small mb-1">
                <span class="fw-bold text-body">{ &p.comment.author }</span>
                <span class="mx-1">{ "•" }</span>
                { &p.comment.timestamp }
            </div>
            <div class="small mb-2">{ &p.comment.content }</div>
            <div class="d-flex gap-2 text-muted small">
                <button type="button" class="btn btn-link btn-sm p-0 text-muted" onclick={on_reply_click}>
                    { "Reply" }
                </button>
                <button type="button" class="btn btn-link btn-sm p-0 text-muted">{ "Share" }</button>
                <button type="button" class="btn btn-link btn-sm p-0 text-muted">{ "Report" }</button>
            </div>
            { for reply_form }
            { for p.comment.replies.iter().map(|r| html! {
                <div class="mt-3">
                    <ui::CommentItem
                        comment={r.clone()}
                        post_id={p.post_id.clone()}
                        server={p.server.clone()}
                        replying_to={p.replying_to.clone()}
                        on_toggle_reply={p.on_toggle_reply.clone()}
                        on_reply_created={p.on_reply_created.clone()}
                    />
                </div>
            }) }
        </div>
    }
}
