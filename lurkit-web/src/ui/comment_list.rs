use std::rc::Rc;

use lurkit_client::{
    api::{Comment, CommentId},
    Thread,
};
use yew::prelude::*;

use crate::{ui, ServerInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub thread: Rc<Thread>,
    pub server: Rc<ServerInfo>,
    pub on_comment_added: Callback<Comment>,
    pub on_reply_added: Callback<(CommentId, Comment)>,
}

pub enum CommentListMsg {
    ToggleReply(CommentId),
    ReplyCreated(CommentId, Comment),
}

/// The comments section: the top-level composer followed by the comment
/// tree. At most one reply form is open at a time; opening another closes
/// the current one and discards its buffer.
pub struct CommentList {
    replying_to: Option<CommentId>,
}

impl Component for CommentList {
    type Message = CommentListMsg;
    type Properties = CommentListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CommentList { replying_to: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentListMsg::ToggleReply(id) => {
                if self.replying_to.as_ref() == Some(&id) {
                    self.replying_to = None;
                } else {
                    self.replying_to = Some(id);
                }
            }
            CommentListMsg::ReplyCreated(parent, reply) => {
                self.replying_to = None;
                ctx.props().on_reply_added.emit((parent, reply));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let post_id = p.thread.post.id.clone();
        html! {
            <div class="border-top p-3">
                <div class="mb-4">
                    <ui::CommentForm
                        post_id={post_id.clone()}
                        server={p.server.clone()}
                        on_created={p.on_comment_added.clone()}
                    />
                </div>
                { for p.thread.post.comments.iter().map(|c| html! {
                    <ui::CommentItem
                        comment={c.clone()}
                        post_id={post_id.clone()}
                        server={p.server.clone()}
                        replying_to={self.replying_to.clone()}
                        on_toggle_reply={ctx.link().callback(CommentListMsg::ToggleReply)}
                        on_reply_created={ctx.link().callback(|(parent, reply)| {
                            CommentListMsg::ReplyCreated(parent, reply)
                        })}
                    />
                }) }
            </div>
        }
    }
}
