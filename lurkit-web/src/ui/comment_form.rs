use std::rc::Rc;

use lurkit_client::{
    api::{Comment, CommentId, Error, PostId},
    Composer, ComposerKind, Format,
};
use yew::prelude::*;

use crate::{api, util, ServerInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub post_id: PostId,
    pub server: Rc<ServerInfo>,
    pub on_created: Callback<Comment>,

    /// Set when this form composes a reply rather than a top-level comment.
    #[prop_or_default]
    pub parent: Option<CommentId>,

    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

pub enum CommentFormMsg {
    Edited(String),
    ApplyFormat(Format),
    ToggleHelp,
    Submit,
    Done(Result<Comment, Error>),
}

/// One composer instance: a textarea, the formatting toolbar, and the
/// submission state machine. The top-level form and every open reply form
/// are independent instances, each with its own buffer and in-flight state.
pub struct CommentForm {
    composer: Composer,
    textarea: NodeRef,
    show_help: bool,
}

impl Component for CommentForm {
    type Message = CommentFormMsg;
    type Properties = CommentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let kind = match ctx.props().parent {
            None => ComposerKind::Comment,
            Some(_) => ComposerKind::Reply,
        };
        CommentForm {
            composer: Composer::new(kind),
            textarea: NodeRef::default(),
            show_help: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentFormMsg::Edited(buffer) => self.composer.set_buffer(buffer),
            CommentFormMsg::ApplyFormat(format) => self.apply_format(format),
            CommentFormMsg::ToggleHelp => self.show_help = !self.show_help,
            CommentFormMsg::Submit => {
                let content = match self.composer.begin_submit() {
                    Some(content) => content,
                    None => return false,
                };
                let server = ctx.props().server.clone();
                let post = ctx.props().post_id.clone();
                let parent = ctx.props().parent.clone();
                ctx.link().send_future(async move {
                    let res = match &parent {
                        None => api::create_comment(&server, &post, &content).await,
                        Some(p) => api::create_reply(&server, &post, p, &content).await,
                    };
                    CommentFormMsg::Done(res)
                });
            }
            CommentFormMsg::Done(res) => match res {
                Ok(comment) => {
                    self.composer.finish_submit(Ok(()));
                    ctx.props().on_created.emit(comment);
                }
                Err(e) => {
                    tracing::error!("submission rejected: {e}");
                    self.composer.finish_submit(Err(e));
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (placeholder, rows, submit_label) = match ctx.props().parent {
            None => ("What are your thoughts?", "4", "Comment"),
            Some(_) => ("Write your reply...", "3", "Reply"),
        };
        let submit_label = match self.composer.is_submitting() {
            true => "Submitting...",
            false => submit_label,
        };
        let help = self.show_help.then(format_help);
        let error = self.composer.error().map(|e| {
            html! {
                <p class="text-danger small mt-2 mb-0">{ e }</p>
            }
        });
        let cancel = ctx.props().on_cancel.clone().map(|cb| {
            html! {
                <button type="button" class="btn btn-sm text-muted" onclick={cb.reform(|_| ())}>
                    { "Cancel" }
                </button>
            }
        });
        html! {
            <div>
                <textarea
                    ref={self.textarea.clone()}
                    class="form-control mb-2"
                    value={self.composer.buffer().to_string()}
                    placeholder={placeholder}
                    rows={rows}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let t: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        CommentFormMsg::Edited(t.value())
                    })}
                >
                </textarea>
                <div class="border rounded">
                    <div class="d-flex flex-wrap gap-1 p-2 border-bottom">
                        { for Format::ALL.iter().map(|f| self.format_button(ctx, *f)) }
                        <button
                            type="button"
                            class="btn bi-btn bi-question-circle ms-auto"
                            title="Formatting Help"
                            onclick={ctx.link().callback(|_| CommentFormMsg::ToggleHelp)}
                        >
                        </button>
                    </div>
                    { for help }
                </div>
                { for error }
                <div class="mt-2 d-flex justify-content-end gap-2">
                    { for cancel }
                    <button
                        type="button"
                        class="btn btn-primary btn-sm rounded-pill"
                        disabled={!self.composer.can_submit()}
                        onclick={ctx.link().callback(|_| CommentFormMsg::Submit)}
                    >
                        { submit_label }
                    </button>
                </div>
            </div>
        }
    }
}

impl CommentForm {
    /// Splice the clicked format into the buffer at the current textarea
    /// selection, then collapse the caret right after the insertion. The
    /// selection comes in UTF-16 indices, the buffer is UTF-8.
    fn apply_format(&mut self, format: Format) {
        let textarea: web_sys::HtmlTextAreaElement = match self.textarea.cast() {
            Some(t) => t,
            None => return,
        };
        let buffer = self.composer.buffer().to_string();
        let sel_start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
        let sel_end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
        let sel_end = sel_end.max(sel_start);
        let start = util::utf16_to_byte_index(&buffer, sel_start);
        let end = util::utf16_to_byte_index(&buffer, sel_end);
        let caret = self.composer.apply_format(format, start, end);
        let caret = util::byte_to_utf16_index(self.composer.buffer(), caret);
        util::refocus_with_caret(textarea, caret as u32);
    }

    fn format_button(&self, ctx: &Context<Self>, format: Format) -> Html {
        html! {
            <button
                type="button"
                class={classes!("btn", "bi-btn", icon_class(format))}
                title={format.label()}
                onclick={ctx.link().callback(move |_| CommentFormMsg::ApplyFormat(format))}
            >
            </button>
        }
    }
}

fn icon_class(format: Format) -> &'static str {
    match format {
        Format::Bold => "bi-type-bold",
        Format::Italic => "bi-type-italic",
        Format::Strikethrough => "bi-type-strikethrough",
        Format::Code => "bi-code",
        Format::Superscript => "bi-superscript",
        Format::Link => "bi-link-45deg",
        Format::BulletedList => "bi-list-ul",
        Format::Quote => "bi-quote",
        Format::Table => "bi-table",
        Format::Image => "bi-image",
    }
}

fn format_help() -> Html {
    html! {
        <div class="p-3 bg-light small">
            <div class="row">
                <div class="col">
                    <h4 class="h6 fw-bold mb-2">{ "Text Formatting" }</h4>
                    <ul class="list-unstyled text-muted mb-0">
                        <li><code>{ "**bold**" }</code>{ " for bold" }</li>
                        <li><code>{ "*italic*" }</code>{ " for italic" }</li>
                        <li><code>{ "~~strikethrough~~" }</code></li>
                        <li><code>{ "`code`" }</code>{ " for inline code" }</li>
                        <li><code>{ "^(superscript)" }</code></li>
                    </ul>
                </div>
                <div class="col">
                    <h4 class="h6 fw-bold mb-2">{ "Content Formatting" }</h4>
                    <ul class="list-unstyled text-muted mb-0">
                        <li><code>{ "[text](url)" }</code>{ " for links" }</li>
                        <li><code>{ "* item" }</code>{ " for bullet points" }</li>
                        <li><code>{ "> quote" }</code>{ " for quotes" }</li>
                        <li><code>{ "![alt](url)" }</code>{ " for images" }</li>
                        <li>{ "Click the table icon for tables" }</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
