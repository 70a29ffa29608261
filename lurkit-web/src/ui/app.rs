use std::rc::Rc;

use lurkit_client::{
    api::{Comment, CommentId},
    Thread,
};
use yew::prelude::*;

use crate::{lang::Lang, seed, ui, ServerInfo};

pub enum AppMsg {
    SetLang(Lang),
    CommentAdded(Comment),
    ReplyAdded(CommentId, Comment),
}

pub struct App {
    thread: Rc<Thread>,
    lang: Lang,
    server: Rc<ServerInfo>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            thread: Rc::new(Thread::new(seed::post())),
            lang: Lang::En,
            server: Rc::new(ServerInfo::default()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SetLang(lang) => self.lang = lang,
            AppMsg::CommentAdded(c) => Rc::make_mut(&mut self.thread).append_comment(c),
            AppMsg::ReplyAdded(parent, c) => {
                // The backend accepted the reply but our tree does not know
                // the parent; never misfile it at the top level.
                if let Err(e) = Rc::make_mut(&mut self.thread).append_reply(&parent, c) {
                    tracing::warn!("dropping reply to a comment not in the thread: {e}");
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_lang_change = ctx.link().callback(|e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            AppMsg::SetLang(Lang::from_code(&select.value()))
        });
        html! {
            <div class="container-xl py-4">
                <div class="row g-4">
                    <main class="col">
                        <ui::PostCard
                            thread={self.thread.clone()}
                            server={self.server.clone()}
                            on_comment_added={ctx.link().callback(AppMsg::CommentAdded)}
                            on_reply_added={ctx.link().callback(|(p, c)| AppMsg::ReplyAdded(p, c))}
                        />
                    </main>
                    <aside class="col-md-4 d-none d-md-block">
                        <div class="sticky-top pt-2">
                            <select class="form-select mb-3" onchange={on_lang_change}>
                                <option value="en" selected={self.lang == Lang::En}>{ "English" }</option>
                                <option value="es" selected={self.lang == Lang::Es}>{ "Español" }</option>
                            </select>
                            <ui::Sidebar rules={seed::rules(self.lang)} lang={self.lang} />
                        </div>
                    </aside>
                </div>
            </div>
        }
    }
}
