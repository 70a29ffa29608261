use lurkit_client::api::Rule;
use yew::prelude::*;

use crate::lang::Lang;

#[derive(Clone, PartialEq, Properties)]
pub struct SidebarProps {
    pub rules: Vec<Rule>,
    pub lang: Lang,
}

#[function_component(Sidebar)]
pub fn sidebar(p: &SidebarProps) -> Html {
    let lang = p.lang;
    html! {
        <div class="d-flex flex-column gap-3">
            <div class="card shadow-sm">
                <div class="card-banner rounded-top"></div>
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-start">
                        <div class="community-avatar rounded-circle d-flex align-items-center justify-content-center">
                            <span class="bi-people-fill text-white fs-4"></span>
                        </div>
                        <button type="button" class="btn btn-primary btn-sm rounded-pill px-4 fw-bold">
                            { lang.text("Join", "Unirse") }
                        </button>
                    </div>
                    <h1 class="h5 fw-bold mt-3">{ "r/AskReddit" }</h1>
                    <p class="text-muted small mb-0 mt-2">
                        { lang.text(
                            "Ask Reddit: the front page of the internet",
                            "Ask Reddit: la portada del internet",
                        ) }
                    </p>
                    <div class="mt-3 d-flex flex-column gap-2 small">
                        <div>
                            <span class="bi-people me-2 text-muted"></span>
                            <strong>{ "41.2m" }</strong>
                            { " " }
                            { lang.text("members", "miembros") }
                        </div>
                        <div>
                            <span class="online-dot me-2"></span>
                            <strong>{ "98.5k" }</strong>
                            { " " }
                            { lang.text("online", "en línea") }
                        </div>
                        <div>
                            <span class="bi-cake2 me-2 text-muted"></span>
                            { lang.text("Created Jan 25, 2008", "Creado el 25 de enero de 2008") }
                        </div>
                    </div>
                    <div class="mt-3 pt-3 border-top small">
                        <span class="bi-award text-warning me-2"></span>
                        <span class="fw-medium">
                            { lang.text(
                                "Top 1% of all Reddit communities",
                                "Top 1% de todas las comunidades de Reddit",
                            ) }
                        </span>
                    </div>
                </div>
            </div>
            <div class="card shadow-sm">
                <div class="card-body">
                    <h2 class="h6 fw-bold mb-3">
                        { lang.text("Subreddit Rules", "Reglas del Subreddit") }
                    </h2>
                    <ol class="mb-0 ps-3">
                        { for p.rules.iter().map(|rule| html! {
                            <li class="small mb-3">
                                <span class="fw-medium">{ &rule.title }</span>
                                <p class="text-muted mb-0 mt-1">{ &rule.description }</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </div>
        </div>
    }
}
