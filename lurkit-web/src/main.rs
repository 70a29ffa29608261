mod api;
mod lang;
mod seed;
mod ui;
mod util;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// Where the comment-creation API lives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerInfo {
    pub base_url: String,
}

impl Default for ServerInfo {
    fn default() -> ServerInfo {
        ServerInfo {
            base_url: String::from(DEFAULT_API_URL),
        }
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}
