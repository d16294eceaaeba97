use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::Router;
use shared::theme::Theme;

mod action;
mod components;
mod render;

const THEME_JSON: &str = include_str!("../theme.json");

fn main() {
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_context(load_theme(THEME_JSON));
    // rule fetching lives outside this app
    let rules: Vec<String> = Vec::new();
    view! {
        <Router>
            <main class="container">
                <h1>"Rules"</h1>
                <components::RuleListBody rules />
            </main>
        </Router>
    }
}

fn load_theme(json: &str) -> Theme {
    Theme::from_json(json).unwrap_or_else(|e| {
        warn!("falling back to default theme: {e}");
        Theme::default()
    })
}
