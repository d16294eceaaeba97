use leptos::prelude::*;
use leptos_router::components::A;
use shared::content::{CREATE_RULE_LABEL, CREATE_RULE_PATH};
use shared::theme::{ColorToken, Theme};

/// A control that starts the rule creation flow. Needs no parameters to render.
pub trait CreateActionControl: Send + Sync + 'static {
    fn render(&self) -> AnyView;
}

/// Links to the create-rule page. Must be rendered inside a `Router`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCreateButton;

impl CreateActionControl for RuleCreateButton {
    fn render(&self) -> AnyView {
        let theme = use_context::<Theme>().unwrap_or_default();
        let style = button_style(&theme);
        view! {
            <A href=CREATE_RULE_PATH attr:class="btn" attr:style=style>{CREATE_RULE_LABEL}</A>
        }
        .into_any()
    }
}

pub fn button_style(theme: &Theme) -> String {
    format!(
        "background: {}; color: #fff;",
        theme.color(ColorToken::Primary)
    )
}
