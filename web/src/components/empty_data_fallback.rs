use std::sync::Arc;

use leptos::prelude::*;
use shared::empty_state::EmptyStateView;
use shared::theme::Theme;

use crate::action::{CreateActionControl, RuleCreateButton};
use crate::render::render_node;

/// Empty state of the rule list. Uses the `Theme` from context and renders
/// `RuleCreateButton` unless another control is injected.
#[component]
pub fn EmptyDataFallback(
    #[prop(optional)] action: Option<Arc<dyn CreateActionControl>>,
) -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let action = action.unwrap_or_else(|| Arc::new(RuleCreateButton));
    render_node(&EmptyStateView::describe(), &theme, action.as_ref())
}
