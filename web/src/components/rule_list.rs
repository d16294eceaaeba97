use leptos::prelude::*;

use super::EmptyDataFallback;

/// The fallback is shown only for an empty list
pub fn shows_fallback(rules: &[String]) -> bool {
    rules.is_empty()
}

#[component]
pub fn RuleListBody(rules: Vec<String>) -> impl IntoView {
    if shows_fallback(&rules) {
        return view! { <EmptyDataFallback /> }.into_any();
    }
    view! {
        <ul class="rule-list">
            {rules.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
        </ul>
    }
    .into_any()
}
