//! Spinner Component

use leptos::prelude::*;

/// Animated loading indicator
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { "spinner small" } else { "spinner" };
    view! {
        <svg class=class viewBox="0 0 24 24" aria-hidden="true">
            <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" fill="none"></circle>
            <path class="spinner-head" fill="currentColor" d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"></path>
        </svg>
    }
}
