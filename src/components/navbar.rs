//! Navigation Bar Component
//!
//! Brand, page links and the theme toggle.

use leptos::prelude::*;

use crate::preferences::Theme;
use crate::route::Route;
use crate::store::{store_navigate, store_toggle_theme, use_ui_store, UiStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_ui_store();
    let is_dark = move || store.theme().get() == Theme::Dark;

    view! {
        <header class="navbar">
            <a class="navbar-brand" href=Route::Inventory.hash() on:click=move |ev| {
                ev.prevent_default();
                store_navigate(&store, Route::Inventory);
            }>
                <span class="navbar-logo">"SI"</span>
                <span class="navbar-title">"Smart Inventory"</span>
            </a>

            <nav class="navbar-links">
                {Route::ALL.into_iter().map(|route| {
                    let is_active = move || store.route().get() == route;
                    view! {
                        <a
                            href=route.hash()
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |ev| {
                                ev.prevent_default();
                                store_navigate(&store, route);
                            }
                        >
                            {route.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                class="theme-toggle"
                aria-label="Toggle dark mode"
                aria-pressed=move || if is_dark() { "true" } else { "false" }
                on:click=move |_| store_toggle_theme(&store)
            >
                {move || if is_dark() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
