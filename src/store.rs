//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only cross-page
//! UI state lives here; page data is owned by each page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::preferences::{self, Theme};
use crate::route::{self, Route};

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Page currently shown
    pub route: Route,
    pub theme: Theme,
}

impl UiState {
    pub fn new(route: Route, theme: Theme) -> Self {
        Self { route, theme }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_navigate(store: &UiStore, target: Route) {
    if store.route().get_untracked() == target {
        return;
    }
    *store.route().write() = target;
    route::push_route(target);
}

pub fn store_toggle_theme(store: &UiStore) {
    let next = store.theme().get_untracked().toggled();
    *store.theme().write() = next;
    preferences::save_theme(next);
}
