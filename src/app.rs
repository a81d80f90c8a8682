//! Smart Inventory App
//!
//! Root component: provides shared context and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{InventoryPage, Navbar, PurchasePage, ReportsPage, SalesPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::preferences;
use crate::route::{self, Route};
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[APP] API base {}", config.api_base);

    // Provide context to all children
    provide_context(AppContext::new(&config));
    let store = Store::new(UiState::new(route::current_route(), preferences::load_theme()));
    provide_context(store);

    // Back/forward and manual hash edits
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let target = route::current_route();
        if store.route().get_untracked() != target {
            *store.route().write() = target;
        }
    });

    view! {
        <div class="app-layout">
            <Navbar />
            <div class="app-content">
                // Each page remounts on navigation and fetches fresh data
                {move || match store.route().get() {
                    Route::Inventory => view! { <InventoryPage /> }.into_any(),
                    Route::Sales => view! { <SalesPage /> }.into_any(),
                    Route::Purchase => view! { <PurchasePage /> }.into_any(),
                    Route::Reports => view! { <ReportsPage /> }.into_any(),
                }}
            </div>
        </div>
    }
}
