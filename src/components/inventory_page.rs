//! Inventory Page
//!
//! Stock overview with search and low-stock highlighting.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{InventoryTable, Spinner};
use crate::context::use_api;
use crate::inventory::{self, project_rows, InventorySnapshot};
use crate::view_state::ViewState;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ViewState::new("Inventory", InventorySnapshot::default()));
    let (query, set_query) = signal(String::new());

    // Fetch inventory then alerts; only the newest load is applied
    let load = move || {
        let Some(ticket) = state.try_update(|s| s.begin()) else { return };
        let api = api.clone();
        spawn_local(async move {
            let outcome = inventory::load_snapshot(&api).await;
            // Page may have been unmounted meanwhile
            state.try_update(|s| s.settle(ticket, outcome));
        });
    };

    // Load on mount
    let initial = load.clone();
    Effect::new(move |_| initial());

    let loading = move || state.with(|s| s.is_loading());
    let item_count = move || state.with(|s| s.data().items.len());
    let rows = Memo::new(move |_| {
        let query = query.get();
        state.with(|s| project_rows(&s.data().items, &s.data().low_stock, &query))
    });

    view! {
        <main class="page">
            <header class="page-header">
                <h1>"Inventory Dashboard"</h1>
                <p class="page-subtitle">"Overview of current stock levels and low-stock alerts."</p>
            </header>

            <div class="toolbar">
                <div class="toolbar-group">
                    <label for="search" class="sr-only">"Search items"</label>
                    <input
                        id="search"
                        type="text"
                        placeholder="Search items"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button class="btn primary" on:click=move |_| load()>"Refresh"</button>
                </div>
                <div class="toolbar-status">
                    <Show
                        when=loading
                        fallback=move || view! { <span>{item_count} " items"</span> }
                    >
                        <Spinner small=true />
                        <span>"Loading..."</span>
                    </Show>
                </div>
            </div>

            <section class="panel">
                <Show
                    when=move || !loading()
                    fallback=|| view! { <div class="panel-loading"><Spinner /></div> }
                >
                    <InventoryTable rows=rows />
                </Show>
            </section>
        </main>
    }
}
