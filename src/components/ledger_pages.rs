//! Sales & Purchase Pages

use leptos::prelude::*;

use crate::components::LedgerForm;
use crate::form::FormKind;

#[component]
pub fn SalesPage() -> impl IntoView {
    view! {
        <main class="page">
            <header class="page-header">
                <h1>"Record Sale"</h1>
                <p class="page-subtitle">"Quickly record a sale against a menu item."</p>
            </header>
            <section class="panel">
                <LedgerForm kind=FormKind::Sale />
            </section>
        </main>
    }
}

#[component]
pub fn PurchasePage() -> impl IntoView {
    view! {
        <main class="page">
            <header class="page-header">
                <h1>"Purchase Stock"</h1>
                <p class="page-subtitle">"Add incoming stock to inventory quickly and safely."</p>
            </header>
            <section class="panel">
                <LedgerForm kind=FormKind::Purchase />
            </section>
        </main>
    }
}
