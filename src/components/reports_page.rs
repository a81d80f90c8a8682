//! Reports Page
//!
//! Headline totals, summary tables and CSV export for a trailing window.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ReportCard, Spinner};
use crate::context::use_api;
use crate::download;
use crate::models::format_number;
use crate::reports::{self, ReportExport, ReportSnapshot, ReportTotals, ReportWindow};
use crate::view_state::ViewState;

const TOP_INGREDIENTS: usize = 5;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(ViewState::new("Reports", ReportSnapshot::default()));
    let (window, set_window) = signal(ReportWindow::default());

    let load = move |selected: ReportWindow| {
        let Some(ticket) = state.try_update(|s| s.begin()) else { return };
        let api = api.clone();
        spawn_local(async move {
            let outcome = reports::load_snapshot(&api, selected).await;
            state.try_update(|s| s.settle(ticket, outcome));
        });
    };

    // Re-fetch all three series whenever the window changes
    let on_window = load.clone();
    Effect::new(move |_| on_window(window.get()));

    let loading = move || state.with(|s| s.is_loading());
    let totals = Memo::new(move |_| state.with(|s| ReportTotals::from_snapshot(s.data())));

    let export = move |kind: ReportExport| {
        let selected = window.get_untracked();
        let content = state.with_untracked(|s| kind.render(s.data()));
        let file_name = kind.file_name(selected);
        match download::save_csv(&file_name, &content) {
            Ok(()) => log::info!("[Reports] exported {}", file_name),
            Err(e) => log::error!("[Reports] export of {} failed: {}", file_name, e),
        }
    };

    let period_subtitle = Signal::derive(move || window.get().label());

    view! {
        <main class="page">
            <header class="page-header">
                <h1>"Reports"</h1>
                <p class="page-subtitle">
                    "Analytics and summaries for recent activity. Select a period to refresh the reports."
                </p>
            </header>

            <div class="toolbar">
                <div class="toolbar-group">
                    <label for="period">"Period:"</label>
                    <select
                        id="period"
                        prop:value=move || window.get().days().to_string()
                        on:change=move |ev| {
                            let days = event_target_value(&ev).parse().unwrap_or_default();
                            if let Some(selected) = ReportWindow::from_days(days) {
                                set_window.set(selected);
                            }
                        }
                    >
                        {ReportWindow::ALL.into_iter().map(|w| view! {
                            <option value=w.days().to_string()>{w.label()}</option>
                        }).collect_view()}
                    </select>
                    <button class="btn primary" on:click=move |_| load(window.get_untracked())>"Refresh"</button>
                </div>

                <div class="toolbar-status">
                    <Show
                        when=loading
                        fallback=move || view! {
                            <div class="total">
                                <div class="total-label">"Total Items Sold"</div>
                                <div class="total-value">{move || format_number(totals.get().items_sold)}</div>
                            </div>
                            <div class="total">
                                <div class="total-label">"Revenue"</div>
                                <div class="total-value">"₹" {move || format_number(totals.get().revenue)}</div>
                            </div>
                            <div class="total">
                                <div class="total-label">"Purchased Qty"</div>
                                <div class="total-value">{move || format_number(totals.get().purchased)}</div>
                            </div>
                        }
                    >
                        <Spinner small=true />
                        <span>"Loading..."</span>
                    </Show>
                </div>
            </div>

            <div class="card-grid three">
                <ReportCard
                    title="Total Sales"
                    subtitle=Signal::derive(move || format!("Items sold: {}", format_number(totals.get().items_sold)))
                    actions={move || view! {
                        <button class="btn link" on:click=move |_| export(ReportExport::Sales)>"Export CSV"</button>
                    }}
                >
                    <div class="headline">"₹" {move || format_number(totals.get().revenue)}</div>
                </ReportCard>

                <ReportCard
                    title="Purchases"
                    subtitle=Signal::derive(move || format!("Purchased qty: {}", format_number(totals.get().purchased)))
                    actions={move || view! {
                        <button class="btn link" on:click=move |_| export(ReportExport::Purchases)>"Export CSV"</button>
                    }}
                >
                    <div class="headline">{move || format_number(totals.get().purchased)}</div>
                </ReportCard>

                <ReportCard
                    title="Top Ingredients"
                    subtitle=Signal::derive(|| "Most used ingredients in period".to_string())
                    actions={move || view! {
                        <button class="btn link" on:click=move |_| export(ReportExport::IngredientUsage)>"Export CSV"</button>
                    }}
                >
                    <ul class="top-list">
                        {move || state.with(|s| s.data().usage.iter().take(TOP_INGREDIENTS).cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|row| view! {
                                <li>
                                    <span>{row.ingredient().to_string()}</span>
                                    <span class="strong">{format_number(row.used_quantity())}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </ReportCard>
            </div>

            <div class="card-grid two">
                <ReportCard title="Sales Summary" subtitle=period_subtitle extra_class="scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th class="left">"Menu Item"</th>
                                <th class="right">"Quantity Sold"</th>
                                <th class="right">"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.with(|s| s.data().sales.clone()).into_iter().map(|row| view! {
                                <tr>
                                    <td class="left">{row.menu_item().to_string()}</td>
                                    <td class="right">{format_number(row.quantity_sold())}</td>
                                    <td class="right">"₹" {format_number(row.revenue())}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </ReportCard>

                <ReportCard title="Purchase Summary" subtitle=period_subtitle extra_class="scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th class="left">"Ingredient"</th>
                                <th class="right">"Purchased Quantity"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.with(|s| s.data().purchases.clone()).into_iter().map(|row| view! {
                                <tr>
                                    <td class="left">{row.ingredient().to_string()}</td>
                                    <td class="right">{format_number(row.purchased_quantity())}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </ReportCard>
            </div>
        </main>
    }
}
