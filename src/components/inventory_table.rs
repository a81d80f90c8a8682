//! Inventory Table Component
//!
//! Wide screens get a table, narrow screens stacked cards. Both are drawn
//! from the same projected rows.

use leptos::prelude::*;

use crate::inventory::InventoryRow;
use crate::models::format_number;

fn status_badge(is_low: bool) -> impl IntoView {
    if is_low {
        view! { <span class="status low">"⚠ Low"</span> }.into_any()
    } else {
        view! { <span class="status ok">"OK"</span> }.into_any()
    }
}

fn table_row(row: InventoryRow) -> impl IntoView {
    view! {
        <tr class:low-row=row.is_low>
            <td class="left">
                <div class="item-name">{row.item.name}</div>
                <div class="item-unit">{row.item.unit}</div>
            </td>
            <td>{format_number(row.item.current_stock)}</td>
            <td>{format_number(row.item.reorder_level)}</td>
            <td>{status_badge(row.is_low)}</td>
        </tr>
    }
}

fn item_card(row: InventoryRow) -> impl IntoView {
    view! {
        <div class="item-card" class:low-card=row.is_low>
            <div class="item-card-head">
                <div>
                    <div class="item-name">{row.item.name}</div>
                    <div class="item-unit">{row.item.unit}</div>
                </div>
                {status_badge(row.is_low)}
            </div>
            <div class="item-card-stats">
                <div>
                    <div class="stat-label">"Stock"</div>
                    <div class="stat-value">{format_number(row.item.current_stock)}</div>
                </div>
                <div>
                    <div class="stat-label">"Reorder"</div>
                    <div class="stat-value">{format_number(row.item.reorder_level)}</div>
                </div>
            </div>
        </div>
    }
}

/// Rows are re-rendered wholesale on every change; a refresh may alter any
/// column of an existing id.
#[component]
pub fn InventoryTable(#[prop(into)] rows: Signal<Vec<InventoryRow>>) -> impl IntoView {
    view! {
        <div class="inventory-table">
            // Desktop / wide screens
            <div class="wide-only">
                <table class="data-table">
                    <caption class="sr-only">"Inventory items"</caption>
                    <thead>
                        <tr>
                            <th class="left">"Item"</th>
                            <th>"Stock"</th>
                            <th>"Reorder Level"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(table_row).collect_view()}
                    </tbody>
                </table>
            </div>

            // Mobile: stacked cards
            <div class="narrow-only card-list">
                {move || rows.get().into_iter().map(item_card).collect_view()}
            </div>
        </div>
    }
}
