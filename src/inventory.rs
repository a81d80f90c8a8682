//! Inventory Projection
//!
//! Loading and row projection for the inventory page. The table and the card
//! layout both render from [`project_rows`], so filtering and highlighting
//! cannot drift between them.

use crate::api::{self, ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{InventoryItem, LowStockIds};

/// Everything the inventory page shows, replaced as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    pub items: Vec<InventoryItem>,
    pub low_stock: LowStockIds,
}

/// Fetch the stock list, then the alerts. Both must succeed.
pub async fn load_snapshot<T: Transport>(api: &ApiClient<T>) -> Result<InventorySnapshot, ApiError> {
    let items = api::list_inventory(api).await?;
    let low_stock = api::low_stock_ids(api).await?;
    log::info!("[Inventory] Loaded {} items, {} low", items.len(), low_stock.len());
    Ok(InventorySnapshot { items, low_stock })
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub item: InventoryItem,
    pub is_low: bool,
}

/// Case-insensitive substring match on the item name only.
pub fn matches_query(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

pub fn project_rows(items: &[InventoryItem], low_stock: &LowStockIds, query: &str) -> Vec<InventoryRow> {
    items
        .iter()
        .filter(|item| matches_query(&item.name, query))
        .map(|item| InventoryRow {
            item: item.clone(),
            is_low: low_stock.contains(item.id),
        })
        .collect()
}
