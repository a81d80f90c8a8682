//! Inventory Endpoints
//!
//! Stock list, low-stock alerts and the menu.

use super::{ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{InventoryItem, LowStockIds, LowStockResponse, MenuItem};

pub async fn list_inventory<T: Transport>(api: &ApiClient<T>) -> Result<Vec<InventoryItem>, ApiError> {
    api.read_list("/inventory").await
}

/// Ids flagged by `GET /alerts/low-stock`
pub async fn low_stock_ids<T: Transport>(api: &ApiClient<T>) -> Result<LowStockIds, ApiError> {
    let response: Option<LowStockResponse> = api.read("/alerts/low-stock").await?;
    Ok(response.map(LowStockIds::from).unwrap_or_default())
}

pub async fn list_menu<T: Transport>(api: &ApiClient<T>) -> Result<Vec<MenuItem>, ApiError> {
    api.read_list("/menu").await
}
