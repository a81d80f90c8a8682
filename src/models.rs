//! Frontend Models
//!
//! Data structures mirrored from the inventory API.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stock-tracked ingredient or supply (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_stock: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reorder_level: f64,
}

/// Sellable menu entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
}

/// Ids the backend currently flags as low on stock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LowStockIds(HashSet<u32>);

impl LowStockIds {
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<u32> for LowStockIds {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `GET /alerts/low-stock` body. Only the ids are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LowStockResponse {
    #[serde(default)]
    pub items: Option<Vec<LowStockEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LowStockEntry {
    pub id: u32,
}

impl From<LowStockResponse> for LowStockIds {
    fn from(response: LowStockResponse) -> Self {
        response.items.unwrap_or_default().into_iter().map(|entry| entry.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseRequest {
    pub inventory_item_id: u32,
    #[serde(serialize_with = "whole_as_integer")]
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRequest {
    pub menu_item_id: u32,
    #[serde(serialize_with = "whole_as_integer")]
    pub quantity: f64,
}

// ========================
// Report Rows
// ========================
// Fields are optional on the wire. `None` is skipped when serializing so
// CSV export renders it as an empty cell; accessors default to zero/empty.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsageRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_quantity: Option<f64>,
}

impl IngredientUsageRow {
    pub fn ingredient(&self) -> &str {
        self.ingredient.as_deref().unwrap_or_default()
    }

    pub fn used_quantity(&self) -> f64 {
        self.used_quantity.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummaryRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_sold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

impl SalesSummaryRow {
    pub fn menu_item(&self) -> &str {
        self.menu_item.as_deref().unwrap_or_default()
    }

    pub fn quantity_sold(&self) -> f64 {
        self.quantity_sold.unwrap_or_default()
    }

    pub fn revenue(&self) -> f64 {
        self.revenue.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseSummaryRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_quantity: Option<f64>,
}

impl PurchaseSummaryRow {
    pub fn ingredient(&self) -> &str {
        self.ingredient.as_deref().unwrap_or_default()
    }

    pub fn purchased_quantity(&self) -> f64 {
        self.purchased_quantity.unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Writes `2.0` as `2` so integer-typed backends accept it; fractions pass through.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Shortest decimal rendering: `2` rather than `2.0`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
