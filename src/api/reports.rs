//! Report Endpoints
//!
//! Pre-aggregated series for a trailing window.

use super::{ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{IngredientUsageRow, PurchaseSummaryRow, SalesSummaryRow};
use crate::reports::ReportWindow;

pub async fn ingredient_usage<T: Transport>(
    api: &ApiClient<T>,
    window: ReportWindow,
) -> Result<Vec<IngredientUsageRow>, ApiError> {
    api.read_list(&format!("/reports/ingredient-usage?days={}", window.days())).await
}

pub async fn sales_summary<T: Transport>(
    api: &ApiClient<T>,
    window: ReportWindow,
) -> Result<Vec<SalesSummaryRow>, ApiError> {
    api.read_list(&format!("/reports/sales-summary?days={}", window.days())).await
}

pub async fn purchase_summary<T: Transport>(
    api: &ApiClient<T>,
    window: ReportWindow,
) -> Result<Vec<PurchaseSummaryRow>, ApiError> {
    api.read_list(&format!("/reports/purchase-summary?days={}", window.days())).await
}
