//! Report Window & Totals
//!
//! The reports page loads three series for a trailing window and sums a
//! few columns for the headline figures.

use crate::api::{self, ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{IngredientUsageRow, PurchaseSummaryRow, SalesSummaryRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportWindow {
    #[default]
    Week,
    Month,
    Quarter,
}

impl ReportWindow {
    pub const ALL: [ReportWindow; 3] = [ReportWindow::Week, ReportWindow::Month, ReportWindow::Quarter];

    pub fn days(self) -> u32 {
        match self {
            ReportWindow::Week => 7,
            ReportWindow::Month => 30,
            ReportWindow::Quarter => 90,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }

    pub fn label(self) -> String {
        format!("Last {} days", self.days())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSnapshot {
    pub usage: Vec<IngredientUsageRow>,
    pub sales: Vec<SalesSummaryRow>,
    pub purchases: Vec<PurchaseSummaryRow>,
}

/// Fetch usage, sales and purchases in that order. Any failure fails the
/// whole load so the three series are always from the same window.
pub async fn load_snapshot<T: Transport>(api: &ApiClient<T>, window: ReportWindow) -> Result<ReportSnapshot, ApiError> {
    let usage = api::ingredient_usage(api, window).await?;
    let sales = api::sales_summary(api, window).await?;
    let purchases = api::purchase_summary(api, window).await?;
    log::info!(
        "[Reports] {}d: {} usage, {} sales, {} purchase rows",
        window.days(),
        usage.len(),
        sales.len(),
        purchases.len()
    );
    Ok(ReportSnapshot { usage, sales, purchases })
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportTotals {
    pub items_sold: f64,
    pub revenue: f64,
    pub purchased: f64,
}

impl ReportTotals {
    pub fn from_snapshot(snapshot: &ReportSnapshot) -> Self {
        Self {
            items_sold: snapshot.sales.iter().map(SalesSummaryRow::quantity_sold).sum(),
            revenue: snapshot.sales.iter().map(SalesSummaryRow::revenue).sum(),
            purchased: snapshot.purchases.iter().map(PurchaseSummaryRow::purchased_quantity).sum(),
        }
    }
}

// ========================
// CSV Exports
// ========================

/// A downloadable series: file stem plus fixed column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportExport {
    Sales,
    Purchases,
    IngredientUsage,
}

impl ReportExport {
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            ReportExport::Sales => &["menu_item", "quantity_sold", "revenue"],
            ReportExport::Purchases => &["ingredient", "purchased_quantity"],
            ReportExport::IngredientUsage => &["ingredient", "used_quantity"],
        }
    }

    pub fn file_name(self, window: ReportWindow) -> String {
        let stem = match self {
            ReportExport::Sales => "sales",
            ReportExport::Purchases => "purchases",
            ReportExport::IngredientUsage => "ingredient_usage",
        };
        format!("{}_{}d.csv", stem, window.days())
    }

    pub fn render(self, snapshot: &ReportSnapshot) -> String {
        match self {
            ReportExport::Sales => crate::csv::render_rows(&snapshot.sales, self.headers()),
            ReportExport::Purchases => crate::csv::render_rows(&snapshot.purchases, self.headers()),
            ReportExport::IngredientUsage => crate::csv::render_rows(&snapshot.usage, self.headers()),
        }
    }
}
