//! UI Components
//!
//! Pages and the pieces they are built from.

mod spinner;
mod navbar;
mod inventory_table;
mod inventory_page;
mod ledger_form;
mod ledger_pages;
mod report_card;
mod reports_page;

pub use spinner::Spinner;
pub use navbar::Navbar;
pub use inventory_table::InventoryTable;
pub use inventory_page::InventoryPage;
pub use ledger_form::LedgerForm;
pub use ledger_pages::{PurchasePage, SalesPage};
pub use report_card::ReportCard;
pub use reports_page::ReportsPage;
