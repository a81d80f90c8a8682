//! Ledger Form Controller
//!
//! Shared state and rules for the sale and purchase forms: validate,
//! submit once, then either reset (success) or keep the input (failure).

use crate::api::{self, ApiClient, Transport};
use crate::error::{ApiError, ValidationError};
use crate::models::{PurchaseRequest, SaleRequest};

pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Which ledger a form writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Sale,
    Purchase,
}

/// One entry of the reference dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: u32,
    pub label: String,
}

impl FormKind {
    pub fn select_label(self) -> &'static str {
        match self {
            FormKind::Sale => "Menu Item",
            FormKind::Purchase => "Inventory Item",
        }
    }

    pub fn submit_label(self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (FormKind::Sale, false) => "Record Sale",
            (FormKind::Sale, true) => "Recording...",
            (FormKind::Purchase, false) => "Add Stock",
            (FormKind::Purchase, true) => "Adding...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Sale => "✅ Sale recorded successfully",
            FormKind::Purchase => "✅ Stock added successfully",
        }
    }

    fn failure_fallback(self) -> &'static str {
        match self {
            FormKind::Sale => "Sale failed",
            FormKind::Purchase => "Purchase failed",
        }
    }

    fn load_failure(self) -> &'static str {
        match self {
            FormKind::Sale => "Failed to load menu",
            FormKind::Purchase => "Failed to load inventory",
        }
    }

    /// Fetch the dropdown entries: menu items for sales, stock items for purchases.
    pub async fn load_choices<T: Transport>(self, api: &ApiClient<T>) -> Result<Vec<Choice>, ApiError> {
        let choices = match self {
            FormKind::Sale => api::list_menu(api)
                .await?
                .into_iter()
                .map(|item| Choice { id: item.id, label: item.name })
                .collect(),
            FormKind::Purchase => api::list_inventory(api)
                .await?
                .into_iter()
                .map(|item| Choice {
                    id: item.id,
                    label: format!("{} ({})", item.name, item.unit),
                })
                .collect(),
        };
        Ok(choices)
    }

    /// Send a validated submission under the backend's field names.
    pub async fn send<T: Transport>(self, api: &ApiClient<T>, submission: Submission) -> Result<(), ApiError> {
        match self {
            FormKind::Sale => {
                let request = SaleRequest {
                    menu_item_id: submission.id,
                    quantity: submission.quantity,
                };
                api::record_sale(api, &request).await?;
            }
            FormKind::Purchase => {
                let request = PurchaseRequest {
                    inventory_item_id: submission.id,
                    quantity: submission.quantity,
                };
                api::record_purchase(api, &request).await?;
            }
        }
        Ok(())
    }
}

/// Validated form input, ready to send.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub id: u32,
    pub quantity: f64,
}

/// Number-input semantics: empty is 0, garbage is NaN (and so invalid).
pub fn parse_quantity(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or(f64::NAN)
}

/// Dropdown value: empty string means nothing selected.
pub fn parse_selection(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: FormKind,
    pub choices: Vec<Choice>,
    pub selection: Option<u32>,
    pub quantity: f64,
    pub submitting: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Standing error from loading `choices`; survives submit and reset.
    pub load_error: Option<String>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            choices: Vec::new(),
            selection: None,
            quantity: DEFAULT_QUANTITY,
            submitting: false,
            message: None,
            error: None,
            load_error: None,
        }
    }

    pub fn choices_loaded(&mut self, outcome: Result<Vec<Choice>, ApiError>) {
        match outcome {
            Ok(choices) => self.choices = choices,
            Err(e) => {
                log::error!("[{:?}Form] {}: {}", self.kind, self.kind.load_failure(), e);
                self.load_error = Some(self.kind.load_failure().to_string());
            }
        }
    }

    pub fn validate(&self) -> Result<Submission, ValidationError> {
        let id = self.selection.ok_or(ValidationError::MissingSelection)?;
        // NaN fails this comparison too
        if !(self.quantity > 0.0) {
            return Err(ValidationError::InvalidQuantity);
        }
        Ok(Submission { id, quantity: self.quantity })
    }

    /// Clear previous feedback and validate. On success the form enters the
    /// submitting state and the caller must send the returned submission;
    /// on failure the inline error is set and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        self.message = None;
        self.error = None;
        match self.validate() {
            Ok(submission) => {
                self.submitting = true;
                Some(submission)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                log::info!("[{:?}Form] submitted", self.kind);
                self.message = Some(self.kind.success_message().to_string());
                self.selection = None;
                self.quantity = DEFAULT_QUANTITY;
            }
            Err(e) => {
                log::warn!("[{:?}Form] submit failed: {}", self.kind, e);
                let text = e.user_message();
                self.error = Some(if text.is_empty() {
                    self.kind.failure_fallback().to_string()
                } else {
                    text
                });
            }
        }
    }

    /// Local reset; never contacts the backend.
    pub fn reset(&mut self) {
        self.selection = None;
        self.quantity = DEFAULT_QUANTITY;
        self.message = None;
        self.error = None;
    }
}
