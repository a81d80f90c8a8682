//! Error Types
//!
//! Failures the dashboard distinguishes: remote API failures and local,
//! pre-network form validation failures.

use thiserror::Error;

/// Message used whenever the backend gives us nothing better.
pub const GENERIC_API_ERROR: &str = "API error";

/// Failure of a call against the inventory API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-success HTTP status. `message` is the backend `detail` on the
    /// write path, otherwise [`GENERIC_API_ERROR`].
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (offline, CORS, aborted).
    #[error("{0}")]
    Network(String),

    /// A success response whose body did not match the expected schema.
    #[error("Unexpected response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown inline under a form.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Form input rejected before any request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select item and valid quantity")]
    MissingSelection,
    #[error("Select item and valid quantity")]
    InvalidQuantity,
}
