//! Inventory API Client
//!
//! HTTP bindings to the inventory backend, organized by domain.
//!
//! `ApiClient` normalizes responses into typed values or [`ApiError`]; the
//! actual I/O goes through a [`Transport`] so the normalization can run
//! against a stub in tests.

mod fetch;
mod inventory;
mod ledger;
mod reports;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, GENERIC_API_ERROR};

pub use fetch::FetchTransport;
pub use inventory::*;
pub use ledger::*;
pub use reports::*;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON text, only set for writes
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for the full response. No retries, no timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct ApiClient<T = FetchTransport> {
    base: Arc<str>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: &str, transport: T) -> Self {
        Self {
            base: Arc::from(base.trim_end_matches('/')),
            transport,
        }
    }

    #[cfg(test)]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET `path`. Any non-success status fails with the generic message;
    /// the error body is not inspected.
    pub async fn read_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = HttpRequest { method: Method::Get, url: self.url(path), body: None };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("[API] GET {} -> {}", path, response.status);
            return Err(ApiError::Status {
                status: response.status,
                message: GENERIC_API_ERROR.to_string(),
            });
        }
        parse_body(path, &response.body)
    }

    pub async fn read<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let value = self.read_json(path).await?;
        decode(path, value)
    }

    /// GET a JSON array; a `null` body counts as empty.
    pub async fn read_list<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>, ApiError> {
        let rows: Option<Vec<R>> = self.read(path).await?;
        Ok(rows.unwrap_or_default())
    }

    /// POST `body` as JSON. On failure the response's `detail` string becomes
    /// the error message when present.
    pub async fn write_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = HttpRequest { method: Method::Post, url: self.url(path), body: Some(body) };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("[API] POST {} -> {}", path, response.status);
            return Err(ApiError::Status {
                status: response.status,
                message: error_detail(&response.body),
            });
        }
        parse_body(path, &response.body)
    }
}

fn parse_body(path: &str, body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn decode<R: DeserializeOwned>(path: &str, value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// `detail` from an error body, or the generic message.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => Some(detail.clone()),
            _ => None,
        })
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}
