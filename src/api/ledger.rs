//! Ledger Endpoints
//!
//! Sales and purchases. The response body is not used beyond success/failure.

use serde_json::Value;

use super::{ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{PurchaseRequest, SaleRequest};

pub async fn record_purchase<T: Transport>(api: &ApiClient<T>, request: &PurchaseRequest) -> Result<Value, ApiError> {
    api.write_json("/purchase", request).await
}

pub async fn record_sale<T: Transport>(api: &ApiClient<T>, request: &SaleRequest) -> Result<Value, ApiError> {
    api.write_json("/sales", request).await
}
