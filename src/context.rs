//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Client for the inventory backend
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(&config.api_base, Default::default()),
        }
    }
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<AppContext>().api
}
