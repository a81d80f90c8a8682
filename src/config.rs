//! Application Configuration
//!
//! Resolved once at startup. The API base URL can be overridden at deploy
//! time through a `<meta name="inventory-api-base">` tag in `index.html`,
//! otherwise it comes from the build environment.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const API_BASE_META: &str = "meta[name=\"inventory-api-base\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read build-time settings and the page's meta override.
    pub fn load() -> Self {
        Self {
            api_base: resolve_api_base(meta_api_base(), option_env!("INVENTORY_API_BASE")),
            log_level: resolve_log_level(option_env!("INVENTORY_LOG_LEVEL")),
        }
    }
}

/// Runtime value wins over build-time value; blank values are ignored.
pub fn resolve_api_base(runtime: Option<String>, build_time: Option<&str>) -> String {
    runtime
        .as_deref()
        .into_iter()
        .chain(build_time)
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

pub fn resolve_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_BASE_META).ok()??;
    meta.get_attribute("content")
}
