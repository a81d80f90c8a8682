//! Page Routes
//!
//! The four dashboard pages, mirrored into the URL hash so a reload stays
//! on the same page.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Inventory,
    Sales,
    Purchase,
    Reports,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Inventory, Route::Sales, Route::Purchase, Route::Reports];

    pub fn label(self) -> &'static str {
        match self {
            Route::Inventory => "Inventory",
            Route::Sales => "Sales",
            Route::Purchase => "Purchase",
            Route::Reports => "Reports",
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Route::Inventory => "#/",
            Route::Sales => "#/sales",
            Route::Purchase => "#/purchase",
            Route::Reports => "#/reports",
        }
    }

    /// Unknown hashes land on the inventory page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "/sales" => Route::Sales,
            "/purchase" => Route::Purchase,
            "/reports" => Route::Reports,
            _ => Route::Inventory,
        }
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Route::from_hash(&h))
        .unwrap_or_default()
}

pub fn push_route(route: Route) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_hash(route.hash()) {
        log::warn!("[Route] could not set hash {}: {:?}", route.hash(), e);
    }
}
