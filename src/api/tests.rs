//! API Client Tests
//!
//! Runs the client, loaders and form flow against an in-memory backend.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde_json::{json, Value};

    use crate::api::{self, ApiClient, HttpRequest, HttpResponse, Method, Transport};
    use crate::error::ApiError;
    use crate::form::{FormKind, FormState};
    use crate::inventory;
    use crate::models::{InventoryItem, MenuItem, PurchaseRequest};
    use crate::reports::{self, ReportWindow};
    use crate::view_state::{Settled, ViewState};

    const BASE: &str = "http://stub.local";

    /// Tiny stand-in for the inventory server.
    struct StubBackend {
        inventory: RefCell<Vec<InventoryItem>>,
        menu: Vec<MenuItem>,
        overrides: RefCell<HashMap<String, HttpResponse>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl StubBackend {
        fn new() -> Self {
            Self {
                inventory: RefCell::new(vec![
                    InventoryItem { id: 1, name: "Basmati Rice".into(), unit: "kg".into(), current_stock: 20.0, reorder_level: 5.0 },
                    InventoryItem { id: 2, name: "Salt".into(), unit: "kg".into(), current_stock: 1.0, reorder_level: 2.0 },
                ]),
                menu: vec![
                    MenuItem { id: 10, name: "Veg Biryani".into() },
                    MenuItem { id: 11, name: "Masala Chai".into() },
                ],
                overrides: RefCell::new(HashMap::new()),
                requests: RefCell::new(Vec::new()),
            }
        }

        /// Answer `path` with a fixed response from now on.
        fn respond_with(&self, path: &str, status: u16, body: &str) {
            self.overrides
                .borrow_mut()
                .insert(path.to_string(), HttpResponse { status, body: body.to_string() });
        }

        fn request_paths(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|r| r.url.trim_start_matches(BASE).to_string())
                .collect()
        }

        fn stock_of(&self, id: u32) -> f64 {
            self.inventory.borrow().iter().find(|i| i.id == id).map(|i| i.current_stock).unwrap()
        }

        fn ok(body: Value) -> HttpResponse {
            HttpResponse { status: 200, body: body.to_string() }
        }

        fn not_found(detail: &str) -> HttpResponse {
            HttpResponse { status: 404, body: json!({ "detail": detail }).to_string() }
        }

        fn route(&self, method: Method, path: &str, body: Option<Value>) -> HttpResponse {
            let (route, days) = match path.split_once("?days=") {
                Some((route, days)) => (route, days.parse::<f64>().unwrap_or(0.0)),
                None => (path, 0.0),
            };
            match (method, route) {
                (Method::Get, "/inventory") => Self::ok(serde_json::to_value(&*self.inventory.borrow()).unwrap()),
                (Method::Get, "/alerts/low-stock") => {
                    let low: Vec<Value> = self
                        .inventory
                        .borrow()
                        .iter()
                        .filter(|i| i.current_stock <= i.reorder_level)
                        .map(|i| json!({ "id": i.id, "name": i.name }))
                        .collect();
                    Self::ok(json!({ "items": low }))
                }
                (Method::Get, "/menu") => Self::ok(json!(self.menu)),
                (Method::Post, "/purchase") => {
                    let body = body.unwrap_or_default();
                    let id = body["inventory_item_id"].as_u64().unwrap_or(0) as u32;
                    let quantity = body["quantity"].as_f64().unwrap_or(0.0);
                    let mut inventory = self.inventory.borrow_mut();
                    match inventory.iter_mut().find(|i| i.id == id) {
                        Some(item) => {
                            item.current_stock += quantity;
                            Self::ok(json!({ "message": "Stock updated" }))
                        }
                        None => Self::not_found("Inventory item not found"),
                    }
                }
                (Method::Post, "/sales") => {
                    let body = body.unwrap_or_default();
                    let id = body["menu_item_id"].as_u64().unwrap_or(0) as u32;
                    if self.menu.iter().any(|m| m.id == id) {
                        Self::ok(json!({ "message": "Sale recorded" }))
                    } else {
                        Self::not_found("Menu item not found")
                    }
                }
                (Method::Get, "/reports/ingredient-usage") => {
                    Self::ok(json!([{ "ingredient": "Rice", "used_quantity": days }]))
                }
                (Method::Get, "/reports/sales-summary") => Self::ok(json!([
                    { "menu_item": "Veg Biryani", "quantity_sold": days, "revenue": days * 120.0 },
                    { "menu_item": "Masala Chai", "quantity_sold": null }
                ])),
                (Method::Get, "/reports/purchase-summary") => {
                    Self::ok(json!([{ "ingredient": "Rice", "purchased_quantity": days * 2.0 }]))
                }
                _ => HttpResponse { status: 404, body: String::new() },
            }
        }
    }

    impl Transport for StubBackend {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request.clone());
            let path = request.url.trim_start_matches(BASE).to_string();
            if let Some(response) = self.overrides.borrow().get(&path) {
                return Ok(response.clone());
            }
            let body = request.body.as_deref().map(|b| serde_json::from_str(b).unwrap());
            Ok(self.route(request.method, &path, body))
        }
    }

    fn client() -> ApiClient<StubBackend> {
        ApiClient::new(BASE, StubBackend::new())
    }

    /// What the form component does on submit.
    async fn submit(api: &ApiClient<StubBackend>, form: &mut FormState) {
        if let Some(submission) = form.begin_submit() {
            let outcome = form.kind.send(api, submission).await;
            form.finish_submit(outcome);
        }
    }

    // ========================
    // Client normalization
    // ========================

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = ApiClient::new("http://stub.local/", StubBackend::new());
        assert_eq!(api.base(), BASE);
    }

    #[tokio::test]
    async fn test_read_failure_uses_generic_message() {
        let api = client();
        api.transport().respond_with("/inventory", 500, r#"{"detail":"db down"}"#);

        let err = api::list_inventory(&api).await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: "API error".into() });
    }

    #[tokio::test]
    async fn test_write_failure_uses_detail() {
        let api = client();
        let request = PurchaseRequest { inventory_item_id: 99, quantity: 1.0 };

        let err = api::record_purchase(&api, &request).await.unwrap_err();
        assert_eq!(err.user_message(), "Inventory item not found");
    }

    #[tokio::test]
    async fn test_write_failure_without_detail_is_generic() {
        let api = client();
        api.transport().respond_with("/sales", 500, "<html>Internal Server Error</html>");
        let err = api.write_json("/sales", &json!({})).await.unwrap_err();
        assert_eq!(err.user_message(), "API error");

        api.transport().respond_with("/sales", 422, r#"{"detail":""}"#);
        let err = api.write_json("/sales", &json!({})).await.unwrap_err();
        assert_eq!(err.user_message(), "API error");

        // Structured (non-string) detail is not shown either
        api.transport().respond_with("/sales", 422, r#"{"detail":[{"loc":["body"]}]}"#);
        let err = api.write_json("/sales", &json!({})).await.unwrap_err();
        assert_eq!(err.user_message(), "API error");
    }

    #[tokio::test]
    async fn test_write_sends_json_with_backend_keys() {
        let api = client();
        let request = PurchaseRequest { inventory_item_id: 1, quantity: 3.0 };
        api::record_purchase(&api, &request).await.unwrap();

        let sent = api.transport().requests.borrow()[0].clone();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://stub.local/purchase");
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "inventory_item_id": 1, "quantity": 3 }));
        assert_eq!(sent.body.as_deref(), Some(r#"{"inventory_item_id":1,"quantity":3}"#));
    }

    #[tokio::test]
    async fn test_null_list_is_empty() {
        let api = client();
        api.transport().respond_with("/menu", 200, "null");
        assert!(api::list_menu(&api).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_decode_error() {
        let api = client();
        api.transport().respond_with("/inventory", 200, r#"[{"id":"one"}]"#);
        let err = api::list_inventory(&api).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "/inventory"));
    }

    #[tokio::test]
    async fn test_low_stock_null_body() {
        let api = client();
        api.transport().respond_with("/alerts/low-stock", 200, "");
        assert_eq!(api::low_stock_ids(&api).await.unwrap().len(), 0);
    }

    // ========================
    // Page loads
    // ========================

    #[tokio::test]
    async fn test_inventory_snapshot_reads_in_order() {
        let api = client();
        let snapshot = inventory::load_snapshot(&api).await.unwrap();

        assert_eq!(api.transport().request_paths(), vec!["/inventory", "/alerts/low-stock"]);
        assert_eq!(snapshot.items.len(), 2);
        assert!(snapshot.low_stock.contains(2));
        assert!(!snapshot.low_stock.contains(1));
    }

    #[tokio::test]
    async fn test_inventory_alert_failure_keeps_previous_view() {
        let api = client();
        let mut state = ViewState::new("Inventory", Default::default());

        let ticket = state.begin();
        state.settle(ticket, inventory::load_snapshot(&api).await);
        let before = state.data().clone();

        api.transport().respond_with("/alerts/low-stock", 503, "");
        let ticket = state.begin();
        let settled = state.settle(ticket, inventory::load_snapshot(&api).await);

        assert_eq!(settled, Settled::Failed);
        assert_eq!(state.data(), &before);
    }

    #[tokio::test]
    async fn test_window_change_replaces_all_three_series() {
        let api = client();
        let mut state = ViewState::new("Reports", Default::default());

        for window in [ReportWindow::Week, ReportWindow::Month, ReportWindow::Quarter] {
            api.transport().requests.borrow_mut().clear();
            let ticket = state.begin();
            state.settle(ticket, reports::load_snapshot(&api, window).await);

            let days = window.days();
            assert_eq!(
                api.transport().request_paths(),
                vec![
                    format!("/reports/ingredient-usage?days={}", days),
                    format!("/reports/sales-summary?days={}", days),
                    format!("/reports/purchase-summary?days={}", days),
                ]
            );

            let snapshot: &reports::ReportSnapshot = state.data();
            let days = f64::from(days);
            assert_eq!(snapshot.usage.len(), 1);
            assert_eq!(snapshot.usage[0].used_quantity(), days);
            assert_eq!(snapshot.sales.len(), 2);
            assert_eq!(snapshot.sales[0].quantity_sold(), days);
            assert_eq!(snapshot.sales[1].quantity_sold(), 0.0);
            assert_eq!(snapshot.purchases[0].purchased_quantity(), days * 2.0);
        }
    }

    // ========================
    // Forms
    // ========================

    #[tokio::test]
    async fn test_invalid_form_never_hits_network() {
        let api = client();

        let mut form = FormState::new(FormKind::Sale);
        submit(&api, &mut form).await;
        assert_eq!(form.error.as_deref(), Some("Select item and valid quantity"));

        let mut form = FormState::new(FormKind::Purchase);
        form.selection = Some(1);
        form.quantity = 0.0;
        submit(&api, &mut form).await;
        assert!(form.error.is_some());

        assert!(api.transport().requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_sale_failure_keeps_input() {
        let api = client();
        let mut form = FormState::new(FormKind::Sale);
        form.selection = Some(404);
        form.quantity = 2.0;

        submit(&api, &mut form).await;
        assert_eq!(form.error.as_deref(), Some("Menu item not found"));
        assert_eq!(form.selection, Some(404));
        assert_eq!(form.quantity, 2.0);
        assert!(!form.submitting);
    }

    #[tokio::test]
    async fn test_sale_success_resets_input() {
        let api = client();
        let mut form = FormState::new(FormKind::Sale);
        form.selection = Some(10);
        form.quantity = 2.0;

        submit(&api, &mut form).await;
        assert_eq!(form.message.as_deref(), Some("✅ Sale recorded successfully"));
        assert_eq!(form.selection, None);
        assert_eq!(form.quantity, 1.0);

        let body = api.transport().requests.borrow()[0].body.clone().unwrap();
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "menu_item_id": 10, "quantity": 2 }));
    }

    #[tokio::test]
    async fn test_choice_labels() {
        let api = client();
        let purchase = FormKind::Purchase.load_choices(&api).await.unwrap();
        assert_eq!(purchase[0].label, "Basmati Rice (kg)");

        let sale = FormKind::Sale.load_choices(&api).await.unwrap();
        assert_eq!(sale[1].label, "Masala Chai");
    }

    #[tokio::test]
    async fn test_choice_load_failure_is_standing_error() {
        let api = client();
        api.transport().respond_with("/inventory", 500, "");
        let mut form = FormState::new(FormKind::Purchase);
        form.choices_loaded(FormKind::Purchase.load_choices(&api).await);
        assert_eq!(form.load_error.as_deref(), Some("Failed to load inventory"));

        // Quantity stays editable and validation still runs locally
        form.quantity = 4.0;
        submit(&api, &mut form).await;
        assert_eq!(form.error.as_deref(), Some("Select item and valid quantity"));
        assert_eq!(form.load_error.as_deref(), Some("Failed to load inventory"));
    }

    #[tokio::test]
    async fn test_purchase_round_trip_increases_stock() {
        let api = client();
        let before = inventory::load_snapshot(&api).await.unwrap();
        let stock_before = before.items.iter().find(|i| i.id == 2).unwrap().current_stock;
        assert!(before.low_stock.contains(2));

        let mut form = FormState::new(FormKind::Purchase);
        form.selection = Some(2);
        form.quantity = 5.0;
        submit(&api, &mut form).await;
        assert_eq!(form.message.as_deref(), Some("✅ Stock added successfully"));

        let after = inventory::load_snapshot(&api).await.unwrap();
        let stock_after = after.items.iter().find(|i| i.id == 2).unwrap().current_stock;
        assert_eq!(stock_after, stock_before + 5.0);
        assert_eq!(api.transport().stock_of(2), 6.0);
        assert!(!after.low_stock.contains(2));
    }
}
