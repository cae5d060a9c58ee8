//! Integration tests for Storedash.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storedash-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_api` - JSON API driven through the router, no network
//! - `view_properties` - Property tests for the view aggregator

#![allow(clippy::missing_panics_doc)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;

use storedash_admin::config::AdminCredentials;
use storedash_admin::state::AppState;
use storedash_admin::store::SnapshotStore;
use storedash_core::{Order, OrderId, OrderStatus};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// A small export covering every document type.
pub const EXPORT: &str = r#"{"_type":"order","_id":"o-1","orderNumber":"ord-100","createdAt":"2024-01-05T10:00:00Z","total":10,"orderStatus":"pending","items":[{"name":"Mango Jam","quantity":2,"price":5}]}
{"_type":"order","_id":"o-2","orderNumber":"ord-200","createdAt":"2024-01-20T10:00:00Z","total":15,"orderStatus":"shipped","items":[{"name":"Lime Soda","quantity":3,"price":5}]}
{"_type":"order","_id":"o-3","orderNumber":"ord-300","createdAt":"2024-02-02T10:00:00Z","total":7.25,"orderStatus":"completed"}
{"_type":"order","_id":"o-4","orderNumber":"ord-400","createdAt":"2024-02-03T10:00:00Z","total":3,"orderStatus":null}
{"_type":"shopProduct","_id":"p-1","name":"Mango Jam","price":7.5,"stockLevel":3,"_createdAt":"2024-01-01T00:00:00Z","category":{"title":"Pantry"}}
{"_type":"shopProduct","_id":"p-2","title":"Lime Soda","price":2,"stockLevel":10,"_createdAt":"2024-01-02T00:00:00Z","category":"Drinks"}
{"_type":"review","_id":"r-1","productId":"p-1","userName":"Ada","text":"Lovely jam","createdAt":"2024-01-06","rating":5}
{"_type":"review","_id":"r-2","productId":"p-2","userName":"Grace","text":"Too sweet","createdAt":"2024-01-07","rating":2}
{"_type":"sanity.imageAsset","_id":"img-1"}
"#;

/// A router over an in-memory store, plus the store itself.
pub struct TestContext {
    pub app: Router,
    pub store: Arc<SnapshotStore>,
}

impl TestContext {
    /// Build a context from NDJSON export text.
    pub fn from_export(export: &str) -> Self {
        Self::from_store(SnapshotStore::parse(export).expect("test export decodes"))
    }

    /// Build a context over an existing store.
    pub fn from_store(store: SnapshotStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(
            AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD),
            store.clone(),
        );
        Self {
            app: storedash_admin::app(state),
            store,
        }
    }

    /// Send a request and return the status and JSON body (`Null` if empty).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).expect("valid request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::from_export(EXPORT)
    }
}

/// Midday UTC on the given day.
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date")
        .and_utc()
}

/// An order without line items.
pub fn order(number: &str, created_at: DateTime<Utc>, total: f64, status: Option<OrderStatus>) -> Order {
    Order {
        id: OrderId::new(format!("id-{number}")),
        order_number: number.to_string(),
        created_at,
        total,
        items: vec![],
        status,
    }
}
