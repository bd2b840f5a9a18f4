// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, StatusCode};
use health_glance::config::Config;
use health_glance::routes::create_router;
use health_glance::services::{AuthorizationGate, RecordAggregator};
use health_glance::store::MemoryRecordStore;
use health_glance::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over the given in-memory store.
/// Returns the router and the store handle for query-count assertions.
#[allow(dead_code)]
pub fn create_test_app(store: MemoryRecordStore) -> (axum::Router, Arc<MemoryRecordStore>) {
    let store = Arc::new(store);

    let state = Arc::new(AppState {
        config: Config::test_default(),
        gate: AuthorizationGate::new(store.clone()),
        aggregator: RecordAggregator::new(store.clone()),
    });

    (create_router(state), store)
}

/// GET a path and return the status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();

    (status, json)
}
