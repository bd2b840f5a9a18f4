// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health-Glance API Server
//!
//! Serves a read-only health summary assembled from an external health
//! record store: date of birth, last workout, resting heart rate and
//! daily step counts over a trailing 7-day window.

use health_glance::{
    config::Config,
    services::{AuthorizationGate, RecordAggregator},
    store::HttpRecordStore,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Health-Glance API");

    // Record store client (consent decisions live store-side)
    let store = Arc::new(HttpRecordStore::new(config.record_store_url.clone()));
    tracing::info!(url = %config.record_store_url, "Record store client initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        gate: AuthorizationGate::new(store.clone()),
        aggregator: RecordAggregator::new(store),
    });

    // Build router
    let app = health_glance::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("health_glance=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
