// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Health-Glance: a read-only "health at a glance" summary API
//!
//! This crate fetches a handful of record categories (date of birth,
//! most recent workout, resting heart rate, daily step counts) from an
//! external health record store and serves them as display-ready
//! records for the summary view.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{AuthorizationGate, RecordAggregator};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub gate: AuthorizationGate,
    pub aggregator: RecordAggregator,
}
