// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod authorization;

pub use aggregator::RecordAggregator;
pub use authorization::{AuthorizationGate, READ_TYPES};
