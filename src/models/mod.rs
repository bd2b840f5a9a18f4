// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod record;
pub mod summary;

pub use record::{ActivityKind, QuantitySample, RecordType, StatisticsBucket, WorkoutRecord};
pub use summary::{HealthSummary, HeartRateSample, StepCountSample, WorkoutSummary};
