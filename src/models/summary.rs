// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-ready records served to the summary view.
//!
//! Each fetch cycle builds a fresh `HealthSummary` that fully replaces
//! whatever the view showed before; nothing here is mutated in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The most recent workout, already rendered for display.
///
/// Either all four fields are present (as a whole struct) or the
/// workout section is absent; the aggregator never produces a partial
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    /// Start day, e.g. "10. Jan 2024"
    pub start_date: String,
    /// Start clock time, e.g. "09:00"
    pub start_time: String,
    /// Human duration, e.g. "1 hour(s) 35 minute(s)"
    pub duration: String,
    /// Activity label ("Running", ..., or "Other")
    pub activity: String,
}

/// One resting heart-rate reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HeartRateSample {
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
    /// Beats per minute, truncated to an integer
    pub bpm: i64,
}

/// Steps summed over one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StepCountSample {
    /// Start of the day bucket
    pub day: DateTime<Utc>,
    /// Total steps that day
    pub steps: f64,
}

/// Complete summary for one fetch cycle.
///
/// Empty sections mean "no data" — by design the view cannot tell a
/// failed query apart from a genuinely empty record set.
///
/// Heart-rate and step-count lists keep the order the store returned
/// them in; this layer does not re-sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthSummary {
    /// Date of birth, if the store has one on record
    pub date_of_birth: Option<NaiveDate>,
    /// Most recent workout across all time
    pub last_workout: Option<WorkoutSummary>,
    /// Resting heart-rate readings inside the query window
    pub resting_heart_rate: Vec<HeartRateSample>,
    /// Daily step totals inside the query window (days without data absent)
    pub step_counts: Vec<StepCountSample>,
}
