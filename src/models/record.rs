// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw record types as returned by the health record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record categories the store can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    BirthDate,
    Workout,
    RestingHeartRate,
    StepCount,
    SleepAnalysis,
}

impl RecordType {
    /// Wire name used in store URLs and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::BirthDate => "birth_date",
            RecordType::Workout => "workout",
            RecordType::RestingHeartRate => "resting_heart_rate",
            RecordType::StepCount => "step_count",
            RecordType::SleepAnalysis => "sleep_analysis",
        }
    }
}

/// Workout activity kinds known to the store.
///
/// The store's enumeration is wider than what the summary view labels;
/// anything it sends that we do not model deserializes as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Cycling,
    Swimming,
    Hiking,
    Walking,
    Rowing,
    Yoga,
    StrengthTraining,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Display label for the summary view.
    ///
    /// Only the five activity kinds the view calls out by name get their
    /// own label; every other kind renders as "Other".
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Hiking => "Hiking",
            ActivityKind::Walking => "Walking",
            _ => "Other",
        }
    }
}

/// A single timestamped quantity measurement (e.g. one heart-rate reading).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantitySample {
    /// When the sample was recorded
    pub recorded_at: DateTime<Utc>,
    /// Measured value in the record type's canonical unit
    /// (beats per minute for heart rate, count for steps)
    pub value: f64,
}

/// A single workout record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Workout start
    pub start: DateTime<Utc>,
    /// Workout end
    pub end: DateTime<Utc>,
    /// Activity kind
    pub activity: ActivityKind,
}

/// One daily statistics bucket: a cumulative sum over a 1-day interval.
///
/// The store only returns buckets that had at least one underlying
/// sample; days with no data are absent rather than zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsBucket {
    /// Start of the 1-day bucket
    pub bucket_start: DateTime<Utc>,
    /// Sum of all sample values inside the bucket
    pub sum: f64,
}
