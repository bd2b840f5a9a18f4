// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory record store for tests and offline development.
//!
//! Holds canned records and answers queries with the same window and
//! bucketing semantics the real store promises: end-exclusive windows,
//! 1-day cumulative-sum buckets anchored at the window start, empty
//! buckets omitted. A query counter lets tests assert that no record
//! query was issued when authorization fell through.

use crate::error::AppError;
use crate::models::{QuantitySample, RecordType, StatisticsBucket, WorkoutRecord};
use crate::store::{RecordStore, SampleSort};
use crate::time_utils::in_window;
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How the store answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreMode {
    /// Answer from the canned records.
    Healthy,
    /// Every call fails with `ServiceUnavailable`.
    Unavailable,
    /// Authorization succeeds, every record query fails.
    Failing,
}

/// In-memory record store.
pub struct MemoryRecordStore {
    mode: StoreMode,
    grant_access: bool,
    date_of_birth: Option<NaiveDate>,
    workouts: Vec<WorkoutRecord>,
    heart_rate: Vec<QuantitySample>,
    steps: Vec<QuantitySample>,
    record_queries: AtomicUsize,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    /// Create an empty store that grants read access.
    pub fn new() -> Self {
        Self {
            mode: StoreMode::Healthy,
            grant_access: true,
            date_of_birth: None,
            workouts: Vec::new(),
            heart_rate: Vec::new(),
            steps: Vec::new(),
            record_queries: AtomicUsize::new(0),
        }
    }

    /// Make every call fail as if the store were unreachable.
    pub fn unavailable(mut self) -> Self {
        self.mode = StoreMode::Unavailable;
        self
    }

    /// Keep authorization working but fail every record query.
    pub fn failing(mut self) -> Self {
        self.mode = StoreMode::Failing;
        self
    }

    /// Decline the authorization request.
    pub fn deny_access(mut self) -> Self {
        self.grant_access = false;
        self
    }

    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    pub fn with_workout(mut self, workout: WorkoutRecord) -> Self {
        self.workouts.push(workout);
        self
    }

    pub fn with_heart_rate_sample(mut self, sample: QuantitySample) -> Self {
        self.heart_rate.push(sample);
        self
    }

    pub fn with_step_sample(mut self, sample: QuantitySample) -> Self {
        self.steps.push(sample);
        self
    }

    /// Number of record queries issued so far (authorization excluded).
    pub fn record_queries(&self) -> usize {
        self.record_queries.load(Ordering::SeqCst)
    }

    fn check_mode(&self) -> Result<(), AppError> {
        match self.mode {
            StoreMode::Healthy => Ok(()),
            StoreMode::Unavailable => Err(AppError::ServiceUnavailable),
            StoreMode::Failing => Err(AppError::QueryFailed("canned failure".to_string())),
        }
    }

    fn quantity_records(&self, record_type: RecordType) -> &[QuantitySample] {
        match record_type {
            RecordType::RestingHeartRate => &self.heart_rate,
            RecordType::StepCount => &self.steps,
            _ => &[],
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn request_authorization(&self, _read_types: &[RecordType]) -> Result<bool, AppError> {
        if self.mode == StoreMode::Unavailable {
            return Err(AppError::ServiceUnavailable);
        }
        Ok(self.grant_access)
    }

    async fn characteristic_date(
        &self,
        record_type: RecordType,
    ) -> Result<Option<NaiveDate>, AppError> {
        self.record_queries.fetch_add(1, Ordering::SeqCst);
        self.check_mode()?;

        match record_type {
            RecordType::BirthDate => Ok(self.date_of_birth),
            _ => Ok(None),
        }
    }

    async fn workouts(
        &self,
        sort: SampleSort,
        limit: usize,
    ) -> Result<Vec<WorkoutRecord>, AppError> {
        self.record_queries.fetch_add(1, Ordering::SeqCst);
        self.check_mode()?;

        let mut workouts = self.workouts.clone();
        match sort {
            SampleSort::StartDateAsc => workouts.sort_by_key(|w| w.start),
            SampleSort::StartDateDesc => workouts.sort_by_key(|w| std::cmp::Reverse(w.start)),
        }
        workouts.truncate(limit);
        Ok(workouts)
    }

    async fn samples(
        &self,
        record_type: RecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<QuantitySample>, AppError> {
        self.record_queries.fetch_add(1, Ordering::SeqCst);
        self.check_mode()?;

        Ok(self
            .quantity_records(record_type)
            .iter()
            .filter(|s| in_window(s.recorded_at, start, end))
            .cloned()
            .collect())
    }

    async fn daily_statistics(
        &self,
        record_type: RecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StatisticsBucket>, AppError> {
        self.record_queries.fetch_add(1, Ordering::SeqCst);
        self.check_mode()?;

        Ok(bucket_daily(self.quantity_records(record_type), start, end))
    }
}

/// Sum samples into 1-day buckets anchored at `start`.
///
/// Only samples inside `[start, end)` contribute; days that collect no
/// samples do not appear in the output at all.
pub fn bucket_daily(
    samples: &[QuantitySample],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<StatisticsBucket> {
    let mut sums: BTreeMap<i64, f64> = BTreeMap::new();

    for sample in samples {
        if !in_window(sample.recorded_at, start, end) {
            continue;
        }
        let day = (sample.recorded_at - start).num_seconds() / 86_400;
        *sums.entry(day).or_insert(0.0) += sample.value;
    }

    sums.into_iter()
        .map(|(day, sum)| StatisticsBucket {
            bucket_start: start + Duration::days(day),
            sum,
        })
        .collect()
}
