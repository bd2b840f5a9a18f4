// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store abstraction.
//!
//! The health record store is an external service owned by someone else;
//! everything the aggregator knows about it goes through the
//! [`RecordStore`] trait. The real deployment talks HTTP
//! ([`HttpRecordStore`]); tests run against [`MemoryRecordStore`].

pub mod http;
pub mod memory;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

use crate::error::AppError;
use crate::models::{QuantitySample, RecordType, StatisticsBucket, WorkoutRecord};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Sort order for sample queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSort {
    StartDateAsc,
    StartDateDesc,
}

impl SampleSort {
    /// Wire name used in store query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleSort::StartDateAsc => "start_date_asc",
            SampleSort::StartDateDesc => "start_date_desc",
        }
    }
}

/// Read-only query interface onto the health record store.
///
/// Window parameters are end-exclusive: implementations return samples
/// with `start <= recorded_at < end`.
///
/// The consent decision behind `request_authorization` is owned by the
/// store; this crate never caches it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Request read access to the given record types.
    ///
    /// Resolves `false` when the store is unreachable or the user
    /// declined; `true` otherwise. Repeat calls resolve from the
    /// store's own cached decision.
    async fn request_authorization(&self, read_types: &[RecordType]) -> Result<bool, AppError>;

    /// Read a single characteristic record (e.g. date of birth).
    async fn characteristic_date(
        &self,
        record_type: RecordType,
    ) -> Result<Option<NaiveDate>, AppError>;

    /// Query workout records with a sort order and a result limit.
    async fn workouts(
        &self,
        sort: SampleSort,
        limit: usize,
    ) -> Result<Vec<WorkoutRecord>, AppError>;

    /// Query raw quantity samples inside `[start, end)`, unsorted and
    /// unlimited.
    async fn samples(
        &self,
        record_type: RecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<QuantitySample>, AppError>;

    /// Query cumulative-sum statistics bucketed into 1-day intervals
    /// anchored at `start`. Buckets with no underlying samples are
    /// omitted from the result.
    async fn daily_statistics(
        &self,
        record_type: RecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StatisticsBucket>, AppError>;
}
