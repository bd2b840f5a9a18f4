// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record aggregation service.
//!
//! Handles the core fetch cycle:
//! 1. Issue the four record queries (independent, concurrent)
//! 2. Normalize raw store records into display-ready ones
//! 3. Assemble a fresh `HealthSummary`
//!
//! Every query is fail-soft: a store failure is logged and reported as
//! "no data", never as an error the view could distinguish. Heart-rate
//! and step-count lists keep the store's return order; this layer does
//! not re-sort them.

use crate::models::{
    HealthSummary, HeartRateSample, RecordType, StepCountSample, WorkoutRecord, WorkoutSummary,
};
use crate::store::{RecordStore, SampleSort};
use crate::time_utils::{format_display_date, format_display_time};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

/// Fetches raw records from the store and normalizes them for display.
pub struct RecordAggregator {
    store: Arc<dyn RecordStore>,
}

impl RecordAggregator {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Run one full fetch cycle over `[start, end)`.
    ///
    /// The four queries have no ordering dependency and run
    /// concurrently; each completes (or fails soft) on its own.
    pub async fn fetch_summary(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> HealthSummary {
        let (date_of_birth, last_workout, resting_heart_rate, step_counts) = tokio::join!(
            self.fetch_date_of_birth(),
            self.fetch_last_workout(),
            self.fetch_resting_heart_rate(start, end),
            self.fetch_step_counts(start, end),
        );

        HealthSummary {
            date_of_birth,
            last_workout,
            resting_heart_rate,
            step_counts,
        }
    }

    /// Fetch the date of birth characteristic.
    pub async fn fetch_date_of_birth(&self) -> Option<NaiveDate> {
        match self.store.characteristic_date(RecordType::BirthDate).await {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(error = %e, "Date of birth query failed");
                None
            }
        }
    }

    /// Fetch the most recent workout, rendered for display.
    ///
    /// Returns a complete summary or nothing at all; the four display
    /// fields are never partially present.
    pub async fn fetch_last_workout(&self) -> Option<WorkoutSummary> {
        let workouts = match self.store.workouts(SampleSort::StartDateDesc, 1).await {
            Ok(workouts) => workouts,
            Err(e) => {
                tracing::warn!(error = %e, "Workout query failed");
                return None;
            }
        };

        workouts.first().map(render_workout)
    }

    /// Fetch resting heart-rate readings inside `[start, end)`.
    pub async fn fetch_resting_heart_rate(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<HeartRateSample> {
        match self
            .store
            .samples(RecordType::RestingHeartRate, start, end)
            .await
        {
            Ok(samples) => samples
                .into_iter()
                .map(|s| HeartRateSample {
                    recorded_at: s.recorded_at,
                    // beats per minute, truncated
                    bpm: s.value as i64,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Resting heart rate query failed");
                Vec::new()
            }
        }
    }

    /// Fetch daily step totals inside `[start, end)`.
    pub async fn fetch_step_counts(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<StepCountSample> {
        match self
            .store
            .daily_statistics(RecordType::StepCount, start, end)
            .await
        {
            Ok(buckets) => buckets
                .into_iter()
                .map(|b| StepCountSample {
                    day: b.bucket_start,
                    steps: b.sum,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Step count query failed");
                Vec::new()
            }
        }
    }
}

/// Render one raw workout record for display.
fn render_workout(workout: &WorkoutRecord) -> WorkoutSummary {
    let duration_secs = (workout.end - workout.start).num_seconds();

    WorkoutSummary {
        start_date: format_display_date(workout.start),
        start_time: format_display_time(workout.start),
        duration: format_duration(duration_secs),
        activity: workout.activity.label().to_string(),
    }
}

/// Bucket whole seconds into an "H hour(s) M minute(s)" string.
///
/// A zero-valued hour clause is omitted entirely; "0 hour(s)" is never
/// emitted.
fn format_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{} hour(s) {} minute(s)", hours, minutes)
        } else {
            format!("{} hour(s)", hours)
        }
    } else {
        format!("{} minute(s)", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;
    use crate::store::MemoryRecordStore;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(95 * 60), "1 hour(s) 35 minute(s)");
        assert_eq!(format_duration(2 * 3600), "2 hour(s)");
        assert_eq!(format_duration(5 * 60), "5 minute(s)");
    }

    #[test]
    fn test_format_duration_never_emits_zero_hours() {
        for minutes in 1..60 {
            let rendered = format_duration(minutes * 60);
            assert!(
                !rendered.starts_with("0 hour"),
                "zero-valued leading unit in {:?}",
                rendered
            );
        }
    }

    #[test]
    fn test_format_duration_sub_minute() {
        assert_eq!(format_duration(42), "0 minute(s)");
    }

    #[test]
    fn test_render_workout() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let workout = WorkoutRecord {
            start,
            end: start + Duration::minutes(95),
            activity: ActivityKind::Running,
        };

        let summary = render_workout(&workout);

        assert_eq!(summary.start_date, "10. Jan 2024");
        assert_eq!(summary.start_time, "09:00");
        assert_eq!(summary.duration, "1 hour(s) 35 minute(s)");
        assert_eq!(summary.activity, "Running");
    }

    #[tokio::test]
    async fn test_heart_rate_bpm_truncated() {
        let start = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let end = start + Duration::days(7);

        let store = MemoryRecordStore::new().with_heart_rate_sample(crate::models::QuantitySample {
            recorded_at: start + Duration::days(1),
            value: 61.9,
        });
        let aggregator = RecordAggregator::new(Arc::new(store));

        let samples = aggregator.fetch_resting_heart_rate(start, end).await;

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].bpm, 61);
    }

    #[tokio::test]
    async fn test_each_operation_fails_soft() {
        let start = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let end = start + Duration::days(7);

        let aggregator = RecordAggregator::new(Arc::new(MemoryRecordStore::new().failing()));

        assert_eq!(aggregator.fetch_date_of_birth().await, None);
        assert_eq!(aggregator.fetch_last_workout().await, None);
        assert!(aggregator.fetch_resting_heart_rate(start, end).await.is_empty());
        assert!(aggregator.fetch_step_counts(start, end).await.is_empty());
    }
}
