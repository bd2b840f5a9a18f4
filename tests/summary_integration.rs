// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end fetch cycle tests against the in-memory record store.

use chrono::{Duration, TimeZone, Utc};
use health_glance::models::{ActivityKind, QuantitySample, WorkoutRecord};
use health_glance::store::MemoryRecordStore;

mod common;

#[tokio::test]
async fn test_summary_renders_last_workout() {
    let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 10, 10, 35, 0).unwrap();

    let store = MemoryRecordStore::new()
        .with_date_of_birth(chrono::NaiveDate::from_ymd_opt(1990, 4, 2).unwrap())
        .with_workout(WorkoutRecord {
            start,
            end,
            activity: ActivityKind::Running,
        });
    let (app, _) = common::create_test_app(store);

    let (status, body) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    assert_eq!(body["date_of_birth"], "1990-04-02");

    let workout = &body["last_workout"];
    assert_eq!(workout["start_date"], "10. Jan 2024");
    assert_eq!(workout["start_time"], "09:00");
    assert_eq!(workout["duration"], "1 hour(s) 35 minute(s)");
    assert_eq!(workout["activity"], "Running");
}

#[tokio::test]
async fn test_summary_picks_most_recent_workout() {
    let old_start = Utc.with_ymd_and_hms(2024, 1, 3, 7, 0, 0).unwrap();
    let new_start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();

    let store = MemoryRecordStore::new()
        .with_workout(WorkoutRecord {
            start: old_start,
            end: old_start + Duration::minutes(30),
            activity: ActivityKind::Cycling,
        })
        .with_workout(WorkoutRecord {
            start: new_start,
            end: new_start + Duration::minutes(45),
            activity: ActivityKind::Rowing,
        });
    let (app, _) = common::create_test_app(store);

    let (status, body) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    assert_eq!(body["last_workout"]["start_date"], "10. Jan 2024");
    // Rowing is not one of the named activities
    assert_eq!(body["last_workout"]["activity"], "Other");
}

#[tokio::test]
async fn test_summary_without_workouts_has_whole_section_absent() {
    let (app, _) = common::create_test_app(MemoryRecordStore::new());

    let (status, body) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    // All four workout fields absent together, never a partial record
    assert!(body["last_workout"].is_null());
    assert!(body["date_of_birth"].is_null());
    assert_eq!(body["resting_heart_rate"].as_array().unwrap().len(), 0);
    assert_eq!(body["step_counts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_summary_heart_rate_within_trailing_window() {
    let now = Utc::now();

    let store = MemoryRecordStore::new()
        .with_heart_rate_sample(QuantitySample {
            recorded_at: now - Duration::days(2),
            value: 58.7,
        })
        // Outside the 7-day window entirely
        .with_heart_rate_sample(QuantitySample {
            recorded_at: now - Duration::days(30),
            value: 72.0,
        });
    let (app, _) = common::create_test_app(store);

    let (status, body) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    let samples = body["resting_heart_rate"].as_array().unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0]["bpm"], 58);
}

#[tokio::test]
async fn test_summary_step_days_without_data_are_absent() {
    let now = Utc::now();

    // Steps on two days out of the last seven; the days in between must
    // not show up as zero-valued buckets.
    // Offsets sit mid-bucket so the request-time window anchor cannot
    // shift them across a bucket edge.
    let store = MemoryRecordStore::new()
        .with_step_sample(QuantitySample {
            recorded_at: now - Duration::days(6) + Duration::hours(10),
            value: 1200.0,
        })
        .with_step_sample(QuantitySample {
            recorded_at: now - Duration::days(6) + Duration::hours(12),
            value: 800.0,
        })
        .with_step_sample(QuantitySample {
            recorded_at: now - Duration::days(1) + Duration::hours(6),
            value: 5000.0,
        });
    let (app, _) = common::create_test_app(store);

    let (status, body) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    let buckets = body["step_counts"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0]["steps"], 2000.0);
    assert_eq!(buckets[1]["steps"], 5000.0);
}

#[tokio::test]
async fn test_unavailable_store_issues_no_record_queries() {
    let (app, store) = common::create_test_app(MemoryRecordStore::new().unavailable());

    let (status, body) = common::get_json(app, "/api/summary").await;

    // Authorization resolves false and the cycle stops there
    assert_eq!(status, 200);
    assert!(body["last_workout"].is_null());
    assert_eq!(store.record_queries(), 0);
}

#[tokio::test]
async fn test_declined_access_issues_no_record_queries() {
    let (app, store) = common::create_test_app(MemoryRecordStore::new().deny_access());

    let (status, body) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    assert!(body["date_of_birth"].is_null());
    assert_eq!(store.record_queries(), 0);
}

#[tokio::test]
async fn test_authorized_cycle_issues_all_four_queries() {
    let (app, store) = common::create_test_app(MemoryRecordStore::new());

    let (status, _) = common::get_json(app, "/api/summary").await;

    assert_eq!(status, 200);
    assert_eq!(store.record_queries(), 4);
}

#[tokio::test]
async fn test_repeated_cycles_replace_rather_than_append() {
    let now = Utc::now();

    let store = MemoryRecordStore::new().with_heart_rate_sample(QuantitySample {
        recorded_at: now - Duration::days(1),
        value: 60.0,
    });
    let (app, _) = common::create_test_app(store);

    let (_, first) = common::get_json(app.clone(), "/api/summary").await;
    let (_, second) = common::get_json(app, "/api/summary").await;

    // Two view appearances, same single sample both times
    assert_eq!(first["resting_heart_rate"].as_array().unwrap().len(), 1);
    assert_eq!(second["resting_heart_rate"].as_array().unwrap().len(), 1);
}
