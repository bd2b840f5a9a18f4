// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for query windows and display date/time formatting.

use chrono::{DateTime, Duration, Utc};

/// Compute a trailing query window of `days` ending now.
///
/// Returns `(start, end)` with `end = now` and `start = end - days`.
/// Window membership is end-exclusive: a sample exactly at `end` falls
/// outside the window, one exactly at `start` falls inside.
pub fn trailing_window(days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = Utc::now();
    (end - Duration::days(days), end)
}

/// True if `t` lies within `[start, end)`.
pub fn in_window(t: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    t >= start && t < end
}

/// Format a timestamp for the summary view, e.g. `"10. Jan 2024"`.
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format("%d. %b %Y").to_string()
}

/// Format a timestamp's clock time for the summary view, e.g. `"09:00"`.
pub fn format_display_time(date: DateTime<Utc>) -> String {
    date.format("%H:%M").to_string()
}
