// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the health record store API.
//!
//! Handles:
//! - Authorization requests (consent is decided store-side)
//! - Characteristic, sample, workout and daily-statistics queries
//! - Mapping transport and status failures onto the error taxonomy

use crate::error::AppError;
use crate::models::{QuantitySample, RecordType, StatisticsBucket, WorkoutRecord};
use crate::store::{RecordStore, SampleSort};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;

/// HTTP record store client.
#[derive(Clone)]
pub struct HttpRecordStore {
    http: reqwest::Client,
    base_url: String,
}

/// Authorization response from the store.
#[derive(Debug, Deserialize)]
struct AuthorizationResponse {
    authorized: bool,
}

/// Characteristic lookup response from the store.
#[derive(Debug, Deserialize)]
struct CharacteristicResponse {
    value: Option<NaiveDate>,
}

impl HttpRecordStore {
    /// Create a new client for the store at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        check_response_json(response).await
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn request_authorization(&self, read_types: &[RecordType]) -> Result<bool, AppError> {
        let url = format!("{}/v1/authorization", self.base_url);

        let body = serde_json::json!({ "read": read_types });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let auth: AuthorizationResponse = check_response_json(response).await?;
        Ok(auth.authorized)
    }

    async fn characteristic_date(
        &self,
        record_type: RecordType,
    ) -> Result<Option<NaiveDate>, AppError> {
        let url = format!("{}/v1/characteristics/{}", self.base_url, record_type.as_str());

        match self.get_json::<CharacteristicResponse>(&url, &[]).await {
            Ok(characteristic) => Ok(characteristic.value),
            // The store answers 404 when the characteristic was never set.
            Err(AppError::NoRecord(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn workouts(
        &self,
        sort: SampleSort,
        limit: usize,
    ) -> Result<Vec<WorkoutRecord>, AppError> {
        let url = format!("{}/v1/workouts", self.base_url);

        self.get_json(
            &url,
            &[
                ("sort", sort.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn samples(
        &self,
        record_type: RecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<QuantitySample>, AppError> {
        let url = format!("{}/v1/samples", self.base_url);

        self.get_json(
            &url,
            &[
                ("type", record_type.as_str().to_string()),
                ("start", format_bound(start)),
                ("end", format_bound(end)),
            ],
        )
        .await
    }

    async fn daily_statistics(
        &self,
        record_type: RecordType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StatisticsBucket>, AppError> {
        let url = format!("{}/v1/statistics/daily", self.base_url);

        self.get_json(
            &url,
            &[
                ("type", record_type.as_str().to_string()),
                ("start", format_bound(start)),
                ("end", format_bound(end)),
                // Buckets are anchored at the window start
                ("anchor", format_bound(start)),
            ],
        )
        .await
    }
}

/// Format a window bound for the store's query string.
fn format_bound(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Map a reqwest transport failure onto the error taxonomy.
fn map_transport_error(e: reqwest::Error) -> AppError {
    if e.is_connect() || e.is_timeout() {
        tracing::warn!(error = %e, "Record store unreachable");
        AppError::ServiceUnavailable
    } else {
        AppError::QueryFailed(e.to_string())
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        return Err(match status.as_u16() {
            401 | 403 => AppError::NotAuthorized,
            404 => AppError::NoRecord(body),
            _ => AppError::QueryFailed(format!("HTTP {}: {}", status, body)),
        });
    }

    response
        .json()
        .await
        .map_err(|e| AppError::QueryFailed(format!("JSON parse error: {}", e)))
}
