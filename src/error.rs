// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// Store-side failures (unavailable, not authorized, query failed, no
/// record) are absorbed inside the aggregator before they reach a
/// handler; only `BadRequest` and `Internal` are expected to surface
/// from the summary route.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Record store unavailable")]
    ServiceUnavailable,

    #[error("Read access not authorized")]
    NotAuthorized,

    #[error("Record store query failed: {0}")]
    QueryFailed(String),

    #[error("No record: {0}")]
    NoRecord(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", None)
            }
            AppError::NotAuthorized => (StatusCode::UNAUTHORIZED, "not_authorized", None),
            AppError::QueryFailed(msg) => {
                (StatusCode::BAD_GATEWAY, "query_failed", Some(msg.clone()))
            }
            AppError::NoRecord(msg) => (StatusCode::NOT_FOUND, "no_record", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
