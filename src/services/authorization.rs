// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-access authorization gate in front of the record store.

use crate::models::RecordType;
use crate::store::RecordStore;
use std::sync::Arc;

/// Record types the gate requests read access for.
///
/// Sleep analysis is part of the requested set but is never queried by
/// the aggregator; the set matches what the upstream consent screen
/// historically showed and trimming it would change that screen.
pub const READ_TYPES: [RecordType; 5] = [
    RecordType::BirthDate,
    RecordType::Workout,
    RecordType::RestingHeartRate,
    RecordType::StepCount,
    RecordType::SleepAnalysis,
];

/// Requests read access to the fixed record type set.
///
/// The consent decision itself lives in the store: the first request
/// triggers the user prompt, later ones resolve from the store's cached
/// answer. This gate holds no state of its own.
pub struct AuthorizationGate {
    store: Arc<dyn RecordStore>,
}

impl AuthorizationGate {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Request read access; `false` when the store is unreachable or the
    /// user declined. Errors never escape this call.
    pub async fn request_access(&self) -> bool {
        match self.store.request_authorization(&READ_TYPES).await {
            Ok(granted) => {
                if !granted {
                    tracing::info!("Read access declined");
                }
                granted
            }
            Err(e) => {
                tracing::warn!(error = %e, "Authorization request failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRecordStore;

    #[tokio::test]
    async fn test_access_granted() {
        let gate = AuthorizationGate::new(Arc::new(MemoryRecordStore::new()));
        assert!(gate.request_access().await);
    }

    #[tokio::test]
    async fn test_access_declined() {
        let gate = AuthorizationGate::new(Arc::new(MemoryRecordStore::new().deny_access()));
        assert!(!gate.request_access().await);
    }

    #[tokio::test]
    async fn test_unavailable_store_resolves_false() {
        let gate = AuthorizationGate::new(Arc::new(MemoryRecordStore::new().unavailable()));
        assert!(!gate.request_access().await);
    }
}
