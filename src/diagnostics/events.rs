// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for gallery activity tracking.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Remote resource a fetch targets.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "resource", rename_all = "snake_case")]
pub enum FetchResource {
    Categories,
    Images {
        /// Value of the `category` query parameter.
        category: String,
    },
}

/// The kinds of events the collector records.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    FetchStarted {
        #[serde(flatten)]
        resource: FetchResource,
        seq: u64,
    },
    FetchCompleted {
        #[serde(flatten)]
        resource: FetchResource,
        seq: u64,
        count: usize,
    },
    FetchFailed {
        #[serde(flatten)]
        resource: FetchResource,
        seq: u64,
        error: String,
    },
    /// A response arrived after a newer request was issued and was dropped.
    StaleResponseDiscarded {
        seq: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        latest: Option<u64>,
    },
    LightboxOpened {
        index: usize,
        image_id: i64,
    },
    LightboxNavigated {
        index: usize,
    },
    LightboxClosed {
        reason: String,
    },
    Warning {
        message_key: String,
    },
    Error {
        message_key: String,
    },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current wall-clock time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_event_serializes_with_flattened_resource() {
        let event = DiagnosticEventKind::FetchStarted {
            resource: FetchResource::Images {
                category: "nature".to_string(),
            },
            seq: 3,
        };
        let json = serde_json::to_string(&event).expect("serialization should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be parseable");

        assert_eq!(parsed["type"], "fetch_started");
        assert_eq!(parsed["resource"], "images");
        assert_eq!(parsed["category"], "nature");
        assert_eq!(parsed["seq"], 3);
    }

    #[test]
    fn stale_event_omits_missing_latest() {
        let event = DiagnosticEventKind::StaleResponseDiscarded { seq: 1, latest: None };
        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(!json.contains("latest"));
    }
}
