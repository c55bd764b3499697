// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components log through a cloneable [`DiagnosticsHandle`]; the collector
//! drains the channel into a bounded [`CircularBuffer`] and can export the
//! buffer as a JSON report.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, FetchResource};
use crate::error::Result;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Sends never block: events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an arbitrary event kind.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_fetch_started(&self, resource: FetchResource, seq: u64) {
        self.log(DiagnosticEventKind::FetchStarted { resource, seq });
    }

    pub fn log_fetch_completed(&self, resource: FetchResource, seq: u64, count: usize) {
        self.log(DiagnosticEventKind::FetchCompleted {
            resource,
            seq,
            count,
        });
    }

    pub fn log_fetch_failed(&self, resource: FetchResource, seq: u64, error: impl Into<String>) {
        self.log(DiagnosticEventKind::FetchFailed {
            resource,
            seq,
            error: error.into(),
        });
    }

    /// Logs a warning identified by its notification message key.
    pub fn log_warning(&self, message_key: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message_key: message_key.into(),
        });
    }

    /// Logs an error identified by its notification message key.
    pub fn log_error(&self, message_key: impl Into<String>) {
        self.log(DiagnosticEventKind::Error {
            message_key: message_key.into(),
        });
    }
}

#[derive(Serialize)]
struct Report<'a> {
    app_version: &'static str,
    collection_started_at: DateTime<Utc>,
    exported_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<&'a DiagnosticEvent>,
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this from the update loop (e.g. on each tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports all buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        let report = Report {
            app_version: env!("CARGO_PKG_VERSION"),
            collection_started_at: self.collection_started_at,
            exported_at: Utc::now(),
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = self.export_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_fetch_started(FetchResource::Categories, 1);
        handle.log_warning("notification-config-load-error");
        // Event is in channel, not yet in buffer
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_evicts_oldest_when_full() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let handle = collector.handle();
        let capacity = BufferCapacity::new(0).value();

        for seq in 0..(capacity as u64 + 5) {
            handle.log_fetch_started(FetchResource::Categories, seq);
            collector.process_pending();
        }

        assert_eq!(collector.len(), capacity);
        let first = collector.iter().next().expect("buffer should not be empty");
        assert_eq!(
            first.kind,
            DiagnosticEventKind::FetchStarted {
                resource: FetchResource::Categories,
                seq: 5
            }
        );
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_error("notification-network-timeout");
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be parseable");
        assert_eq!(parsed["event_count"], 1);
        assert_eq!(parsed["events"][0]["type"], "error");
        assert_eq!(parsed["events"][0]["message_key"], "notification-network-timeout");
    }

    #[test]
    fn export_to_file_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("diagnostics.json");

        let collector = DiagnosticsCollector::default();
        collector.export_to_file(&path).expect("export should succeed");
        assert!(path.exists());
    }
}
