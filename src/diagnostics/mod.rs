// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording gallery activity.
//!
//! Events (fetches, stale responses, lightbox transitions, warnings) are sent
//! through a [`DiagnosticsHandle`], stored in a memory-bounded circular buffer
//! and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, FetchResource};
