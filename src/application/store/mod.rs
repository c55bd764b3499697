// SPDX-License-Identifier: MPL-2.0
//! Stores holding the data fetched from the gallery API.
//!
//! - [`categories`]: [`CategoryStore`], loaded once per visit
//! - [`images`]: [`ImageStore`], reloaded on every filter change
//! - [`sequence`]: [`RequestSequence`], the last-request-wins guard

pub mod categories;
pub mod images;
pub mod sequence;

pub use categories::CategoryStore;
pub use images::{ImageStore, LoadTicket};
pub use sequence::{RequestSeq, RequestSequence};

use crate::error::NetworkError;

/// What happened when a response was handed to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the store contents.
    Applied { count: usize },
    /// A newer request was issued after this one; the response was discarded.
    Stale {
        seq: RequestSeq,
        latest: Option<RequestSeq>,
    },
    /// The request failed; previous contents are kept.
    Failed(NetworkError),
}

impl LoadOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }
}
