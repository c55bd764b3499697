// SPDX-License-Identifier: MPL-2.0
//! Image store and filter control.
//!
//! The store owns the currently displayed image list and the active
//! [`CategoryFilter`]. Changing the filter always issues a new request (no
//! debouncing); each request is tagged with a sequence number so that only the
//! most recent one can replace the list.
//!
//! A successful response replaces the whole list. A failed response keeps the
//! previous list visible and records a retryable error.

use super::sequence::{RequestSeq, RequestSequence};
use super::LoadOutcome;
use crate::application::port::ApiResult;
use crate::domain::gallery::{CategoryFilter, GalleryImage};
use crate::error::NetworkError;

/// Handle for one issued image request.
///
/// The caller performs the fetch for `filter` and passes the ticket back to
/// [`ImageStore::apply`] together with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: RequestSeq,
    pub filter: CategoryFilter,
}

/// Holds the image list for the active filter.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: Vec<GalleryImage>,
    /// Filter currently selected by the user.
    filter: CategoryFilter,
    /// Filter the current `images` were fetched for.
    loaded_filter: Option<CategoryFilter>,
    sequence: RequestSequence,
    in_flight: Option<RequestSeq>,
    last_error: Option<NetworkError>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a new filter and issues a request for it.
    ///
    /// Every call issues a request, even when `filter` equals the current one.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> LoadTicket {
        self.filter = filter;
        self.begin_load()
    }

    /// Issues a request for the current filter (initial load or retry).
    pub fn begin_load(&mut self) -> LoadTicket {
        let seq = self.sequence.issue();
        self.in_flight = Some(seq);
        LoadTicket {
            seq,
            filter: self.filter.clone(),
        }
    }

    /// Applies a response.
    ///
    /// Responses whose ticket is not the latest issued are discarded and
    /// reported as [`LoadOutcome::Stale`]; the list is left untouched.
    pub fn apply(
        &mut self,
        ticket: &LoadTicket,
        result: ApiResult<Vec<GalleryImage>>,
    ) -> LoadOutcome {
        if !self.sequence.is_current(ticket.seq) {
            return LoadOutcome::Stale {
                seq: ticket.seq,
                latest: self.sequence.latest(),
            };
        }

        self.in_flight = None;
        match result {
            Ok(images) => {
                let count = images.len();
                self.images = images;
                self.loaded_filter = Some(ticket.filter.clone());
                self.last_error = None;
                LoadOutcome::Applied { count }
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Images in server order.
    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// The first `limit` images of the list, for preview strips.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[GalleryImage] {
        &self.images[..limit.min(self.images.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// `true` when the last applied response contained no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Filter selected by the user.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Filter the displayed list belongs to, once any load has succeeded.
    #[must_use]
    pub fn loaded_filter(&self) -> Option<&CategoryFilter> {
        self.loaded_filter.as_ref()
    }

    /// Returns `true` while the latest request has not resolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Error from the latest resolved request, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&NetworkError> {
        self.last_error.as_ref()
    }
}
