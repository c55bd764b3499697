// SPDX-License-Identifier: MPL-2.0
//! Gallery session: categories, images, active filter and lightbox.
//!
//! The session is the single owner of gallery state. Fetching is left to the
//! caller: `begin_*` methods hand out sequence-tagged requests and `apply_*`
//! methods accept their results in any order. Only the latest image request
//! can change what is displayed.
//!
//! A successful image load always closes the lightbox, whether or not the
//! displayed image survives in the new list.

use crate::application::port::ApiResult;
use crate::application::query::{
    display_categories, CloseReason, DisplayCategory, LightboxController, LightboxInfo,
};
use crate::application::store::{CategoryStore, ImageStore, LoadOutcome, LoadTicket, RequestSeq};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, FetchResource};
use crate::domain::gallery::{Category, CategoryFilter, CategoryKey, GalleryImage, ImageId};
use crate::error::NetworkError;

/// Gallery state driven by the application update loop.
#[derive(Debug, Clone, Default)]
pub struct GallerySession {
    categories: CategoryStore,
    images: ImageStore,
    lightbox: LightboxController,
    diagnostics: Option<DiagnosticsHandle>,
}

impl GallerySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a diagnostics handle for fetch and lightbox events.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// Starts the category load; `None` once categories are loaded.
    pub fn begin_categories(&mut self) -> Option<RequestSeq> {
        let seq = self.categories.begin_load()?;
        self.log_started(FetchResource::Categories, seq);
        Some(seq)
    }

    pub fn apply_categories(
        &mut self,
        seq: RequestSeq,
        result: ApiResult<Vec<Category>>,
    ) -> LoadOutcome {
        let outcome = self.categories.apply(seq, result);
        self.log_outcome(FetchResource::Categories, seq, &outcome);
        outcome
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.categories.categories()
    }

    #[must_use]
    pub fn categories_loaded(&self) -> bool {
        self.categories.is_loaded()
    }

    /// Why the last category load failed, until a retry succeeds.
    #[must_use]
    pub fn categories_error(&self) -> Option<&NetworkError> {
        self.categories.last_error()
    }

    /// Categories with resolved labels, in display order.
    pub fn display_categories<F>(&self, translate: F) -> Vec<DisplayCategory>
    where
        F: Fn(&str) -> Option<String>,
    {
        display_categories(self.categories.categories(), translate)
    }

    // ------------------------------------------------------------------
    // Filter and images
    // ------------------------------------------------------------------

    /// Selects a category and issues an image request for it.
    ///
    /// Unknown keys are not rejected; the server answers them with an empty
    /// list.
    pub fn set_filter(&mut self, key: impl Into<CategoryKey>) -> LoadTicket {
        let ticket = self.images.set_filter(CategoryFilter::from_key(key));
        self.log_images_started(&ticket);
        ticket
    }

    /// Re-issues the request for the current filter.
    pub fn retry(&mut self) -> LoadTicket {
        let ticket = self.images.begin_load();
        self.log_images_started(&ticket);
        ticket
    }

    /// Applies an image response.
    ///
    /// Stale responses are discarded without touching any state. A successful
    /// response replaces the list and closes the lightbox.
    pub fn apply_images(
        &mut self,
        ticket: &LoadTicket,
        result: ApiResult<Vec<GalleryImage>>,
    ) -> LoadOutcome {
        let outcome = self.images.apply(ticket, result);
        let resource = FetchResource::Images {
            category: ticket.filter.query_value().to_string(),
        };
        self.log_outcome(resource, ticket.seq, &outcome);

        if outcome.is_applied() && self.lightbox.close() {
            self.log_closed(CloseReason::ListReplaced);
        }
        outcome
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        self.images.images()
    }

    #[must_use]
    pub fn preview(&self, limit: usize) -> &[GalleryImage] {
        self.images.preview(limit)
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        self.images.filter()
    }

    /// Key of the active filter (`"all"` when unfiltered).
    #[must_use]
    pub fn active_key(&self) -> CategoryKey {
        self.images.filter().key()
    }

    #[must_use]
    pub fn image_store(&self) -> &ImageStore {
        &self.images
    }

    // ------------------------------------------------------------------
    // Lightbox
    // ------------------------------------------------------------------

    /// Opens the lightbox on the image with `id`.
    pub fn open(&mut self, id: ImageId) -> Option<usize> {
        let index = self.lightbox.open(id, self.images.images())?;
        self.log(|| DiagnosticEventKind::LightboxOpened {
            index,
            image_id: id.0,
        });
        Some(index)
    }

    pub fn next(&mut self) -> Option<usize> {
        let was_open = self.lightbox.is_open();
        let index = self.lightbox.next(self.images.images());
        self.after_step(was_open, index)
    }

    pub fn previous(&mut self) -> Option<usize> {
        let was_open = self.lightbox.is_open();
        let index = self.lightbox.previous(self.images.images());
        self.after_step(was_open, index)
    }

    /// Closes the lightbox. Returns `false` if it was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let closed = self.lightbox.close();
        if closed {
            self.log_closed(reason);
        }
        closed
    }

    #[must_use]
    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    #[must_use]
    pub fn lightbox_info(&self) -> LightboxInfo {
        self.lightbox.info(self.images.images())
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.lightbox.current_image()
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    fn after_step(&self, was_open: bool, index: Option<usize>) -> Option<usize> {
        match index {
            Some(index) => self.log(|| DiagnosticEventKind::LightboxNavigated { index }),
            None if was_open && !self.lightbox.is_open() => self.log_closed(CloseReason::ImageGone),
            None => {}
        }
        index
    }

    fn log_images_started(&self, ticket: &LoadTicket) {
        let resource = FetchResource::Images {
            category: ticket.filter.query_value().to_string(),
        };
        self.log_started(resource, ticket.seq);
    }

    fn log_started(&self, resource: FetchResource, seq: RequestSeq) {
        if let Some(handle) = &self.diagnostics {
            handle.log_fetch_started(resource, seq.value());
        }
    }

    fn log_outcome(&self, resource: FetchResource, seq: RequestSeq, outcome: &LoadOutcome) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        match outcome {
            LoadOutcome::Applied { count } => {
                handle.log_fetch_completed(resource, seq.value(), *count);
            }
            LoadOutcome::Stale { seq, latest } => {
                handle.log(DiagnosticEventKind::StaleResponseDiscarded {
                    seq: seq.value(),
                    latest: latest.map(RequestSeq::value),
                });
            }
            LoadOutcome::Failed(error) => {
                handle.log_fetch_failed(resource, seq.value(), error.to_string());
            }
        }
    }

    fn log_closed(&self, reason: CloseReason) {
        self.log(|| DiagnosticEventKind::LightboxClosed {
            reason: format!("{reason:?}"),
        });
    }

    fn log<F>(&self, event: F)
    where
        F: FnOnce() -> DiagnosticEventKind,
    {
        if let Some(handle) = &self.diagnostics {
            handle.log(event());
        }
    }
}
