// SPDX-License-Identifier: MPL-2.0
//! Gallery component: fetch orchestration on top of [`GallerySession`].
//!
//! The component owns the session and the thumbnail cache and turns user
//! input into API calls. Every fetch result comes back as a [`Message`]
//! carrying the sequence tag it was issued with, so responses may arrive in
//! any order.

use crate::application::port::{ApiResult, GalleryApi};
use crate::application::query::CloseReason;
use crate::application::store::{LoadOutcome, LoadTicket, RequestSeq};
use crate::application::GallerySession;
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::gallery::{Category, CategoryFilter, CategoryKey, GalleryImage, ImageId};
use crate::error::NetworkError;
use crate::media::{ThumbnailCache, ThumbnailStatus};
use iced::Task;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Messages produced by the gallery view and by fetch completions.
#[derive(Debug, Clone)]
pub enum Message {
    CategoriesLoaded {
        seq: RequestSeq,
        result: ApiResult<Vec<Category>>,
    },
    ImagesLoaded {
        ticket: LoadTicket,
        result: ApiResult<Vec<GalleryImage>>,
    },
    ImageBytesLoaded {
        url: String,
        result: ApiResult<Vec<u8>>,
    },
    FilterSelected(CategoryKey),
    Retry,
    RetryCategories,
    /// Grid tiles at these list positions are on screen.
    TilesVisible(Range<usize>),
    ImageClicked(ImageId),
    Next,
    Previous,
    Close(CloseReason),
}

/// Side effects the application root has to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Surface a fetch failure as a toast.
    ShowError(NetworkError),
    /// A load succeeded; stale failure toasts can go.
    ClearNetworkErrors,
}

/// Startup settings for the component.
#[derive(Debug, Clone, Copy)]
pub struct StateConfig {
    pub preview_count: usize,
    pub thumbnail_cache_entries: usize,
    pub thumbnail_cache_bytes: usize,
}

pub struct State {
    session: GallerySession,
    thumbnails: ThumbnailCache,
    api: Arc<dyn GalleryApi>,
    preview_count: usize,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("session", &self.session)
            .field("thumbnails", &self.thumbnails)
            .field("preview_count", &self.preview_count)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        api: Arc<dyn GalleryApi>,
        config: StateConfig,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> Self {
        let session = match diagnostics {
            Some(handle) => GallerySession::new().with_diagnostics(handle),
            None => GallerySession::new(),
        };
        Self {
            session,
            thumbnails: ThumbnailCache::new(
                config.thumbnail_cache_entries,
                config.thumbnail_cache_bytes,
            ),
            api,
            preview_count: config.preview_count,
        }
    }

    /// Loads categories and the first image list.
    ///
    /// `initial` selects the starting filter (deep link); `None` means "all".
    pub fn start(&mut self, initial: Option<CategoryKey>) -> Task<Message> {
        let categories = self.load_categories();
        let ticket = self
            .session
            .set_filter(initial.unwrap_or_else(CategoryKey::all));
        Task::batch([categories, self.fetch_images(ticket)])
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::CategoriesLoaded { seq, result } => {
                match self.session.apply_categories(seq, result) {
                    LoadOutcome::Failed(error) => (Effect::ShowError(error), Task::none()),
                    LoadOutcome::Applied { .. } | LoadOutcome::Stale { .. } => {
                        (Effect::None, Task::none())
                    }
                }
            }
            Message::ImagesLoaded { ticket, result } => {
                match self.session.apply_images(&ticket, result) {
                    LoadOutcome::Applied { .. } => {
                        (Effect::ClearNetworkErrors, self.request_thumbnails())
                    }
                    LoadOutcome::Failed(error) => (Effect::ShowError(error), Task::none()),
                    LoadOutcome::Stale { .. } => (Effect::None, Task::none()),
                }
            }
            Message::ImageBytesLoaded { url, result } => {
                match result {
                    Ok(bytes) => {
                        self.thumbnails.insert(url, bytes);
                    }
                    // The tile shows its placeholder; no toast per picture
                    Err(_) => self.thumbnails.mark_failed(&url),
                }
                (Effect::None, Task::none())
            }
            Message::FilterSelected(key) => (Effect::None, self.select_filter(key)),
            Message::Retry => {
                let mut tasks = vec![self.fetch_images_for_retry()];
                if !self.session.categories_loaded() {
                    tasks.push(self.load_categories());
                }
                self.thumbnails.forget_failures();
                (Effect::None, Task::batch(tasks))
            }
            Message::RetryCategories => (Effect::None, self.load_categories()),
            Message::TilesVisible(range) => (Effect::None, self.load_tiles(range)),
            Message::ImageClicked(id) => {
                let task = if self.session.open(id).is_some() {
                    self.load_lightbox()
                } else {
                    Task::none()
                };
                (Effect::None, task)
            }
            Message::Next => {
                self.session.next();
                (Effect::None, self.load_lightbox())
            }
            Message::Previous => {
                self.session.previous();
                (Effect::None, self.load_lightbox())
            }
            Message::Close(reason) => {
                self.close_lightbox(reason);
                (Effect::None, Task::none())
            }
        }
    }

    /// Switches the active filter. Always issues a new request.
    ///
    /// A category list that failed to load is requested again alongside.
    pub fn select_filter(&mut self, key: impl Into<CategoryKey>) -> Task<Message> {
        let ticket = self.session.set_filter(key);
        let images = self.fetch_images(ticket);
        if self.session.categories_error().is_some() {
            Task::batch([images, self.load_categories()])
        } else {
            images
        }
    }

    #[must_use]
    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.session.is_lightbox_open()
    }

    /// Closes the lightbox; `false` when it was not open.
    pub fn close_lightbox(&mut self, reason: CloseReason) -> bool {
        self.session.close(reason)
    }

    #[must_use]
    pub fn thumbnail(&self, url: &str) -> ThumbnailStatus {
        self.thumbnails.status(url)
    }

    /// First images of the unfiltered list, once it is the displayed one.
    #[must_use]
    pub fn preview(&self) -> &[GalleryImage] {
        match self.session.image_store().loaded_filter() {
            Some(CategoryFilter::All) => self.session.preview(self.preview_count),
            _ => &[],
        }
    }

    fn load_categories(&mut self) -> Task<Message> {
        let Some(seq) = self.session.begin_categories() else {
            return Task::none();
        };
        Task::perform(self.api.fetch_categories(), move |result| {
            Message::CategoriesLoaded { seq, result }
        })
    }

    fn fetch_images_for_retry(&mut self) -> Task<Message> {
        let ticket = self.session.retry();
        self.fetch_images(ticket)
    }

    fn fetch_images(&self, ticket: LoadTicket) -> Task<Message> {
        let future = self.api.fetch_images(&ticket.filter);
        Task::perform(future, move |result| Message::ImagesLoaded { ticket, result })
    }

    /// First screenful after a list load, capped at what the cache can hold.
    fn request_thumbnails(&mut self) -> Task<Message> {
        self.load_tiles(0..self.thumbnails.capacity())
    }

    /// Downloads what the tiles in `range` are missing and refreshes the
    /// cached ones so they are evicted last.
    fn load_tiles(&mut self, range: Range<usize>) -> Task<Message> {
        let images = self.session.images();
        let start = range.start.min(images.len());
        let end = range
            .end
            .min(images.len())
            .min(start + self.thumbnails.capacity());
        let urls: Vec<&str> = images[start..end]
            .iter()
            .map(|image| image.src.as_str())
            .collect();
        for url in &urls {
            self.thumbnails.touch(url);
        }
        let to_fetch = self.thumbnails.request(urls);
        self.download(to_fetch)
    }

    /// Makes sure the lightbox picture and its neighbours are cached.
    fn load_lightbox(&mut self) -> Task<Message> {
        let Some(index) = self.session.lightbox().current_index() else {
            return Task::none();
        };
        let images = self.session.images();
        let len = images.len();
        if index >= len {
            return Task::none();
        }
        let urls: Vec<&str> = [(index + 1) % len, (index + len - 1) % len, index]
            .into_iter()
            .filter_map(|position| images.get(position))
            .map(|image| image.src.as_str())
            .collect();
        // Current picture touched last so it is the most recently used
        for url in &urls {
            self.thumbnails.touch(url);
        }
        let to_fetch = self.thumbnails.request(urls);
        self.download(to_fetch)
    }

    fn download(&self, urls: Vec<String>) -> Task<Message> {
        Task::batch(urls.into_iter().map(|url| {
            let future = self.api.fetch_image_bytes(&url);
            Task::perform(future, move |result| Message::ImageBytesLoaded { url, result })
        }))
    }
}
