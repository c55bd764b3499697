// SPDX-License-Identifier: MPL-2.0
//! Stand-in API used when no HTTP client could be built.
//!
//! Every call fails with the startup error, so the gallery shows its error
//! state and Retry control instead of the app refusing to start.

use futures_util::FutureExt;

use crate::application::port::{ApiFuture, GalleryApi};
use crate::domain::gallery::{Category, CategoryFilter, GalleryImage};
use crate::error::NetworkError;

#[derive(Debug, Clone)]
pub struct OfflineGalleryApi {
    error: NetworkError,
}

impl OfflineGalleryApi {
    #[must_use]
    pub fn new(error: NetworkError) -> Self {
        Self { error }
    }

    fn fail<T: Send + 'static>(&self) -> ApiFuture<T> {
        let error = self.error.clone();
        async move { Err(error) }.boxed()
    }
}

impl GalleryApi for OfflineGalleryApi {
    fn fetch_categories(&self) -> ApiFuture<Vec<Category>> {
        self.fail()
    }

    fn fetch_images(&self, _filter: &CategoryFilter) -> ApiFuture<Vec<GalleryImage>> {
        self.fail()
    }

    fn fetch_image_bytes(&self, _url: &str) -> ApiFuture<Vec<u8>> {
        self.fail()
    }
}
