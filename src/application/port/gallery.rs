// SPDX-License-Identifier: MPL-2.0
//! Gallery API port definition.
//!
//! This module defines the [`GalleryApi`] trait: the remote collaborator that
//! serves categories, image listings and raw image bytes. The HTTP adapter in
//! `infrastructure::http` implements it; tests substitute scripted fakes.
//!
//! Methods return boxed `'static` futures rather than using `async fn` so the
//! result can be handed straight to `iced::Task::perform`.

use crate::domain::gallery::{Category, CategoryFilter, GalleryImage};
use crate::error::NetworkError;
use futures_util::future::BoxFuture;

/// Result type for gallery API calls.
pub type ApiResult<T> = Result<T, NetworkError>;

/// Future returned by every [`GalleryApi`] call.
pub type ApiFuture<T> = BoxFuture<'static, ApiResult<T>>;

/// Port for the remote gallery service.
///
/// # Ordering
///
/// Implementations must return sequences in server order. That order is the
/// display order for categories and the navigation order for the lightbox.
///
/// # Example
///
/// ```ignore
/// use community_gallery::application::port::GalleryApi;
/// use community_gallery::domain::gallery::CategoryFilter;
///
/// async fn count_nature(api: &dyn GalleryApi) -> usize {
///     api.fetch_images(&CategoryFilter::from_key("nature"))
///         .await
///         .map(|images| images.len())
///         .unwrap_or(0)
/// }
/// ```
pub trait GalleryApi: Send + Sync {
    /// Lists categories in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] on transport failure, non-2xx status or a
    /// malformed body.
    fn fetch_categories(&self) -> ApiFuture<Vec<Category>>;

    /// Lists the images selected by `filter`, in server order.
    ///
    /// [`CategoryFilter::All`] returns the unfiltered set. An unknown category
    /// yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GalleryApi::fetch_categories`].
    fn fetch_images(&self, filter: &CategoryFilter) -> ApiFuture<Vec<GalleryImage>>;

    /// Downloads the raw bytes behind an image URL (thumbnails and lightbox).
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] on transport failure or non-2xx status.
    fn fetch_image_bytes(&self, url: &str) -> ApiFuture<Vec<u8>>;
}
