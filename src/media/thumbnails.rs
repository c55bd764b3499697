// SPDX-License-Identifier: MPL-2.0
//! Downloaded image cache for the grid and the lightbox.
//!
//! # Design
//!
//! - **LRU eviction**: least recently inserted or read images go first
//! - **Memory-bounded**: entry count and total encoded bytes are both capped
//! - **URL-keyed**: the same picture shown under several filters is fetched once
//! - **Failure memory**: a URL that failed is not requested again until
//!   [`ThumbnailCache::forget_failures`] runs, and renders as a placeholder
//! - **Re-requestable**: an evicted URL reports [`ThumbnailStatus::Missing`]
//!   and is handed out again by [`ThumbnailCache::request`]
//!
//! # Usage
//!
//! ```ignore
//! let to_fetch = cache.request(images.iter().map(|image| image.src.as_str()));
//! // spawn one download per URL, then on completion:
//! cache.insert(url, bytes);   // or cache.mark_failed(&url)
//!
//! match cache.status(&image.src) {
//!     ThumbnailStatus::Ready(handle) => { /* draw */ }
//!     ThumbnailStatus::Failed => { /* placeholder */ }
//!     _ => { /* spinner */ }
//! }
//! ```

use crate::config::{DEFAULT_THUMBNAIL_CACHE_ENTRIES, THUMBNAIL_CACHE_MAX_BYTES};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Where a URL stands in the cache.
#[derive(Debug, Clone)]
pub enum ThumbnailStatus {
    /// Decoded handle ready to draw.
    Ready(Handle),
    /// A download is in flight.
    Loading,
    /// The last download failed; draw the fallback.
    Failed,
    /// Never requested, or evicted.
    Missing,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    handle: Handle,
    size_bytes: usize,
}

/// LRU cache of downloaded images keyed by URL.
pub struct ThumbnailCache {
    cache: LruCache<String, CacheEntry>,
    pending: HashSet<String>,
    failed: HashSet<String>,
    max_bytes: usize,
    current_bytes: usize,
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(DEFAULT_THUMBNAIL_CACHE_ENTRIES, THUMBNAIL_CACHE_MAX_BYTES)
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `max_entries` images and `max_bytes`
    /// of encoded data. A zero entry count is treated as one.
    #[must_use]
    pub fn new(max_entries: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Filters `urls` down to those that need a download and marks them
    /// pending. Cached, in-flight and failed URLs are skipped, as are
    /// duplicates within `urls`.
    pub fn request<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut to_fetch = Vec::new();
        for url in urls {
            if url.is_empty()
                || self.cache.contains(url)
                || self.pending.contains(url)
                || self.failed.contains(url)
            {
                continue;
            }
            self.pending.insert(url.to_string());
            to_fetch.push(url.to_string());
        }
        to_fetch
    }

    /// Stores downloaded bytes for `url`.
    ///
    /// Returns `false` when the image alone exceeds half the byte budget; the
    /// URL is then reported as failed so the placeholder is shown.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) -> bool {
        self.pending.remove(&url);

        let size_bytes = bytes.len();
        if size_bytes > self.max_bytes / 2 {
            self.mark_failed(&url);
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            }
        }

        let entry = CacheEntry {
            handle: Handle::from_bytes(bytes),
            size_bytes,
        };
        // `push` reports the entry displaced by the count limit
        if let Some((evicted_url, evicted)) = self.cache.push(url.clone(), entry) {
            if evicted_url != url {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            }
        }
        self.failed.remove(&url);
        self.current_bytes += size_bytes;
        true
    }

    /// Records a failed download for `url`.
    pub fn mark_failed(&mut self, url: &str) {
        self.pending.remove(url);
        self.failed.insert(url.to_string());
    }

    /// Allows failed URLs to be requested again.
    pub fn forget_failures(&mut self) {
        self.failed.clear();
    }

    /// Current status of `url`, without touching LRU order.
    #[must_use]
    pub fn status(&self, url: &str) -> ThumbnailStatus {
        if let Some(entry) = self.cache.peek(url) {
            ThumbnailStatus::Ready(entry.handle.clone())
        } else if self.pending.contains(url) {
            ThumbnailStatus::Loading
        } else if self.failed.contains(url) {
            ThumbnailStatus::Failed
        } else {
            ThumbnailStatus::Missing
        }
    }

    /// Marks `url` as recently used.
    pub fn touch(&mut self, url: &str) {
        let _ = self.cache.get(url);
    }

    /// Most images the cache holds at once.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("entry_count", &self.cache.len())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(len: usize) -> Vec<u8> {
        vec![0u8; len]
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = ThumbnailCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
        assert!(matches!(cache.status("a.jpg"), ThumbnailStatus::Missing));
    }

    #[test]
    fn request_marks_urls_pending_once() {
        let mut cache = ThumbnailCache::default();
        let first = cache.request(["a.jpg", "b.jpg", "a.jpg", ""]);
        assert_eq!(first, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert!(matches!(cache.status("a.jpg"), ThumbnailStatus::Loading));

        let second = cache.request(["a.jpg", "c.jpg"]);
        assert_eq!(second, vec!["c.jpg".to_string()]);
    }

    #[test]
    fn insert_makes_url_ready() {
        let mut cache = ThumbnailCache::default();
        cache.request(["a.jpg"]);
        assert!(cache.insert("a.jpg".into(), bytes(100)));

        assert!(matches!(cache.status("a.jpg"), ThumbnailStatus::Ready(_)));
        assert_eq!(cache.memory_usage(), 100);
        assert!(cache.request(["a.jpg"]).is_empty());
    }

    #[test]
    fn failed_urls_are_not_requested_again_until_forgotten() {
        let mut cache = ThumbnailCache::default();
        cache.request(["broken.jpg"]);
        cache.mark_failed("broken.jpg");

        assert!(matches!(cache.status("broken.jpg"), ThumbnailStatus::Failed));
        assert!(cache.request(["broken.jpg"]).is_empty());

        cache.forget_failures();
        assert_eq!(cache.request(["broken.jpg"]), vec!["broken.jpg".to_string()]);
    }

    #[test]
    fn entry_limit_evicts_least_recently_used() {
        let mut cache = ThumbnailCache::new(2, 10_000);
        cache.insert("a".into(), bytes(10));
        cache.insert("b".into(), bytes(10));
        cache.touch("a");
        cache.insert("c".into(), bytes(10));

        assert!(matches!(cache.status("a"), ThumbnailStatus::Ready(_)));
        assert!(matches!(cache.status("b"), ThumbnailStatus::Missing));
        assert_eq!(cache.memory_usage(), 20);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn evicted_url_can_be_requested_again() {
        let mut cache = ThumbnailCache::new(1, 10_000);
        cache.insert("a".into(), bytes(10));
        cache.insert("b".into(), bytes(10));

        assert!(matches!(cache.status("a"), ThumbnailStatus::Missing));
        assert_eq!(cache.request(["a", "b"]), vec!["a".to_string()]);
        assert!(matches!(cache.status("a"), ThumbnailStatus::Loading));
    }

    #[test]
    fn capacity_reports_entry_limit() {
        assert_eq!(ThumbnailCache::new(8, 1_000).capacity(), 8);
        assert_eq!(ThumbnailCache::new(0, 1_000).capacity(), 1);
    }

    #[test]
    fn byte_limit_evicts_until_entry_fits() {
        let mut cache = ThumbnailCache::new(100, 1_000);
        cache.insert("a".into(), bytes(400));
        cache.insert("b".into(), bytes(400));
        cache.insert("c".into(), bytes(400));

        assert_eq!(cache.len(), 2);
        assert!(cache.memory_usage() <= 1_000);
        assert!(matches!(cache.status("a"), ThumbnailStatus::Missing));
    }

    #[test]
    fn oversized_image_is_rejected_as_failed() {
        let mut cache = ThumbnailCache::new(10, 1_000);
        cache.request(["huge"]);
        assert!(!cache.insert("huge".into(), bytes(600)));
        assert!(matches!(cache.status("huge"), ThumbnailStatus::Failed));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_same_url_does_not_double_count() {
        let mut cache = ThumbnailCache::new(10, 10_000);
        cache.insert("a".into(), bytes(100));
        cache.insert("a".into(), bytes(300));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 300);
    }
}
