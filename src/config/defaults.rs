// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Remote gallery endpoint and request timeout
//! - **Gallery**: Preview strip length and thumbnail caching
//! - **Notifications**: Toast stacking and auto-dismiss
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// API Defaults
// ==========================================================================

/// Gallery API base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "COMMUNITY_GALLERY_API_BASE";

/// Default request timeout (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of images shown in the home preview strip.
pub const DEFAULT_PREVIEW_COUNT: usize = 6;

/// Minimum preview strip length.
pub const MIN_PREVIEW_COUNT: usize = 1;

/// Maximum preview strip length.
pub const MAX_PREVIEW_COUNT: usize = 24;

/// Default number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_ENTRIES: usize = 64;

/// Minimum thumbnail cache size (entries).
pub const MIN_THUMBNAIL_CACHE_ENTRIES: usize = 8;

/// Maximum thumbnail cache size (entries).
pub const MAX_THUMBNAIL_CACHE_ENTRIES: usize = 512;

/// Upper bound on the bytes held by the thumbnail cache (64 MB).
pub const THUMBNAIL_CACHE_MAX_BYTES: usize = 64 * 1024 * 1024;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss delay for success/info toasts (in milliseconds).
pub const NOTIFICATION_INFO_DISMISS_MS: u64 = 3000;

/// Auto-dismiss delay for warning toasts (in milliseconds).
pub const NOTIFICATION_WARNING_DISMISS_MS: u64 = 5000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_API_TIMEOUT_SECS <= DEFAULT_API_TIMEOUT_SECS);
    assert!(DEFAULT_API_TIMEOUT_SECS <= MAX_API_TIMEOUT_SECS);

    assert!(MIN_PREVIEW_COUNT <= DEFAULT_PREVIEW_COUNT);
    assert!(DEFAULT_PREVIEW_COUNT <= MAX_PREVIEW_COUNT);

    assert!(MIN_THUMBNAIL_CACHE_ENTRIES > 0);
    assert!(MIN_THUMBNAIL_CACHE_ENTRIES <= DEFAULT_THUMBNAIL_CACHE_ENTRIES);
    assert!(DEFAULT_THUMBNAIL_CACHE_ENTRIES <= MAX_THUMBNAIL_CACHE_ENTRIES);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    assert!(NOTIFICATION_INFO_DISMISS_MS < NOTIFICATION_WARNING_DISMISS_MS);
};
