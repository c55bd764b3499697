// SPDX-License-Identifier: MPL-2.0
//! Gallery value types shared by the stores, the lightbox and the HTTP adapter.
//!
//! These types mirror the JSON documents served by the gallery API and carry
//! no behavior beyond identity and comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable string identifier of a gallery category.
///
/// The reserved value [`CategoryKey::ALL`] means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Sentinel key selecting the unfiltered image set.
    pub const ALL: &'static str = "all";

    /// Creates a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the `"all"` sentinel key.
    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Returns `true` if this is the `"all"` sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryKey {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A gallery category as listed by the API, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    /// Stored display title. May be empty when the server omits it.
    #[serde(default)]
    pub title: String,
}

impl Category {
    pub fn new(key: impl Into<CategoryKey>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Unique identifier of a gallery image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: ImageId,
    /// Absolute URL of the full-size image.
    pub src: String,
    #[serde(default)]
    pub title: String,
    /// Foreign key into [`Category::key`].
    pub category_key: CategoryKey,
}

impl GalleryImage {
    pub fn new(
        id: i64,
        src: impl Into<String>,
        title: impl Into<String>,
        category_key: impl Into<CategoryKey>,
    ) -> Self {
        Self {
            id: ImageId(id),
            src: src.into(),
            title: title.into(),
            category_key: category_key.into(),
        }
    }
}
