// SPDX-License-Identifier: MPL-2.0
//! Category filter selecting which images the gallery requests.
//!
//! The filter is a pure value: it knows how to express itself as the
//! `category` query parameter and whether an image belongs to it, but it
//! performs no I/O.

use super::types::{CategoryKey, GalleryImage};

/// Active category filter.
///
/// `All` is the default and corresponds to the `"all"` sentinel key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filter: the full unfiltered image set.
    #[default]
    All,
    /// Only images whose `category_key` equals this key.
    Category(CategoryKey),
}

impl CategoryFilter {
    /// Builds a filter from a raw key, mapping the `"all"` sentinel to [`CategoryFilter::All`].
    ///
    /// Unknown keys are accepted as-is; the server answers them with an empty list.
    pub fn from_key(key: impl Into<CategoryKey>) -> Self {
        let key = key.into();
        if key.is_all() {
            Self::All
        } else {
            Self::Category(key)
        }
    }

    /// Returns the key this filter represents (`"all"` for [`CategoryFilter::All`]).
    #[must_use]
    pub fn key(&self) -> CategoryKey {
        match self {
            Self::All => CategoryKey::all(),
            Self::Category(key) => key.clone(),
        }
    }

    /// Value sent as the `category` query parameter.
    #[must_use]
    pub fn query_value(&self) -> &str {
        match self {
            Self::All => CategoryKey::ALL,
            Self::Category(key) => key.as_str(),
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Returns `true` if the image belongs to the filtered set.
    #[must_use]
    pub fn matches(&self, image: &GalleryImage) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => &image.category_key == key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(category: &str) -> GalleryImage {
        GalleryImage::new(1, "https://cdn.example/1.jpg", "one", category)
    }

    #[test]
    fn all_sentinel_maps_to_inactive_filter() {
        let filter = CategoryFilter::from_key("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(!filter.is_active());
        assert_eq!(filter.query_value(), "all");
    }

    #[test]
    fn category_filter_matches_only_its_key() {
        let filter = CategoryFilter::from_key("nature");
        assert!(filter.is_active());
        assert!(filter.matches(&image("nature")));
        assert!(!filter.matches(&image("events")));
    }

    #[test]
    fn all_filter_matches_everything() {
        assert!(CategoryFilter::All.matches(&image("anything")));
    }

    #[test]
    fn key_round_trips_through_from_key() {
        let filter = CategoryFilter::from_key("festivals");
        assert_eq!(CategoryFilter::from_key(filter.key()), filter);
        assert!(CategoryFilter::All.key().is_all());
    }
}
