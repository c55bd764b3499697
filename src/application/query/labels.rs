// SPDX-License-Identifier: MPL-2.0
//! Category label mapping.
//!
//! Labels resolve in three steps: a translation for the category key, then
//! the category's stored title, then the raw key. The lookup never fails.

use crate::domain::gallery::{Category, CategoryKey};

/// A category prepared for the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCategory {
    pub key: CategoryKey,
    pub label: String,
}

/// Returns the display label for `key`.
///
/// `translate` returns `None` when no translation exists. Empty translations
/// and empty stored titles count as missing.
pub fn label_for<F>(key: &CategoryKey, categories: &[Category], translate: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(translated) = translate(key.as_str()).filter(|value| !value.is_empty()) {
        return translated;
    }

    categories
        .iter()
        .find(|category| &category.key == key)
        .map(|category| category.title.as_str())
        .filter(|title| !title.is_empty())
        .map_or_else(|| key.as_str().to_string(), str::to_string)
}

/// Labels every category in display order.
pub fn display_categories<F>(categories: &[Category], translate: F) -> Vec<DisplayCategory>
where
    F: Fn(&str) -> Option<String>,
{
    categories
        .iter()
        .map(|category| DisplayCategory {
            key: category.key.clone(),
            label: label_for(&category.key, categories, &translate),
        })
        .collect()
}
