// SPDX-License-Identifier: MPL-2.0
//! Category store: the list of gallery categories, fetched once per visit.

use super::sequence::{RequestSeq, RequestSequence};
use super::LoadOutcome;
use crate::application::port::ApiResult;
use crate::domain::gallery::Category;
use crate::error::NetworkError;

/// Holds the categories returned by the API, in display order.
///
/// The list is populated once and never mutated afterwards. A failed load
/// leaves the store empty and records the error until a retry succeeds.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
    loaded: bool,
    sequence: RequestSequence,
    last_error: Option<NetworkError>,
}

impl CategoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load. Returns `None` when categories are already loaded.
    pub fn begin_load(&mut self) -> Option<RequestSeq> {
        if self.loaded {
            None
        } else {
            Some(self.sequence.issue())
        }
    }

    /// Applies the result of the load tagged `seq`.
    pub fn apply(&mut self, seq: RequestSeq, result: ApiResult<Vec<Category>>) -> LoadOutcome {
        if !self.sequence.is_current(seq) || self.loaded {
            return LoadOutcome::Stale {
                seq,
                latest: self.sequence.latest(),
            };
        }

        match result {
            Ok(categories) => {
                let count = categories.len();
                self.categories = categories;
                self.loaded = true;
                self.last_error = None;
                LoadOutcome::Applied { count }
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Returns `true` once a load has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Error of the latest applied load, cleared once a load succeeds.
    #[must_use]
    pub fn last_error(&self) -> Option<&NetworkError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Category> {
        vec![Category::new("all", "All"), Category::new("nature", "Nature")]
    }

    #[test]
    fn successful_load_populates_store_once() {
        let mut store = CategoryStore::new();
        let seq = store.begin_load().expect("first load should be issued");
        let outcome = store.apply(seq, Ok(sample()));

        assert_eq!(outcome, LoadOutcome::Applied { count: 2 });
        assert!(store.is_loaded());
        assert_eq!(store.categories().len(), 2);
        assert!(store.begin_load().is_none());
    }

    #[test]
    fn failed_load_can_be_retried() {
        let mut store = CategoryStore::new();
        let seq = store.begin_load().expect("first load should be issued");
        let outcome = store.apply(seq, Err(NetworkError::Timeout));

        assert_eq!(outcome, LoadOutcome::Failed(NetworkError::Timeout));
        assert!(!store.is_loaded());
        assert_eq!(store.last_error(), Some(&NetworkError::Timeout));

        let retry = store.begin_load().expect("retry should be issued");
        store.apply(retry, Ok(sample()));
        assert!(store.is_loaded());
        assert!(store.last_error().is_none());
    }

    #[test]
    fn superseded_load_is_stale() {
        let mut store = CategoryStore::new();
        let first = store.begin_load().expect("load issued");
        let second = store.begin_load().expect("load issued");

        assert!(matches!(
            store.apply(first, Ok(sample())),
            LoadOutcome::Stale { .. }
        ));
        assert_eq!(
            store.apply(second, Ok(sample())),
            LoadOutcome::Applied { count: 2 }
        );
    }
}
