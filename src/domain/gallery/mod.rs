// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`types`]: [`Category`], [`CategoryKey`], [`GalleryImage`], [`ImageId`]
//! - [`filter`]: [`CategoryFilter`]

pub mod filter;
pub mod types;

pub use filter::CategoryFilter;
pub use types::{Category, CategoryKey, GalleryImage, ImageId};
