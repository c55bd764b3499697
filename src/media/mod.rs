// SPDX-License-Identifier: MPL-2.0
//! Image data handling for the gallery.
//!
//! Pictures are downloaded as encoded bytes through the gallery API and kept
//! in a bounded cache; Iced decodes them when they are first drawn.

pub mod thumbnails;

pub use thumbnails::{ThumbnailCache, ThumbnailStatus};
