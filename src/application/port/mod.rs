// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`gallery`]: Remote gallery API (categories, images, image bytes)
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return boxed futures so callers can wrap them in Iced `Task`s

pub mod gallery;

pub use gallery::{ApiFuture, ApiResult, GalleryApi};
