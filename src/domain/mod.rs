// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`Category`](gallery::Category),
//!   [`GalleryImage`](gallery::GalleryImage), [`CategoryFilter`](gallery::CategoryFilter))

pub mod gallery;
