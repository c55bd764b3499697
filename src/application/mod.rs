// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions for the remote gallery API
//! - [`store`]: Fetched data holders with stale-response guarding
//! - [`query`]: Read-side services (lightbox navigation, category labels)
//! - [`session`]: [`GallerySession`], the state owned by the UI
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use community_gallery::application::GallerySession;
//! use community_gallery::domain::gallery::{GalleryImage, ImageId};
//!
//! let mut session = GallerySession::new();
//! let ticket = session.set_filter("nature");
//! let images = vec![GalleryImage::new(1, "https://cdn.example/1.jpg", "Lake", "nature")];
//! session.apply_images(&ticket, Ok(images));
//!
//! assert_eq!(session.open(ImageId(1)), Some(0));
//! ```

pub mod port;
pub mod query;
pub mod session;
pub mod store;

pub use session::GallerySession;
