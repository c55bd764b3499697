// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the application ports.
//!
//! - [`http`] - `reqwest` client for the remote gallery API
//! - [`offline`] - failing stand-in used when the client cannot be built

pub mod http;
pub mod offline;

pub use http::HttpGalleryApi;
pub use offline::OfflineGalleryApi;
