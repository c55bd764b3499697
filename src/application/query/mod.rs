// SPDX-License-Identifier: MPL-2.0
//! Query services over fetched gallery data.
//!
//! # Available Services
//!
//! - [`lightbox`]: Lightbox navigation (`LightboxController`)
//! - [`labels`]: Category label mapping (`label_for`)
//!
//! These services never fetch; they operate on lists owned by the stores.

pub mod labels;
pub mod lightbox;

// Re-export main types
pub use labels::{display_categories, label_for, DisplayCategory};
pub use lightbox::{CloseReason, LightboxController, LightboxInfo, LightboxState};
