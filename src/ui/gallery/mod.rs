// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: category filter bar, image grid and lightbox.
//!
//! - [`component`] - State, messages and fetch orchestration
//! - [`view`] - Header, filter bar, grid and home preview
//! - [`lightbox`] - Full-size overlay with prev/next navigation

pub mod component;
pub mod lightbox;
pub mod view;

pub use component::{Effect, Message, State, StateConfig};
pub use view::ViewEnv;
