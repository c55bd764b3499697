// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! The lightbox is either `Closed` or `Open` at a position of the current
//! image list. The controller does not own the list: every transition takes
//! the list the grid is rendering, so navigation always follows server order
//! and a list that changed underneath an open lightbox is detected.
//!
//! ```text
//! Closed --open(id)--> Open(i)
//! Open(i) --next--> Open((i + 1) mod N)
//! Open(i) --previous--> Open((i - 1 + N) mod N)
//! Open(i) --close/Escape/backdrop--> Closed
//! ```

use crate::domain::gallery::{GalleryImage, ImageId};

/// Why the lightbox was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Escape key.
    Escape,
    /// Explicit close control.
    CloseButton,
    /// Click on the dimmed area around the image.
    Backdrop,
    /// The backing list was replaced by a new response.
    ListReplaced,
    /// The current image is no longer part of the backing list.
    ImageGone,
    /// The user navigated away from the gallery screen.
    ScreenChanged,
}

/// Lightbox state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        /// Position of `image` in the list it was opened from.
        index: usize,
        image: GalleryImage,
    },
}

/// Snapshot of the lightbox for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxInfo {
    pub is_open: bool,
    /// Current position (0-indexed), if open.
    pub current_index: Option<usize>,
    /// Number of images in the backing list.
    pub total_count: usize,
    /// Whether prev/next controls should be rendered (`total_count > 1`).
    pub show_navigation: bool,
}

/// Drives the lightbox transitions.
#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    state: LightboxState,
}

impl LightboxController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// The displayed image, `None` when closed.
    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryImage> {
        match &self.state {
            LightboxState::Open { image, .. } => Some(image),
            LightboxState::Closed => None,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            LightboxState::Open { index, .. } => Some(*index),
            LightboxState::Closed => None,
        }
    }

    /// Opens the lightbox on the clicked image.
    ///
    /// The position is found by searching `images` for `id`, so duplicate ids
    /// resolve to the first match. Returns the opened index, or `None` (and
    /// stays closed) if `id` is not in the list.
    pub fn open(&mut self, id: ImageId, images: &[GalleryImage]) -> Option<usize> {
        let index = images.iter().position(|image| image.id == id)?;
        self.state = LightboxState::Open {
            index,
            image: images[index].clone(),
        };
        Some(index)
    }

    /// Moves to the next image, wrapping to the first.
    ///
    /// No-op when closed or when the list has a single image. Force-closes when
    /// the current image is no longer in `images`.
    pub fn next(&mut self, images: &[GalleryImage]) -> Option<usize> {
        self.step(images, Direction::Forward)
    }

    /// Moves to the previous image, wrapping to the last.
    ///
    /// Same guards as [`LightboxController::next`].
    pub fn previous(&mut self, images: &[GalleryImage]) -> Option<usize> {
        self.step(images, Direction::Backward)
    }

    /// Closes the lightbox. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        was_open
    }

    /// Re-checks the open state against a (possibly changed) list.
    ///
    /// Closes when the current image id is gone; otherwise re-anchors the index
    /// to the image's new position. Returns the close reason if it closed.
    pub fn sync(&mut self, images: &[GalleryImage]) -> Option<CloseReason> {
        let (current, id) = match &self.state {
            LightboxState::Open { index, image } => (*index, image.id),
            LightboxState::Closed => return None,
        };
        let anchored = images
            .get(current)
            .filter(|candidate| candidate.id == id)
            .map(|_| current)
            .or_else(|| images.iter().position(|candidate| candidate.id == id));
        match anchored {
            Some(index) => {
                self.state = LightboxState::Open {
                    index,
                    image: images[index].clone(),
                };
                None
            }
            None => {
                self.state = LightboxState::Closed;
                Some(CloseReason::ImageGone)
            }
        }
    }

    /// Returns a snapshot for rendering.
    #[must_use]
    pub fn info(&self, images: &[GalleryImage]) -> LightboxInfo {
        LightboxInfo {
            is_open: self.is_open(),
            current_index: self.current_index(),
            total_count: images.len(),
            show_navigation: images.len() > 1,
        }
    }

    fn step(&mut self, images: &[GalleryImage], direction: Direction) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        if self.sync(images).is_some() {
            return None;
        }
        let index = self.current_index()?;

        let total = images.len();
        let target = match direction {
            Direction::Forward => (index + 1) % total,
            Direction::Backward => (index + total - 1) % total,
        };
        self.state = LightboxState::Open {
            index: target,
            image: images[target].clone(),
        };
        Some(target)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}
