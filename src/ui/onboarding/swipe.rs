// SPDX-License-Identifier: MPL-2.0
//! Horizontal drag recognition for the carousel.
//!
//! A drag starts on a left press that no widget captured and ends on release.
//! Only the horizontal distance between the two matters: dragging left past
//! the threshold asks for the next page, dragging right for the previous one.

use crate::config::defaults::SWIPE_THRESHOLD;
use iced::Point;

/// Direction of a recognized swipe, expressed as the page it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Tracks the cursor between a press and the matching release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    cursor: Option<Point>,
    origin: Option<Point>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    #[must_use]
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            cursor: None,
            origin: None,
            threshold,
        }
    }

    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// The cursor left the window; any drag in progress is abandoned.
    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.origin = None;
    }

    pub fn press(&mut self) {
        self.origin = self.cursor;
    }

    /// Ends the drag and reports a swipe if it was long enough.
    pub fn release(&mut self) -> Option<SwipeDirection> {
        let origin = self.origin.take()?;
        let cursor = self.cursor?;
        let dx = cursor.x - origin.x;

        if dx <= -self.threshold {
            Some(SwipeDirection::Next)
        } else if dx >= self.threshold {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}
