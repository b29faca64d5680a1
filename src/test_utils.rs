// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and sample decks.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::domain::onboarding::{Slide, SlideDeck};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Deck of `count` single-image slides with placeholder copy.
///
/// # Panics
///
/// Panics when `count` is zero.
pub fn sample_deck(count: usize) -> SlideDeck {
    let slides = (0..count)
        .map(|i| Slide::new(format!("image-{i}"), format!("Title {i}"), "subtitle"))
        .collect();
    SlideDeck::new(slides).expect("sample deck needs at least one slide")
}
