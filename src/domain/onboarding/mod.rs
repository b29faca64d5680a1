// SPDX-License-Identifier: MPL-2.0
//! Onboarding domain types.
//!
//! Slides, the non-empty deck, animation group keys and the timing value
//! objects. These types are independent of any presentation framework.

pub mod newtypes;
pub mod slide;

pub use newtypes::{AutoAdvanceInterval, RevealDelay, RevealDuration, StaggerDelay};
pub use slide::{AnimationGroup, Artwork, Slide, SlideDeck, SlideId, StackLayer};
