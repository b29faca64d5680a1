// SPDX-License-Identifier: MPL-2.0
//! Carousel and animation state machine behind the onboarding screen.
//!
//! - [`pages`]: the deck and the current position
//! - [`coordinator`]: the [`Carousel`] arbitrating timer, button and direct triggers
//! - [`animation`]: hide/reveal sequencing guarded by a generation counter
//! - [`slides`]: the built-in localized deck
//!
//! Nothing here depends on the GUI toolkit; the shell delivers timer ticks,
//! input and deferred reveals, and reads the state back when rendering.

pub mod animation;
pub mod coordinator;
pub mod pages;
pub mod slides;

pub use animation::{
    AnimationState, AnimationTimings, Bounce, Easing, Generation, GroupTiming, ScheduledReveal,
};
pub use coordinator::{Carousel, CarouselSettings, Effect, Transition, Trigger};
pub use pages::PageStore;
