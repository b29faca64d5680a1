// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-advance**: Carousel timer period bounds
//! - **Reveal**: Deferred reveal delay after a transition
//! - **Entrance**: Duration and stagger of the entrance animation per group
//! - **Bounce**: Idle bobbing of the layered artwork

// ==========================================================================
// Auto-advance Defaults
// ==========================================================================

/// Default period between automatic page advances (in seconds).
pub const DEFAULT_AUTO_ADVANCE_SECS: u32 = 3;

/// Minimum auto-advance period (in seconds).
pub const MIN_AUTO_ADVANCE_SECS: u32 = 1;

/// Maximum auto-advance period (in seconds).
pub const MAX_AUTO_ADVANCE_SECS: u32 = 60;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default delay between a transition and the reveal of its content (in ms).
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 100;

/// Minimum reveal delay (in ms). Zero still defers to the next update.
pub const MIN_REVEAL_DELAY_MS: u32 = 0;

/// Maximum reveal delay (in ms).
pub const MAX_REVEAL_DELAY_MS: u32 = 1_000;

// ==========================================================================
// Entrance Animation Defaults
// ==========================================================================

/// Default duration of the image entrance (in ms).
pub const DEFAULT_IMAGE_DURATION_MS: u32 = 800;

/// Default duration of the text entrance (in ms).
pub const DEFAULT_TEXT_DURATION_MS: u32 = 600;

/// Minimum entrance duration (in ms).
pub const MIN_REVEAL_DURATION_MS: u32 = 100;

/// Maximum entrance duration (in ms).
pub const MAX_REVEAL_DURATION_MS: u32 = 3_000;

/// Default extra delay before the image groups start (in ms).
pub const DEFAULT_IMAGE_STAGGER_MS: u32 = 0;

/// Default extra delay before the text group starts (in ms).
/// Text enters after the artwork to layer the entrance.
pub const DEFAULT_TEXT_STAGGER_MS: u32 = 150;

/// Maximum stagger delay (in ms).
pub const MAX_STAGGER_MS: u32 = 2_000;

// ==========================================================================
// Bounce Defaults
// ==========================================================================

/// Vertical travel of the layered artwork in each direction (in logical px).
pub const BOUNCE_AMPLITUDE: f32 = 10.0;

/// Duration of one half swing of the bounce (in ms).
pub const BOUNCE_HALF_PERIOD_MS: u64 = 1_000;

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Vertical distance content travels while it fades in (in logical px).
pub const ENTRANCE_OFFSET: f32 = 24.0;

/// Scale applied to artwork at the start of its entrance.
pub const ENTRANCE_MIN_SCALE: f32 = 0.85;

/// Horizontal drag distance needed before a swipe changes page (in logical px).
pub const SWIPE_THRESHOLD: f32 = 60.0;
