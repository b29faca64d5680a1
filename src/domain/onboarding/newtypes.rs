// SPDX-License-Identifier: MPL-2.0
//! Onboarding timing newtypes.
//!
//! This module provides type-safe wrappers for the carousel and animation
//! timing values read from configuration, ensuring they are always within
//! valid ranges.

use crate::config::defaults::{
    DEFAULT_AUTO_ADVANCE_SECS, DEFAULT_REVEAL_DELAY_MS, DEFAULT_TEXT_DURATION_MS,
    MAX_AUTO_ADVANCE_SECS, MAX_REVEAL_DELAY_MS, MAX_REVEAL_DURATION_MS, MAX_STAGGER_MS,
    MIN_AUTO_ADVANCE_SECS, MIN_REVEAL_DELAY_MS, MIN_REVEAL_DURATION_MS,
};
use std::time::Duration;

// =============================================================================
// AutoAdvanceInterval
// =============================================================================

/// Period of the auto-advance timer in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use iced_onboarding::domain::onboarding::AutoAdvanceInterval;
///
/// let interval = AutoAdvanceInterval::new(3);
/// assert_eq!(interval.value(), 3);
///
/// // Values outside range are clamped
/// let too_high = AutoAdvanceInterval::new(600);
/// assert_eq!(too_high.value(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoAdvanceInterval(u32);

impl AutoAdvanceInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_AUTO_ADVANCE_SECS, MAX_AUTO_ADVANCE_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoAdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTO_ADVANCE_SECS)
    }
}

// =============================================================================
// RevealDelay
// =============================================================================

/// Delay between a committed transition and the reveal of its content, in
/// milliseconds (0–1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelay(u32);

impl RevealDelay {
    /// Creates a new reveal delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_REVEAL_DELAY_MS, MAX_REVEAL_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_DELAY_MS)
    }
}

// =============================================================================
// RevealDuration
// =============================================================================

/// Length of an entrance animation in milliseconds (100–3000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDuration(u32);

impl RevealDuration {
    /// Creates a new entrance duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_REVEAL_DURATION_MS, MAX_REVEAL_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for RevealDuration {
    fn default() -> Self {
        Self(DEFAULT_TEXT_DURATION_MS)
    }
}

// =============================================================================
// StaggerDelay
// =============================================================================

/// Extra per-group delay applied after the reveal fires, in milliseconds
/// (0–2000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaggerDelay(u32);

impl StaggerDelay {
    /// Creates a new stagger delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.min(MAX_STAGGER_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}
