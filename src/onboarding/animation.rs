// SPDX-License-Identifier: MPL-2.0
//! Animation sequencer state.
//!
//! Every transition hides all groups at once and bumps a [`Generation`]. The
//! reveal that follows is deferred by the shell and carries the generation it
//! was scheduled for; [`AnimationState::reveal`] applies it only if no newer
//! transition happened in between. A stale reveal can therefore never show
//! content for a page that is no longer current, without any cancellation
//! bookkeeping.

use crate::config::defaults::{
    BOUNCE_AMPLITUDE, BOUNCE_HALF_PERIOD_MS, DEFAULT_IMAGE_DURATION_MS, DEFAULT_IMAGE_STAGGER_MS,
    DEFAULT_TEXT_DURATION_MS, DEFAULT_TEXT_STAGGER_MS,
};
use crate::domain::onboarding::{AnimationGroup, RevealDelay, RevealDuration, StaggerDelay};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Monotonic transition counter used to discard stale reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Easing curve applied to entrance progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, soft landing.
    #[default]
    EaseOut,
    /// Cubic ease-in-out.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `0.0..=1.0`) onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Entrance timing of one animation group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTiming {
    pub stagger: StaggerDelay,
    pub duration: RevealDuration,
    pub easing: Easing,
}

impl GroupTiming {
    /// Time from the reveal until this group's entrance has finished.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.stagger.as_duration() + self.duration.as_duration()
    }
}

/// Reveal delay plus per-group entrance timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTimings {
    pub reveal_delay: RevealDelay,
    pub image: GroupTiming,
    pub text: GroupTiming,
}

impl AnimationTimings {
    #[must_use]
    pub fn for_group(&self, group: AnimationGroup) -> GroupTiming {
        match group {
            AnimationGroup::Text => self.text,
            AnimationGroup::ImageStack | AnimationGroup::PageImage => self.image,
        }
    }
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            reveal_delay: RevealDelay::default(),
            image: GroupTiming {
                stagger: StaggerDelay::new(DEFAULT_IMAGE_STAGGER_MS),
                duration: RevealDuration::new(DEFAULT_IMAGE_DURATION_MS),
                easing: Easing::EaseOut,
            },
            text: GroupTiming {
                stagger: StaggerDelay::new(DEFAULT_TEXT_STAGGER_MS),
                duration: RevealDuration::new(DEFAULT_TEXT_DURATION_MS),
                easing: Easing::EaseInOut,
            },
        }
    }
}

/// A reveal the shell must deliver back after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub generation: Generation,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, Default)]
struct GroupState {
    visible: bool,
    revealed_at: Option<Instant>,
}

/// Visibility of every animation group plus the reveal guard.
#[derive(Debug, Clone)]
pub struct AnimationState {
    groups: BTreeMap<AnimationGroup, GroupState>,
    generation: Generation,
    pending: Option<Generation>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Creates a state with every group hidden and nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: AnimationGroup::ALL
                .iter()
                .map(|group| (*group, GroupState::default()))
                .collect(),
            generation: Generation::default(),
            pending: None,
        }
    }

    /// Hides every group immediately and supersedes any pending reveal.
    ///
    /// Returns the generation the next reveal must carry.
    pub fn hide_all(&mut self) -> Generation {
        self.generation = self.generation.next();
        for state in self.groups.values_mut() {
            *state = GroupState::default();
        }
        self.pending = Some(self.generation);
        self.generation
    }

    /// Shows `groups` if `generation` is the pending reveal.
    ///
    /// Returns `false` for stale or already applied generations, leaving the
    /// state untouched.
    pub fn reveal(&mut self, generation: Generation, groups: &[AnimationGroup], now: Instant) -> bool {
        if self.pending != Some(generation) {
            return false;
        }
        self.pending = None;
        for group in groups {
            self.groups.insert(
                *group,
                GroupState {
                    visible: true,
                    revealed_at: Some(now),
                },
            );
        }
        true
    }

    #[must_use]
    pub fn is_visible(&self, group: AnimationGroup) -> bool {
        self.groups.get(&group).is_some_and(|state| state.visible)
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation of the reveal still waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Generation> {
        self.pending
    }

    /// Time since `group` was revealed, or `None` while hidden.
    #[must_use]
    pub fn revealed_for(&self, group: AnimationGroup, now: Instant) -> Option<Duration> {
        let state = self.groups.get(&group)?;
        if !state.visible {
            return None;
        }
        state
            .revealed_at
            .map(|at| now.saturating_duration_since(at))
    }

    /// Eased entrance progress of `group` in `0.0..=1.0`.
    ///
    /// Hidden groups report `0.0`; a visible group stays at `0.0` until its
    /// stagger has elapsed.
    #[must_use]
    pub fn progress(&self, group: AnimationGroup, timing: &GroupTiming, now: Instant) -> f32 {
        let Some(elapsed) = self.revealed_for(group, now) else {
            return 0.0;
        };
        let Some(running) = elapsed.checked_sub(timing.stagger.as_duration()) else {
            return 0.0;
        };
        let t = running.as_secs_f32() / timing.duration.as_duration().as_secs_f32();
        timing.easing.apply(t)
    }

    /// Returns true when no reveal is pending and every visible group has
    /// finished its entrance.
    #[must_use]
    pub fn is_settled(&self, timings: &AnimationTimings, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.groups.keys().all(|group| {
            self.revealed_for(*group, now)
                .is_none_or(|elapsed| elapsed >= timings.for_group(*group).total())
        })
    }
}

/// Endless up-and-down motion of the layered artwork.
///
/// Starts at `+amplitude`, eases to `-amplitude` over one half period and
/// back again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    amplitude: f32,
    half_period: Duration,
}

impl Default for Bounce {
    fn default() -> Self {
        Self {
            amplitude: BOUNCE_AMPLITUDE,
            half_period: Duration::from_millis(BOUNCE_HALF_PERIOD_MS),
        }
    }
}

impl Bounce {
    #[must_use]
    pub fn new(amplitude: f32, half_period: Duration) -> Self {
        Self {
            amplitude,
            half_period,
        }
    }

    /// Vertical offset after the motion has run for `elapsed`.
    #[must_use]
    pub fn offset(&self, elapsed: Duration) -> f32 {
        let phase = elapsed.as_secs_f32() / self.half_period.as_secs_f32();
        let cycle = phase % 2.0;
        let t = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        self.amplitude - 2.0 * self.amplitude * Easing::EaseInOut.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const TEXT: AnimationGroup = AnimationGroup::Text;
    const IMAGE: AnimationGroup = AnimationGroup::PageImage;

    #[test]
    fn new_state_is_hidden_without_pending_reveal() {
        let state = AnimationState::new();
        for group in AnimationGroup::ALL {
            assert!(!state.is_visible(group));
        }
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn reveal_requires_matching_generation() {
        let mut state = AnimationState::new();
        let generation = state.hide_all();
        let now = Instant::now();

        assert!(state.reveal(generation, &[TEXT, IMAGE], now));
        assert!(state.is_visible(TEXT));
        assert!(state.is_visible(IMAGE));
        assert!(!state.is_visible(AnimationGroup::ImageStack));
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn superseded_reveal_is_ignored() {
        let mut state = AnimationState::new();
        let first = state.hide_all();
        let second = state.hide_all();
        let now = Instant::now();

        assert!(!state.reveal(first, &[TEXT], now));
        assert!(!state.is_visible(TEXT));
        assert!(state.reveal(second, &[TEXT], now));
        assert!(state.is_visible(TEXT));
    }

    #[test]
    fn reveal_applies_only_once() {
        let mut state = AnimationState::new();
        let generation = state.hide_all();
        let now = Instant::now();
        assert!(state.reveal(generation, &[TEXT], now));
        assert!(!state.reveal(generation, &[IMAGE], now));
        assert!(!state.is_visible(IMAGE));
    }

    #[test]
    fn hide_all_clears_visible_groups() {
        let mut state = AnimationState::new();
        let generation = state.hide_all();
        state.reveal(generation, &[TEXT], Instant::now());
        state.hide_all();
        assert!(!state.is_visible(TEXT));
    }

    #[test]
    fn progress_waits_for_stagger_then_completes() {
        let timings = AnimationTimings::default();
        let text = timings.for_group(TEXT);
        let mut state = AnimationState::new();
        let generation = state.hide_all();
        let start = Instant::now();
        state.reveal(generation, &[TEXT], start);

        assert_abs_diff_eq!(state.progress(TEXT, &text, start), 0.0, epsilon = F32_EPSILON);
        let during_stagger = start + text.stagger.as_duration() / 2;
        assert_abs_diff_eq!(
            state.progress(TEXT, &text, during_stagger),
            0.0,
            epsilon = F32_EPSILON
        );
        let done = start + text.total();
        assert_abs_diff_eq!(state.progress(TEXT, &text, done), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn progress_of_hidden_group_is_zero() {
        let timings = AnimationTimings::default();
        let state = AnimationState::new();
        let later = Instant::now() + Duration::from_secs(10);
        assert_abs_diff_eq!(
            state.progress(IMAGE, &timings.image, later),
            0.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn settles_after_longest_entrance() {
        let timings = AnimationTimings::default();
        let mut state = AnimationState::new();
        let generation = state.hide_all();
        assert!(!state.is_settled(&timings, Instant::now()));

        let start = Instant::now();
        state.reveal(generation, &[TEXT, IMAGE], start);
        assert!(!state.is_settled(&timings, start));

        let end = start + timings.text.total().max(timings.image.total());
        assert!(state.is_settled(&timings, end));
    }

    #[test]
    fn easing_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(easing.apply(7.0), 1.0, epsilon = F32_EPSILON);
        }
        assert_abs_diff_eq!(Easing::EaseInOut.apply(0.5), 0.5, epsilon = F32_EPSILON);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn bounce_swings_between_amplitudes() {
        let bounce = Bounce::new(10.0, Duration::from_secs(1));
        assert_abs_diff_eq!(bounce.offset(Duration::ZERO), 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(bounce.offset(Duration::from_secs(1)), -10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(bounce.offset(Duration::from_secs(2)), 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(bounce.offset(Duration::from_millis(500)), 0.0, epsilon = 1e-4);
    }
}
