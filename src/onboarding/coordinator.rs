// SPDX-License-Identifier: MPL-2.0
//! Transition coordinator.
//!
//! [`Carousel`] is the single arbiter of page changes. Timer ticks, the
//! advance button and direct selections all end up in
//! [`Carousel::request_page_change`], which commits the page and hides the
//! entrance animations in the same call so a renderer can never observe the
//! new page with the previous page's animation flags.

use super::animation::{AnimationState, AnimationTimings, Bounce, Generation, ScheduledReveal};
use super::pages::PageStore;
use crate::domain::onboarding::{AnimationGroup, AutoAdvanceInterval, Slide, SlideDeck};
use std::time::{Duration, Instant};

/// Source of a page-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Periodic auto-advance; wraps from the last page to the first.
    Timer,
    /// The primary "Next / Get Started" control.
    ManualAdvance,
    /// Swipe, page-dot click or arrow key targeting a specific page.
    Direct,
}

impl Trigger {
    /// Returns true for triggers caused by the user.
    #[must_use]
    pub fn is_user_initiated(self) -> bool {
        !matches!(self, Trigger::Timer)
    }
}

/// A committed page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub trigger: Trigger,
    pub generation: Generation,
}

/// Outcome of a trigger, handed back to the caller to act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The page changed; the reveal must be delivered after its delay.
    Transitioned(Transition, ScheduledReveal),
    /// Advance was requested on the last page: onboarding is finished.
    Complete,
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselSettings {
    pub auto_advance: AutoAdvanceInterval,
    /// Restart the auto-advance countdown after user-initiated transitions.
    pub restart_timer_on_interaction: bool,
    pub timings: AnimationTimings,
}

/// Page position, animation state and the rules that tie them together.
#[derive(Debug, Clone)]
pub struct Carousel {
    pages: PageStore,
    animation: AnimationState,
    settings: CarouselSettings,
    bounce: Bounce,
    last_transition: Option<Transition>,
    timer_epoch: u64,
}

impl Carousel {
    /// Creates a carousel on the first slide with every group hidden.
    ///
    /// Call [`mount`](Self::mount) once the screen is shown to start the
    /// first entrance.
    #[must_use]
    pub fn new(deck: SlideDeck, settings: CarouselSettings) -> Self {
        Self {
            pages: PageStore::new(deck),
            animation: AnimationState::new(),
            settings,
            bounce: Bounce::default(),
            last_transition: None,
            timer_epoch: 0,
        }
    }

    /// Plays the entrance of the initial page.
    pub fn mount(&mut self) -> ScheduledReveal {
        tracing::debug!(page = self.pages.current_page(), "onboarding mounted");
        self.schedule_reveal()
    }

    /// Auto-advance tick: moves to the next page, wrapping to the first.
    pub fn on_timer_tick(&mut self) -> Effect {
        let next = self.pages.next_wrapping();
        self.request_page_change(next, Trigger::Timer)
    }

    /// Advance button: moves forward, or completes on the last page.
    pub fn on_manual_advance(&mut self) -> Effect {
        match self.pages.next_linear() {
            Some(next) => self.request_page_change(next, Trigger::ManualAdvance),
            None => {
                tracing::info!(page = self.pages.current_page(), "onboarding completed");
                Effect::Complete
            }
        }
    }

    /// Direct selection of `index` by swipe, page dot or keyboard.
    pub fn on_direct_select(&mut self, index: usize) -> Effect {
        self.request_page_change(index, Trigger::Direct)
    }

    /// Single mutation path for every page change.
    ///
    /// Out-of-range requests are dropped and requests for the current page
    /// are no-ops; neither touches the state.
    pub fn request_page_change(&mut self, index: usize, trigger: Trigger) -> Effect {
        let from = self.pages.current_page();
        if index == from {
            return Effect::None;
        }
        if !self.pages.set_page(index) {
            tracing::warn!(
                index,
                page_count = self.pages.page_count(),
                ?trigger,
                "dropping out-of-range page request"
            );
            return Effect::None;
        }

        let reveal = self.schedule_reveal();
        let transition = Transition {
            from,
            to: index,
            trigger,
            generation: reveal.generation,
        };
        self.last_transition = Some(transition);

        if trigger.is_user_initiated() && self.settings.restart_timer_on_interaction {
            self.timer_epoch = self.timer_epoch.wrapping_add(1);
        }

        tracing::debug!(from, to = index, ?trigger, generation = reveal.generation.value(), "page transition committed");
        Effect::Transitioned(transition, reveal)
    }

    /// Delivers a deferred reveal.
    ///
    /// Returns `false` when a newer transition superseded `generation`.
    pub fn on_reveal_due(&mut self, generation: Generation, now: Instant) -> bool {
        let groups = self.pages.current_slide().animation_groups();
        let applied = self.animation.reveal(generation, groups, now);
        if !applied {
            tracing::debug!(
                stale = generation.value(),
                current = self.animation.generation().value(),
                "ignoring superseded reveal"
            );
        }
        applied
    }

    fn schedule_reveal(&mut self) -> ScheduledReveal {
        let generation = self.animation.hide_all();
        ScheduledReveal {
            generation,
            delay: self.settings.timings.reveal_delay.as_duration(),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pages.current_page()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.pages.is_last()
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        self.pages.current_slide()
    }

    #[must_use]
    pub fn pages(&self) -> &PageStore {
        &self.pages
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    #[must_use]
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// The most recent committed transition.
    #[must_use]
    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    /// Identity of the current auto-advance countdown. Changes whenever the
    /// countdown must restart.
    #[must_use]
    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    #[must_use]
    pub fn auto_advance_period(&self) -> Duration {
        self.settings.auto_advance.as_duration()
    }

    #[must_use]
    pub fn is_visible(&self, group: AnimationGroup) -> bool {
        self.animation.is_visible(group)
    }

    /// Eased entrance progress of `group`.
    #[must_use]
    pub fn progress(&self, group: AnimationGroup, now: Instant) -> f32 {
        let timing = self.settings.timings.for_group(group);
        self.animation.progress(group, &timing, now)
    }

    /// Bounce offset of the layered artwork, `0.0` while it is hidden.
    #[must_use]
    pub fn bounce_offset(&self, now: Instant) -> f32 {
        self.animation
            .revealed_for(AnimationGroup::ImageStack, now)
            .map_or(0.0, |elapsed| self.bounce.offset(elapsed))
    }

    /// Returns true while something on screen is still moving.
    #[must_use]
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.animation.is_visible(AnimationGroup::ImageStack)
            || !self.animation.is_settled(&self.settings.timings, now)
    }
}
