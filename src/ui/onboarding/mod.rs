// SPDX-License-Identifier: MPL-2.0
//! Onboarding screen component.
//!
//! Wraps the [`Carousel`] state machine with everything the screen needs to
//! drive it: a clock for entrance progress, swipe recognition and the cached
//! artwork. Inputs arrive as [`Message`]s; anything the parent has to act on
//! comes back as an [`Event`].

pub mod artwork;
pub mod swipe;
mod view;

pub use artwork::ArtworkCache;
pub use swipe::{SwipeDirection, SwipeTracker};
pub use view::{view, Entrance, ViewContext};

use crate::domain::onboarding::SlideDeck;
use crate::onboarding::{Carousel, CarouselSettings, Effect, Generation, ScheduledReveal};
use iced::keyboard::{self, key::Named, Key};
use iced::mouse;
use std::time::Instant;

/// Messages handled by the onboarding screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The auto-advance countdown elapsed.
    AutoAdvance(Instant),
    /// The primary button was pressed.
    Advance,
    /// A page dot was clicked.
    SelectPage(usize),
    /// A deferred reveal is due.
    RevealDue(Generation),
    /// Animation frame while something is moving.
    Frame(Instant),
    /// Pointer and keyboard input not captured by a widget.
    RawEvent(iced::Event),
    ToggleAppearance,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Deliver [`Message::RevealDue`] after the given delay.
    ScheduleReveal(ScheduledReveal),
    /// The user finished onboarding.
    Completed,
    ToggleAppearance,
}

/// Onboarding screen state.
#[derive(Debug, Clone)]
pub struct State {
    carousel: Carousel,
    artwork: ArtworkCache,
    swipe: SwipeTracker,
    now: Instant,
}

impl State {
    #[must_use]
    pub fn new(deck: SlideDeck, settings: CarouselSettings) -> Self {
        let artwork = ArtworkCache::for_deck(&deck);
        Self {
            carousel: Carousel::new(deck, settings),
            artwork,
            swipe: SwipeTracker::new(),
            now: Instant::now(),
        }
    }

    /// Starts the entrance of the first page. Call once when the screen is shown.
    pub fn mount(&mut self) -> ScheduledReveal {
        self.carousel.mount()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AutoAdvance(now) => {
                self.now = now;
                let effect = self.carousel.on_timer_tick();
                self.handle_effect(effect)
            }
            Message::Advance => {
                let effect = self.carousel.on_manual_advance();
                self.handle_effect(effect)
            }
            Message::SelectPage(index) => {
                let effect = self.carousel.on_direct_select(index);
                self.handle_effect(effect)
            }
            Message::RevealDue(generation) => {
                self.now = Instant::now();
                self.carousel.on_reveal_due(generation, self.now);
                Event::None
            }
            Message::Frame(now) => {
                self.now = now;
                Event::None
            }
            Message::RawEvent(event) => match self.handle_raw_event(&event) {
                Some(direction) => self.handle_swipe(direction),
                None => Event::None,
            },
            Message::ToggleAppearance => Event::ToggleAppearance,
        }
    }

    fn handle_effect(&self, effect: Effect) -> Event {
        match effect {
            Effect::None => Event::None,
            Effect::Transitioned(_, reveal) => Event::ScheduleReveal(reveal),
            Effect::Complete => Event::Completed,
        }
    }

    /// Adjacent-page navigation from a swipe or arrow key. Never wraps and
    /// never completes.
    fn handle_swipe(&mut self, direction: SwipeDirection) -> Event {
        let pages = self.carousel.pages();
        let target = match direction {
            SwipeDirection::Next => pages.next_linear(),
            SwipeDirection::Previous => pages.previous(),
        };
        match target {
            Some(index) => {
                let effect = self.carousel.on_direct_select(index);
                self.handle_effect(effect)
            }
            None => Event::None,
        }
    }

    fn handle_raw_event(&mut self, event: &iced::Event) -> Option<SwipeDirection> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.swipe.cursor_moved(*position);
                None
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                self.swipe.cursor_left();
                None
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.swipe.press();
                None
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.swipe.release()
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => direction_for_key(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn artwork(&self) -> &ArtworkCache {
        &self.artwork
    }

    /// Clock used for entrance progress.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Returns true while frames must be requested to keep animating.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.carousel.needs_frames(self.now)
    }
}

/// Arrow keys move to the adjacent page.
fn direction_for_key(key: &Key) -> Option<SwipeDirection> {
    match key {
        Key::Named(Named::ArrowRight) => Some(SwipeDirection::Next),
        Key::Named(Named::ArrowLeft) => Some(SwipeDirection::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::onboarding::AnimationGroup;
    use crate::test_utils::sample_deck;
    use iced::Point;

    fn state(count: usize) -> State {
        State::new(sample_deck(count), CarouselSettings::default())
    }

    fn key_press(state: &mut State, named: Named) -> Event {
        match direction_for_key(&Key::Named(named)) {
            Some(direction) => state.handle_swipe(direction),
            None => Event::None,
        }
    }

    fn mouse(event: mouse::Event) -> Message {
        Message::RawEvent(iced::Event::Mouse(event))
    }

    fn swipe(state: &mut State, from_x: f32, to_x: f32) -> Event {
        state.update(mouse(mouse::Event::CursorMoved {
            position: Point::new(from_x, 200.0),
        }));
        state.update(mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));
        state.update(mouse(mouse::Event::CursorMoved {
            position: Point::new(to_x, 200.0),
        }));
        state.update(mouse(mouse::Event::ButtonReleased(mouse::Button::Left)))
    }

    #[test]
    fn advance_schedules_a_reveal_until_the_last_page() {
        let mut state = state(3);
        assert!(matches!(state.update(Message::Advance), Event::ScheduleReveal(_)));
        assert!(matches!(state.update(Message::Advance), Event::ScheduleReveal(_)));
        assert_eq!(state.update(Message::Advance), Event::Completed);
        assert_eq!(state.carousel().current_page(), 2);
    }

    #[test]
    fn auto_advance_wraps() {
        let mut state = state(2);
        state.update(Message::AutoAdvance(Instant::now()));
        state.update(Message::AutoAdvance(Instant::now()));
        assert_eq!(state.carousel().current_page(), 0);
    }

    #[test]
    fn reveal_due_shows_the_current_page() {
        let mut state = state(2);
        let Event::ScheduleReveal(reveal) = state.update(Message::SelectPage(1)) else {
            panic!("expected a scheduled reveal");
        };
        assert!(!state.carousel().is_visible(AnimationGroup::Text));
        state.update(Message::RevealDue(reveal.generation));
        assert!(state.carousel().is_visible(AnimationGroup::Text));
        assert!(state.needs_frames());
    }

    #[test]
    fn swipe_left_goes_to_next_page() {
        let mut state = state(3);
        assert!(matches!(swipe(&mut state, 400.0, 100.0), Event::ScheduleReveal(_)));
        assert_eq!(state.carousel().current_page(), 1);
    }

    #[test]
    fn swipe_right_on_first_page_does_nothing() {
        let mut state = state(3);
        assert_eq!(swipe(&mut state, 100.0, 400.0), Event::None);
        assert_eq!(state.carousel().current_page(), 0);
    }

    #[test]
    fn swipe_past_last_page_does_not_complete() {
        let mut state = state(2);
        state.update(Message::SelectPage(1));
        assert_eq!(swipe(&mut state, 400.0, 100.0), Event::None);
        assert_eq!(state.carousel().current_page(), 1);
    }

    #[test]
    fn arrow_keys_select_adjacent_pages() {
        let mut state = state(3);
        key_press(&mut state, Named::ArrowRight);
        key_press(&mut state, Named::ArrowRight);
        assert_eq!(state.carousel().current_page(), 2);
        assert_eq!(key_press(&mut state, Named::ArrowRight), Event::None);
        key_press(&mut state, Named::ArrowLeft);
        assert_eq!(state.carousel().current_page(), 1);
        assert_eq!(key_press(&mut state, Named::Enter), Event::None);
    }

    #[test]
    fn toggle_is_forwarded() {
        let mut state = state(1);
        assert_eq!(state.update(Message::ToggleAppearance), Event::ToggleAppearance);
    }

    #[test]
    fn frame_moves_the_clock() {
        let mut state = state(1);
        let later = state.now() + std::time::Duration::from_secs(1);
        state.update(Message::Frame(later));
        assert_eq!(state.now(), later);
    }
}
