// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component events are turned into side effects here: deferred reveals
//! become tasks, completion unmounts the onboarding screen and the
//! appearance toggle switches the theme.

use super::{Message, Screen};
use crate::domain::onboarding::SlideDeck;
use crate::onboarding::{CarouselSettings, Generation, ScheduledReveal};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::onboarding::{self, Event as OnboardingEvent};
use crate::ui::theming::Appearance;
use iced::Task;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub onboarding: &'a mut Option<onboarding::State>,
    /// Incremented every time the onboarding screen is mounted.
    pub session: &'a mut u64,
    pub appearance: &'a mut Appearance,
    pub deck: &'a SlideDeck,
    pub settings: CarouselSettings,
}

/// Mounts a fresh onboarding screen and schedules its first entrance.
pub fn mount_onboarding(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut state = onboarding::State::new(ctx.deck.clone(), ctx.settings);
    let reveal = state.mount();

    *ctx.session = ctx.session.wrapping_add(1);
    *ctx.onboarding = Some(state);
    *ctx.screen = Screen::Onboarding;
    tracing::info!(session = *ctx.session, pages = ctx.deck.len(), "onboarding shown");

    schedule_reveal(*ctx.session, reveal)
}

/// Delivers `reveal` back to the application once its delay has elapsed.
pub fn schedule_reveal(session: u64, reveal: ScheduledReveal) -> Task<Message> {
    let ScheduledReveal { generation, delay } = reveal;
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::RevealDue {
            session,
            generation,
        },
    )
}

pub fn handle_onboarding_message(
    ctx: &mut UpdateContext<'_>,
    message: onboarding::Message,
) -> Task<Message> {
    let Some(state) = ctx.onboarding.as_mut() else {
        tracing::debug!(?message, "dropping message for unmounted onboarding screen");
        return Task::none();
    };

    match state.update(message) {
        OnboardingEvent::None => Task::none(),
        OnboardingEvent::ScheduleReveal(reveal) => schedule_reveal(*ctx.session, reveal),
        OnboardingEvent::Completed => {
            *ctx.onboarding = None;
            *ctx.screen = Screen::Home;
            Task::none()
        }
        OnboardingEvent::ToggleAppearance => {
            ctx.appearance.toggle();
            Task::none()
        }
    }
}

/// Forwards a deferred reveal unless it belongs to an earlier session.
pub fn handle_reveal_due(
    ctx: &mut UpdateContext<'_>,
    session: u64,
    generation: Generation,
) -> Task<Message> {
    if session != *ctx.session {
        tracing::debug!(
            session,
            current = *ctx.session,
            "dropping reveal from a previous onboarding session"
        );
        return Task::none();
    }
    handle_onboarding_message(ctx, onboarding::Message::RevealDue(generation))
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::None => Task::none(),
        HomeEvent::ReplayOnboarding => mount_onboarding(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::onboarding::AnimationGroup;
    use crate::test_utils::sample_deck;
    use crate::ui::theming::ThemeMode;

    struct Harness {
        screen: Screen,
        onboarding: Option<onboarding::State>,
        session: u64,
        appearance: Appearance,
        deck: SlideDeck,
    }

    impl Harness {
        fn new(pages: usize) -> Self {
            Self {
                screen: Screen::Home,
                onboarding: None,
                session: 0,
                appearance: Appearance::new(ThemeMode::Light),
                deck: sample_deck(pages),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                screen: &mut self.screen,
                onboarding: &mut self.onboarding,
                session: &mut self.session,
                appearance: &mut self.appearance,
                deck: &self.deck,
                settings: CarouselSettings::default(),
            }
        }

        fn send(&mut self, message: onboarding::Message) {
            let _ = handle_onboarding_message(&mut self.ctx(), message);
        }

        fn text_visible(&self) -> bool {
            self.onboarding
                .as_ref()
                .is_some_and(|state| state.carousel().is_visible(AnimationGroup::Text))
        }
    }

    #[test]
    fn mounting_shows_onboarding_with_a_new_session() {
        let mut harness = Harness::new(3);
        let _ = mount_onboarding(&mut harness.ctx());
        assert_eq!(harness.screen, Screen::Onboarding);
        assert_eq!(harness.session, 1);
        assert!(harness.onboarding.is_some());
    }

    #[test]
    fn completion_unmounts_and_shows_home() {
        let mut harness = Harness::new(2);
        let _ = mount_onboarding(&mut harness.ctx());
        harness.send(onboarding::Message::Advance);
        harness.send(onboarding::Message::Advance);
        assert_eq!(harness.screen, Screen::Home);
        assert!(harness.onboarding.is_none());

        // Further input after unmount is dropped.
        harness.send(onboarding::Message::Advance);
        assert_eq!(harness.screen, Screen::Home);
    }

    #[test]
    fn reveal_from_previous_session_is_ignored() {
        let mut harness = Harness::new(3);
        let _ = mount_onboarding(&mut harness.ctx());
        let old_generation = harness
            .onboarding
            .as_ref()
            .map(|state| state.carousel().animation().generation())
            .expect("mounted");

        let _ = handle_home_message(&mut harness.ctx(), &home::Message::ReplayOnboarding);
        assert_eq!(harness.session, 2);

        let _ = handle_reveal_due(&mut harness.ctx(), 1, old_generation);
        assert!(!harness.text_visible());

        let _ = handle_reveal_due(&mut harness.ctx(), 2, old_generation);
        assert!(harness.text_visible());
    }

    #[test]
    fn toggle_switches_appearance() {
        let mut harness = Harness::new(1);
        let _ = mount_onboarding(&mut harness.ctx());
        harness.send(onboarding::Message::ToggleAppearance);
        assert_eq!(harness.appearance.mode(), ThemeMode::Dark);
    }
}
