// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Everything here is only active while the onboarding screen is mounted, so
//! unmounting it stops the countdown, the frame clock and input routing at
//! once.

use super::{Message, Screen};
use crate::ui::onboarding;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval of the frame clock driving entrance and bounce animations.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes raw input to the onboarding screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Onboarding => event::listen_with(route_onboarding_event),
        Screen::Home => Subscription::none(),
    }
}

/// Selects the events the onboarding screen consumes.
///
/// Cursor tracking and releases always pass so a drag can finish over a
/// widget; presses and key strokes only pass when no widget captured them.
fn route_onboarding_event(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    let forward = match &event {
        iced::Event::Mouse(
            mouse::Event::CursorMoved { .. }
            | mouse::Event::CursorLeft
            | mouse::Event::ButtonReleased(mouse::Button::Left),
        ) => true,
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | iced::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
            matches!(status, event::Status::Ignored)
        }
        _ => false,
    };

    forward.then(|| Message::Onboarding(onboarding::Message::RawEvent(event)))
}

/// Auto-advance countdown.
///
/// The timer epoch is part of the subscription identity: when it changes,
/// the running countdown is dropped and a new one starts from zero.
pub fn create_auto_advance_subscription(state: Option<&onboarding::State>) -> Subscription<Message> {
    let Some(state) = state else {
        return Subscription::none();
    };
    let carousel = state.carousel();

    time::every(carousel.auto_advance_period())
        .with(carousel.timer_epoch())
        .map(|(_, instant)| Message::Onboarding(onboarding::Message::AutoAdvance(instant)))
}

/// Frame clock, running only while something on screen is moving.
pub fn create_frame_subscription(state: Option<&onboarding::State>) -> Subscription<Message> {
    match state {
        Some(state) if state.needs_frames() => time::every(FRAME_INTERVAL)
            .map(|instant| Message::Onboarding(onboarding::Message::Frame(instant))),
        _ => Subscription::none(),
    }
}
