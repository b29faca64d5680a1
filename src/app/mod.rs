// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the onboarding and home
//! screens.
//!
//! The `App` struct owns the mounted onboarding screen (if any) and turns its
//! events into side effects: deferred reveal tasks, screen switches and theme
//! changes. Subscriptions are derived from that state on every update, so the
//! countdown and the frame clock exist only while onboarding is shown.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::FRAME_INTERVAL;

use crate::domain::onboarding::SlideDeck;
use crate::i18n::fluent::I18n;
use crate::onboarding::CarouselSettings;
use crate::ui::onboarding;
use crate::ui::theming::Appearance;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    screen: Screen,
    deck: SlideDeck,
    settings: CarouselSettings,
    onboarding: Option<onboarding::State>,
    /// Identifies the current onboarding mount; reveals from older mounts are dropped.
    session: u64,
    appearance: Appearance,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("session", &self.session)
            .field(
                "page",
                &self.onboarding.as_ref().map(|state| state.carousel().current_page()),
            )
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot function.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application and mounts the onboarding screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App {
            i18n: I18n::new(flags.lang, &flags.config),
            screen: Screen::Onboarding,
            deck: flags.deck,
            settings: flags.settings,
            onboarding: None,
            session: 0,
            appearance: Appearance::new(flags.theme_mode),
        };
        let task = update::mount_onboarding(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            onboarding: &mut self.onboarding,
            session: &mut self.session,
            appearance: &mut self.appearance,
            deck: &self.deck,
            settings: self.settings,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.appearance.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let state = self.onboarding.as_ref();
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_auto_advance_subscription(state),
            subscription::create_frame_subscription(state),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Onboarding(onboarding_message) => {
                update::handle_onboarding_message(&mut ctx, onboarding_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, &home_message),
            Message::RevealDue {
                session,
                generation,
            } => update::handle_reveal_due(&mut ctx, session, generation),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            onboarding: self.onboarding.as_ref(),
            appearance: &self.appearance,
        })
    }
}
