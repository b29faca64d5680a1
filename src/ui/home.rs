// SPDX-License-Identifier: MPL-2.0
//! Screen shown once onboarding is complete.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container},
    Element, Length, Theme,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    ReplayOnboarding,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ReplayOnboarding,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ReplayOnboarding => Event::ReplayOnboarding,
    }
}

/// Render the home screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.i18n.tr("home-title"))
        .size(typography::TITLE_MD)
        .color(ctx.scheme.text_primary);
    let subtitle = text(ctx.i18n.tr("home-subtitle"))
        .size(typography::BODY)
        .color(ctx.scheme.text_secondary);
    let replay = button(text(ctx.i18n.tr("home-replay-button")).size(typography::BODY))
        .style(button::secondary)
        .on_press(Message::ReplayOnboarding);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(replay);

    let surface = ctx.scheme.surface_primary;
    Container::new(content)
        .center(Length::Fill)
        .padding(spacing::XL)
        .style(move |_theme: &Theme| container::Style {
            background: Some(surface.into()),
            ..Default::default()
        })
        .into()
}
