// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::home;
use crate::ui::onboarding;
use crate::ui::theming::Appearance;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub onboarding: Option<&'a onboarding::State>,
    pub appearance: &'a Appearance,
}

/// Renders the onboarding screen while it is mounted, the home screen otherwise.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.onboarding {
        Some(state) => onboarding::view(
            state,
            onboarding::ViewContext {
                i18n: ctx.i18n,
                scheme: ctx.appearance.scheme(),
                dark: ctx.appearance.is_dark(),
            },
        )
        .map(Message::Onboarding),
        None => home::view(home::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.appearance.scheme(),
        })
        .map(Message::Home),
    }
}
