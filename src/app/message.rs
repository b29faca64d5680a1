// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags for the application.

use crate::config::Config;
use crate::domain::onboarding::SlideDeck;
use crate::onboarding::{CarouselSettings, Generation};
use crate::ui::home;
use crate::ui::onboarding;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Onboarding(onboarding::Message),
    Home(home::Message),
    /// A deferred reveal scheduled while onboarding session `session` was shown.
    RevealDue {
        session: u64,
        generation: Generation,
    },
}

/// Everything the application needs at startup, resolved by the launcher.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Loaded user preferences.
    pub config: Config,
    /// Validated, localized slide deck.
    pub deck: SlideDeck,
    pub settings: CarouselSettings,
    pub theme_mode: ThemeMode,
}
