// SPDX-License-Identifier: MPL-2.0
//! `iced_onboarding` is a paged onboarding screen built with the Iced GUI
//! framework.
//!
//! The carousel and its entrance animations are driven by a toolkit-free
//! state machine in [`onboarding`]; [`app`] and [`ui`] wire it to Iced
//! subscriptions, deferred tasks, Fluent localization and user preferences.

#![doc(html_root_url = "https://docs.rs/iced_onboarding/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod onboarding;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
