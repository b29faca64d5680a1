// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns a `Message` type and reports what the application must do as an
//! `Event`.
//!
//! # Screens
//!
//! - [`onboarding`] - Paged introduction with animated entrances
//! - [`home`] - Placeholder shown once onboarding is complete
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System appearance management

pub mod design_tokens;
pub mod home;
pub mod onboarding;
pub mod theming;
