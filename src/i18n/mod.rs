// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded at compile time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Fallback from a regional locale to its bare language bundle
//! - Message interpolation with named arguments

pub mod fluent;
