// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects with no presentation dependencies.
//!
//! # Modules
//!
//! - [`onboarding`]: Slide content ([`Slide`](onboarding::Slide),
//!   [`SlideDeck`](onboarding::SlideDeck)) and timing values
//!   ([`AutoAdvanceInterval`](onboarding::AutoAdvanceInterval),
//!   [`RevealDelay`](onboarding::RevealDelay))

pub mod onboarding;
