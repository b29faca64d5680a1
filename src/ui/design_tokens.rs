// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_onboarding::ui::design_tokens::{palette, opacity};
use iced::Color;

let inactive_dot = Color {
    a: opacity::INACTIVE,
    ..palette::GRAY_400
};
assert!(inactive_dot.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Page dots that are not the current page.
    pub const INACTIVE: f32 = 0.4;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of a page indicator dot.
    pub const PAGE_DOT: f32 = 8.0;

    /// Height of a single-image illustration.
    pub const ARTWORK_HEIGHT: f32 = 220.0;

    /// Height reserved for the layered composition, bounce included.
    pub const STACK_HEIGHT: f32 = 240.0;

    /// Width of the layered composition area.
    pub const STACK_WIDTH: f32 = 360.0;

    /// Maximum width of the slide copy.
    pub const COPY_MAX_WIDTH: f32 = 420.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Slide titles.
    pub const TITLE_LG: f32 = 30.0;

    /// Home screen heading.
    pub const TITLE_MD: f32 = 20.0;

    /// Slide subtitles and primary actions.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::INACTIVE > 0.0 && opacity::INACTIVE < 1.0);

    assert!(sizing::STACK_HEIGHT >= sizing::ARTWORK_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
};
