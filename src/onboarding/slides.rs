// SPDX-License-Identifier: MPL-2.0
//! The built-in onboarding deck.
//!
//! Copy is stored as Fluent keys and resolved once at startup, so the deck
//! itself stays immutable for the lifetime of the screen.

use crate::domain::onboarding::{Slide, SlideDeck, StackLayer};
use crate::error::Result;
use crate::i18n::fluent::I18n;

/// Image reference of the layered composition on the first slide.
pub const GROUPED_IMAGES: &str = "grouped_images";

struct Entry {
    image_ref: &'static str,
    title_key: &'static str,
    subtitle_key: &'static str,
    stacked: bool,
}

const ENTRIES: [Entry; 3] = [
    Entry {
        image_ref: GROUPED_IMAGES,
        title_key: "slide-browse-menus-title",
        subtitle_key: "slide-browse-menus-subtitle",
        stacked: true,
    },
    Entry {
        image_ref: "delivery_truck",
        title_key: "slide-fast-delivery-title",
        subtitle_key: "slide-fast-delivery-subtitle",
        stacked: false,
    },
    Entry {
        image_ref: "tracking_cart",
        title_key: "slide-tracking-title",
        subtitle_key: "slide-tracking-subtitle",
        stacked: false,
    },
];

/// Fries at the back, coffee in front on the left, burger on top in the center.
fn menu_layers() -> Vec<StackLayer> {
    vec![
        StackLayer::new("fries", 100.0)
            .rotated(25.0)
            .offset(80.0, 20.0)
            .z_index(0),
        StackLayer::new("coffee", 150.0)
            .rotated(-18.0)
            .offset(-70.0, 10.0)
            .z_index(1),
        StackLayer::new("burger", 120.0)
            .offset(0.0, 30.0)
            .z_index(2),
    ]
}

/// Builds the three-slide deck with copy in the active locale.
pub fn default_deck(i18n: &I18n) -> Result<SlideDeck> {
    let slides = ENTRIES
        .iter()
        .map(|entry| {
            let slide = Slide::new(
                entry.image_ref,
                i18n.tr(entry.title_key),
                i18n.tr(entry.subtitle_key),
            );
            if entry.stacked {
                slide.with_layers(menu_layers())
            } else {
                slide
            }
        })
        .collect();
    SlideDeck::new(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::onboarding::{AnimationGroup, Artwork};

    #[test]
    fn default_deck_has_three_localized_slides() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let deck = default_deck(&i18n).expect("deck is non-empty");
        let titles: Vec<&str> = deck.iter().map(Slide::title).collect();
        assert_eq!(
            titles,
            vec!["Browse Menus", "Lightning Fast Delivery", "Real-Time Tracking"]
        );
    }

    #[test]
    fn only_first_slide_is_layered() {
        let deck = default_deck(&I18n::default()).expect("deck is non-empty");
        assert!(matches!(deck[0].artwork(), Artwork::Stack(layers) if layers.len() == 3));
        assert_eq!(deck[0].animation_groups()[0], AnimationGroup::ImageStack);
        assert_eq!(deck[1].artwork(), &Artwork::Single);
        assert_eq!(deck[2].image_ref(), "tracking_cart");
    }
}
