// SPDX-License-Identifier: MPL-2.0
//! Embedded slide illustrations.
//!
//! Images are SVG files under `assets/slides/`, looked up by a slide's image
//! reference plus `.svg`. Handles are built once per deck so rendering never
//! touches the embedded data again.

use crate::domain::onboarding::{Artwork, SlideDeck};
use iced::widget::svg::Handle;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/slides/"]
struct SlideAssets;

/// Loads the embedded image named `image_ref`, if there is one.
#[must_use]
pub fn load(image_ref: &str) -> Option<Handle> {
    SlideAssets::get(&format!("{image_ref}.svg")).map(|file| Handle::from_memory(file.data.into_owned()))
}

/// SVG handles for every image a deck refers to.
#[derive(Debug, Clone, Default)]
pub struct ArtworkCache {
    handles: HashMap<String, Handle>,
}

impl ArtworkCache {
    /// Resolves every image of `deck`.
    ///
    /// Missing images are logged and left out; the view draws a placeholder
    /// in their place.
    #[must_use]
    pub fn for_deck(deck: &SlideDeck) -> Self {
        let mut handles = HashMap::new();
        for slide in deck.iter() {
            let refs: Vec<&str> = match slide.artwork() {
                Artwork::Single => vec![slide.image_ref()],
                Artwork::Stack(layers) => layers.iter().map(|layer| layer.image_ref.as_str()).collect(),
            };
            for image_ref in refs {
                if handles.contains_key(image_ref) {
                    continue;
                }
                match load(image_ref) {
                    Some(handle) => {
                        handles.insert(image_ref.to_string(), handle);
                    }
                    None => tracing::warn!(image_ref, "slide artwork not found"),
                }
            }
        }
        Self { handles }
    }

    #[must_use]
    pub fn get(&self, image_ref: &str) -> Option<&Handle> {
        self.handles.get(image_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::onboarding::{Slide, StackLayer};

    #[test]
    fn bundled_images_are_embedded() {
        for name in ["burger", "fries", "coffee", "delivery_truck", "tracking_cart"] {
            assert!(load(name).is_some(), "missing {name}.svg");
        }
        assert!(load("does_not_exist").is_none());
    }

    #[test]
    fn cache_resolves_layers_and_single_images() {
        let deck = SlideDeck::new(vec![
            Slide::new("grouped", "Menus", "subtitle").with_layers(vec![
                StackLayer::new("burger", 120.0),
                StackLayer::new("fries", 100.0),
            ]),
            Slide::new("delivery_truck", "Delivery", "subtitle"),
        ])
        .expect("non-empty deck");

        let cache = ArtworkCache::for_deck(&deck);
        assert_eq!(cache.len(), 3);
        assert!(cache.get("burger").is_some());
        assert!(cache.get("delivery_truck").is_some());
        // The composition itself has no image of its own.
        assert!(cache.get("grouped").is_none());
    }

    #[test]
    fn missing_images_are_skipped() {
        let deck = SlideDeck::new(vec![Slide::new("unknown_art", "Title", "subtitle")])
            .expect("non-empty deck");
        assert!(ArtworkCache::for_deck(&deck).is_empty());
    }
}
