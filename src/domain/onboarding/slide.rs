// SPDX-License-Identifier: MPL-2.0
//! Slide value objects and the non-empty slide deck.

use crate::error::{Error, Result};
use std::ops::Deref;
use std::sync::Arc;

/// Unique identifier for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u64);

impl SlideId {
    /// Creates a new unique slide ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

/// Independently animated part of a slide.
///
/// Each group has its own visibility flag and entrance timing, so the
/// artwork and the copy can enter one after the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationGroup {
    /// Title and subtitle.
    Text,
    /// Layered composition of several images.
    ImageStack,
    /// Single illustration.
    PageImage,
}

impl AnimationGroup {
    /// Every group, in reveal order.
    pub const ALL: [AnimationGroup; 3] = [
        AnimationGroup::ImageStack,
        AnimationGroup::PageImage,
        AnimationGroup::Text,
    ];
}

/// One image of a layered composition.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayer {
    pub image_ref: String,
    /// Edge length of the square the image is fitted into.
    pub size: f32,
    pub rotation_degrees: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Paint order; higher values are drawn on top.
    pub z_index: i32,
}

impl StackLayer {
    #[must_use]
    pub fn new(image_ref: impl Into<String>, size: f32) -> Self {
        Self {
            image_ref: image_ref.into(),
            size,
            rotation_degrees: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            z_index: 0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    #[must_use]
    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// How a slide's artwork is composed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Artwork {
    /// The slide's `image_ref` drawn on its own.
    #[default]
    Single,
    /// Several layers drawn on top of each other.
    Stack(Vec<StackLayer>),
}

/// Immutable content of one onboarding page.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    id: SlideId,
    image_ref: String,
    title: String,
    subtitle: String,
    artwork: Artwork,
}

impl Slide {
    /// Creates a slide showing a single image.
    pub fn new(
        image_ref: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: SlideId::new(),
            image_ref: image_ref.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            artwork: Artwork::Single,
        }
    }

    /// Replaces the artwork with a layered composition.
    ///
    /// Layers are kept sorted by paint order.
    #[must_use]
    pub fn with_layers(mut self, mut layers: Vec<StackLayer>) -> Self {
        layers.sort_by_key(|layer| layer.z_index);
        self.artwork = Artwork::Stack(layers);
        self
    }

    #[must_use]
    pub fn id(&self) -> SlideId {
        self.id
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    /// Animation groups that make up this slide's entrance.
    #[must_use]
    pub fn animation_groups(&self) -> &'static [AnimationGroup] {
        match self.artwork {
            Artwork::Single => &[AnimationGroup::PageImage, AnimationGroup::Text],
            Artwork::Stack(_) => &[AnimationGroup::ImageStack, AnimationGroup::Text],
        }
    }
}

/// Ordered, non-empty, read-only list of slides.
///
/// Cloning is cheap; every clone shares the same slides.
#[derive(Debug, Clone)]
pub struct SlideDeck(Arc<[Slide]>);

impl SlideDeck {
    /// Builds a deck, failing with [`Error::EmptyDeck`] when `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(Self(slides.into()))
    }
}

impl Deref for SlideDeck {
    type Target = [Slide];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
