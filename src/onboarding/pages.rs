// SPDX-License-Identifier: MPL-2.0
//! Page store: the slide deck and the current position within it.

use crate::domain::onboarding::{Slide, SlideDeck};

/// Holds the deck and the current page.
///
/// `current_page` is always a valid index into the deck; [`set_page`](Self::set_page)
/// is the only way to move it.
#[derive(Debug, Clone)]
pub struct PageStore {
    deck: SlideDeck,
    current: usize,
}

impl PageStore {
    /// Creates a store positioned on the first slide.
    #[must_use]
    pub fn new(deck: SlideDeck) -> Self {
        Self { deck, current: 0 }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.deck.len()
    }

    /// Returns true when the current page is the final one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.page_count()
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.deck[self.current]
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.deck
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Index after the current one, wrapping from the last page to the first.
    #[must_use]
    pub fn next_wrapping(&self) -> usize {
        (self.current + 1) % self.page_count()
    }

    /// Index after the current one, or `None` on the last page.
    #[must_use]
    pub fn next_linear(&self) -> Option<usize> {
        (!self.is_last()).then_some(self.current + 1)
    }

    /// Index before the current one, or `None` on the first page.
    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        self.current.checked_sub(1)
    }

    /// Moves to `index`.
    ///
    /// Returns `false` and leaves the position untouched when `index` is out
    /// of range.
    pub fn set_page(&mut self, index: usize) -> bool {
        if index >= self.page_count() {
            return false;
        }
        self.current = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_deck;

    fn store(count: usize) -> PageStore {
        PageStore::new(sample_deck(count))
    }

    #[test]
    fn starts_on_first_page() {
        let pages = store(3);
        assert_eq!(pages.current_page(), 0);
        assert_eq!(pages.current_slide().title(), "Title 0");
        assert!(!pages.is_last());
    }

    #[test]
    fn set_page_rejects_out_of_range() {
        let mut pages = store(3);
        assert!(!pages.set_page(3));
        assert_eq!(pages.current_page(), 0);
        assert!(pages.set_page(2));
        assert!(pages.is_last());
    }

    #[test]
    fn next_wrapping_returns_to_start() {
        let mut pages = store(3);
        pages.set_page(2);
        assert_eq!(pages.next_wrapping(), 0);
    }

    #[test]
    fn next_linear_stops_on_last_page() {
        let mut pages = store(2);
        assert_eq!(pages.next_linear(), Some(1));
        pages.set_page(1);
        assert_eq!(pages.next_linear(), None);
    }

    #[test]
    fn previous_stops_on_first_page() {
        let mut pages = store(2);
        assert_eq!(pages.previous(), None);
        pages.set_page(1);
        assert_eq!(pages.previous(), Some(0));
    }

    #[test]
    fn single_page_deck_is_always_last() {
        let pages = store(1);
        assert!(pages.is_last());
        assert_eq!(pages.next_wrapping(), 0);
    }
}
