//! Player hand representation.

use alloc::vec::Vec;

use crate::card::{Card, CardPair};

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Adds both cards of every pair, attacking card first.
    pub fn extend_pairs(&mut self, pairs: impl IntoIterator<Item = CardPair>) {
        for pair in pairs {
            self.cards.push(pair.attacking);
            self.cards.push(pair.defending);
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Counts how many of `cards` could be removed from this hand.
    ///
    /// Each card in the hand answers for at most one entry, so a slice that
    /// names the same card twice counts it once.
    #[must_use]
    pub fn count_held(&self, cards: &[Card]) -> usize {
        let mut used = alloc::vec![false; self.cards.len()];
        let mut held = 0;

        for card in cards {
            let slot = self
                .cards
                .iter()
                .enumerate()
                .position(|(index, candidate)| !used[index] && candidate == card);
            if let Some(index) = slot {
                used[index] = true;
                held += 1;
            }
        }

        held
    }

    /// Returns whether every card in `cards` can be removed from this hand.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        self.count_held(cards) == cards.len()
    }

    /// Removes `cards` from the hand.
    ///
    /// Nothing is removed unless every card is present. Returns whether the
    /// cards were removed.
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.contains_all(cards) {
            return false;
        }

        for card in cards {
            if let Some(index) = self.cards.iter().position(|held| held == card) {
                self.cards.remove(index);
            }
        }
        true
    }

    /// Empties the hand and returns its cards.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}
