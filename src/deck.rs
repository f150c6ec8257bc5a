//! Double-ended, shuffleable card source.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, DeckId, Rank, Suit, write_list};
use crate::error::DeckError;

/// A deck of Durak cards.
///
/// The front of the deck is the top. Every deck owns its own random number
/// generator, so two decks built from the same seed shuffle identically.
#[derive(Debug, Clone)]
pub struct Deck {
    id: DeckId,
    cards: VecDeque<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled 36-card deck with a fresh [`DeckId`].
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let id = DeckId::next();
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank, id));
            }
        }

        Self {
            id,
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the id every card of this deck carries.
    #[must_use]
    pub const fn id(&self) -> DeckId {
        self.id
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from top to bottom.
    pub fn cards(&self) -> impl DoubleEndedIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Draws one card from the top.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::NotEnoughCards {
            requested: 1,
            available: 0,
        })
    }

    /// Draws `count` cards from the top, topmost first.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `count` cards are left.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure_available(count)?;
        Ok(self.cards.drain(..count).collect())
    }

    /// Draws one card from the bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw_bottom(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or(DeckError::NotEnoughCards {
            requested: 1,
            available: 0,
        })
    }

    /// Draws `count` cards from the bottom, keeping their deck order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `count` cards are left.
    pub fn draw_bottom_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure_available(count)?;
        let from = self.cards.len() - count;
        Ok(self.cards.drain(from..).collect())
    }

    /// Puts a card on top of the deck.
    pub fn put_on_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Puts cards on top of the deck one by one, so the last one ends up on top.
    pub fn extend_top(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_front(card);
        }
    }

    /// Puts a card at the bottom of the deck.
    pub fn put_on_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Puts cards at the bottom of the deck in order.
    pub fn extend_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Shuffles the deck with the deck's own generator.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    fn ensure_available(&self, count: usize) -> Result<(), DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.cards)
    }
}
