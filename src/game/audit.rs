#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE};
use crate::error::IntegrityError;

use super::Game;

impl Game {
    /// Checks that every card is accounted for exactly once.
    ///
    /// Counts the deck, every hand, both table zones and the discard pile,
    /// and checks that each card belongs to this game's deck.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a foreign card, a card seen twice, or
    /// a total other than [`DECK_SIZE`].
    pub fn audit(&self) -> Result<(), IntegrityError> {
        let deck_id = self.deck.id();
        let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);

        let hands = self.players.iter().flat_map(|player| player.hand.cards());
        let pairs = self
            .table
            .defended
            .iter()
            .flat_map(|pair| [&pair.attacking, &pair.defending]);
        let everywhere = self
            .deck
            .cards()
            .chain(hands)
            .chain(&self.table.undefended)
            .chain(pairs)
            .chain(&self.table.discard);

        for card in everywhere {
            if card.deck != deck_id {
                return Err(IntegrityError::ForeignCard(*card));
            }
            if !seen.insert(*card) {
                return Err(IntegrityError::DuplicateCard(*card));
            }
        }

        if seen.len() != DECK_SIZE {
            return Err(IntegrityError::CardCount {
                expected: DECK_SIZE,
                actual: seen.len(),
            });
        }

        Ok(())
    }
}
