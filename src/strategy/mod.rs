//! Decision policies that choose which cards a player commits.
//!
//! The engine asks the current attacker for an attack and the defender for a
//! defense. A strategy only ever sees the public [`GameState`] and its own
//! hand; it answers with the exact cards it wants to play and the engine
//! takes them out of the hand after validating the move.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;
use crate::rules;

mod min_card;
mod random;

pub use min_card::MinCardStrategy;
pub use random::RandomStrategy;

/// A decision policy bound to one player.
pub trait Strategy {
    /// Human readable name of the strategy.
    fn name(&self) -> &str;

    /// Chooses cards to attack with.
    ///
    /// An empty result folds. The opening attack of a bout must not be empty
    /// and must consist of cards of one rank; follow-ups may only use ranks
    /// already on the table.
    fn attack(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card>;

    /// Chooses cards to defend with, one per undefended card and in the same
    /// order as [`GameState::undefended_cards`].
    ///
    /// An empty result resigns the bout.
    fn defend(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card>;
}

/// Cards in `hand` whose rank is already on the table.
pub(crate) fn follow_up_candidates(state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
    hand.iter()
        .filter(|card| {
            rules::rank_on_table(card.rank, state.undefended_cards(), state.defended_cards())
        })
        .copied()
        .collect()
}

/// Cards in `hand`, not yet marked in `used`, that beat `attacking`.
pub(crate) fn beating_cards(
    state: &GameState<'_>,
    hand: &[Card],
    used: &[bool],
    attacking: &Card,
) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|&(index, card)| !used[index] && rules::can_beat(attacking, card, state.trump()))
        .map(|(index, _)| index)
        .collect()
}
