//! Round event notifications.

use crate::card::{Card, CardPair};
use crate::game::Roles;
use crate::result::{BoutResult, RoundResult};

/// Something that happened during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent<'a> {
    /// Cards were dealt and the trump revealed.
    Dealt {
        /// The card turned up and put under the deck.
        trump_card: Card,
        /// Roles for the first bout.
        roles: Roles,
    },
    /// An attacker committed cards.
    Attacked {
        /// Index of the attacker.
        player: usize,
        /// Cards added to the table.
        cards: &'a [Card],
    },
    /// An attacker declined to add cards.
    Folded {
        /// Index of the attacker.
        player: usize,
    },
    /// The defender beat every undefended card.
    Defended {
        /// Index of the defender.
        player: usize,
        /// Pairs formed by this defense.
        pairs: &'a [CardPair],
    },
    /// The defender gave up for the rest of the bout.
    Resigned {
        /// Index of the defender.
        player: usize,
    },
    /// A bout ended.
    BoutResolved {
        /// How the bout ended.
        result: BoutResult,
        /// Number of cards that left the table.
        cards: usize,
    },
    /// A player drew cards from the deck.
    Refilled {
        /// Index of the player.
        player: usize,
        /// Number of cards drawn.
        drawn: usize,
    },
    /// Roles moved on to the next bout.
    TurnShifted {
        /// Roles for the next bout.
        roles: Roles,
    },
    /// The round is over.
    RoundFinished {
        /// The outcome.
        result: RoundResult,
    },
}

/// Receives [`RoundEvent`]s from a [`Game`](crate::Game).
///
/// Any `FnMut(&RoundEvent)` closure is an observer:
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use durak::{Game, GameOptions, MinCardStrategy, Player, RoundEvent};
///
/// let players = vec![
///     Player::new("A", MinCardStrategy),
///     Player::new("B", MinCardStrategy),
/// ];
/// let mut game = Game::new(players, GameOptions::default(), 1).unwrap();
///
/// let bouts = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&bouts);
/// game.set_observer(move |event: &RoundEvent<'_>| {
///     if matches!(event, RoundEvent::BoutResolved { .. }) {
///         counter.set(counter.get() + 1);
///     }
/// });
///
/// let result = game.play_round(0).unwrap();
/// assert_eq!(bouts.get(), result.bouts);
/// ```
pub trait RoundObserver {
    /// Called for every event, in the order the events happen.
    fn on_event(&mut self, event: &RoundEvent<'_>);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent<'_>),
{
    fn on_event(&mut self, event: &RoundEvent<'_>) {
        self(event);
    }
}
