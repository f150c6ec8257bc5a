//! Round engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, CardPair, DeckId, Suit};
use crate::deck::Deck;
use crate::error::{ConfigError, RoundError};
use crate::observer::{RoundEvent, RoundObserver};
use crate::options::GameOptions;
use crate::player::{Opponent, Player};

mod audit;
mod bout;
mod deal;
mod round;
pub mod state;
mod validate;

pub use state::{GameState, Phase, Roles};
use state::Table;

/// Smallest number of players in a round.
pub const MIN_PLAYERS: usize = 2;

/// Largest number of players in a round.
pub const MAX_PLAYERS: usize = 5;

/// A Durak engine that runs rounds for a fixed set of players.
///
/// The game owns the deck, the players, and the table. Use
/// [`Game::play_round`] to play a whole round, or drive it step by step with
/// [`Game::deal`], [`Game::play_bout`], [`Game::refill`],
/// [`Game::shift_turn`], [`Game::finish`] and [`Game::cleanup`].
pub struct Game {
    /// Players in seating order.
    players: Vec<Player>,
    /// Public projection of `players`, refreshed before every decision.
    opponents: Vec<Opponent>,
    /// Cards not yet dealt.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current phase.
    phase: Phase,
    /// Trump, roles, and table zones.
    table: Table,
    /// Bouts played in the current round.
    bouts: usize,
    /// Receives round events.
    observer: Option<Box<dyn RoundObserver>>,
}

impl Game {
    /// Creates a game for `players`, seeding the deck's shuffle with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two or more than five
    /// players, the hand size is zero or too large to deal, or the bout limit
    /// is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{ConfigError, Game, GameOptions, MinCardStrategy, Player};
    ///
    /// let lonely = vec![Player::new("A", MinCardStrategy)];
    /// assert_eq!(
    ///     Game::new(lonely, GameOptions::default(), 42).unwrap_err(),
    ///     ConfigError::InvalidPlayerCount(1)
    /// );
    /// ```
    pub fn new(players: Vec<Player>, options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(ConfigError::InvalidPlayerCount(players.len()));
        }

        // One extra card is turned up for the trump.
        let dealt = options.hand_size.saturating_mul(players.len()).saturating_add(1);
        if options.hand_size == 0 || dealt > crate::card::DECK_SIZE {
            return Err(ConfigError::InvalidHandSize(options.hand_size));
        }

        if options.max_bout_cards == 0 {
            return Err(ConfigError::InvalidBoutLimit(options.max_bout_cards));
        }

        let opponents = players
            .iter()
            .map(|player| Opponent {
                name: player.name.clone(),
                num_cards: 0,
            })
            .collect();

        Ok(Self {
            players,
            opponents,
            deck: Deck::new(seed),
            options,
            phase: Phase::Idle,
            table: Table::new(options.max_bout_cards),
            bouts: 0,
            observer: None,
        })
    }

    /// Installs an observer that receives every [`RoundEvent`].
    pub fn set_observer(&mut self, observer: impl RoundObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the id every genuine card of this game carries.
    #[must_use]
    pub const fn deck_id(&self) -> DeckId {
        self.deck.id()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck for rearranging between rounds.
    ///
    /// Combined with [`GameOptions::with_shuffle`] this allows dealing from a
    /// stacked deck. Cards taken out must be put back before the next deal.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the trump suit, or `None` while no round is running.
    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        (self.phase != Phase::Idle).then_some(self.table.trump)
    }

    /// Returns the current roles.
    #[must_use]
    pub const fn roles(&self) -> Roles {
        self.table.roles
    }

    /// Index of the player who opened the current bout.
    #[must_use]
    pub const fn main_attacker(&self) -> usize {
        self.table.roles.main_attacker
    }

    /// Index of the player whose turn it is to attack.
    #[must_use]
    pub const fn current_attacker(&self) -> usize {
        self.table.roles.current_attacker
    }

    /// Index of the defender.
    #[must_use]
    pub const fn defender(&self) -> usize {
        self.table.roles.defender
    }

    /// Attacks waiting for a defense.
    #[must_use]
    pub fn undefended_cards(&self) -> &[Card] {
        &self.table.undefended
    }

    /// Attacks already beaten in the current bout.
    #[must_use]
    pub fn defended_cards(&self) -> &[CardPair] {
        &self.table.defended
    }

    /// Cards out of play for the rest of the round.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.table.discard
    }

    /// Number of bouts played in the current round.
    #[must_use]
    pub const fn bouts_played(&self) -> usize {
        self.bouts
    }

    /// Builds the view strategies see, with card counts brought up to date.
    #[must_use]
    pub fn state(&mut self) -> GameState<'_> {
        self.refresh_opponents();
        GameState::new(&self.table, &self.opponents)
    }

    fn refresh_opponents(&mut self) {
        for (opponent, player) in self.opponents.iter_mut().zip(&self.players) {
            opponent.num_cards = player.hand.len();
        }
    }

    fn ensure_phase(&self, phase: Phase) -> Result<(), RoundError> {
        if self.phase != phase {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    fn next_player(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }

    /// Next player after `index`, wrapping around to `index` itself, who holds cards.
    fn next_player_with_cards(&self, index: usize) -> Option<usize> {
        let mut candidate = index;
        for _ in 0..self.players.len() {
            candidate = self.next_player(candidate);
            if !self.players[candidate].hand.is_empty() {
                return Some(candidate);
            }
        }
        None
    }

    /// Next player after `index` who may attack, skipping the defender.
    fn next_attacker(&self, index: usize) -> usize {
        let mut candidate = self.next_player(index);
        if candidate == self.table.roles.defender {
            candidate = self.next_player(candidate);
        }
        candidate
    }

    fn players_with_cards(&self) -> usize {
        self.players
            .iter()
            .filter(|player| !player.hand.is_empty())
            .count()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("deck", &self.deck)
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("table", &self.table)
            .field("bouts", &self.bouts)
            .finish_non_exhaustive()
    }
}

/// Hands `event` to the observer, if one is installed.
///
/// Takes the observer field alone so events may borrow the table.
fn notify(observer: &mut Option<Box<dyn RoundObserver>>, event: &RoundEvent<'_>) {
    if let Some(observer) = observer.as_mut() {
        observer.on_event(event);
    }
}
