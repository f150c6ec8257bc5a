//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Durak needs between two and five players.
    #[error("invalid number of players: {0}")]
    InvalidPlayerCount(usize),
    /// The hand size is zero or too large to deal to every player.
    #[error("invalid hand size: {0}")]
    InvalidHandSize(usize),
    /// The per-bout card limit is zero.
    #[error("invalid bout limit: {0}")]
    InvalidBoutLimit(usize),
}

/// Errors that can occur when taking cards out of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than the deck holds.
    #[error("not enough cards: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}

/// A move proposed by a strategy that breaks the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// A card does not belong to this game's deck.
    #[error("card from a wrong deck: {0}")]
    WrongDeck(Card),
    /// The proposal contains cards that are not in the player's hand.
    #[error("wrong number of cards in hand: expected {expected}, got {actual}")]
    HandMismatch {
        /// Hand size the move should leave behind.
        expected: usize,
        /// Hand size the move would actually leave behind.
        actual: usize,
    },
    /// The opening attack of a bout contains no cards.
    #[error("empty attack")]
    EmptyAttack,
    /// The opening attack mixes ranks.
    #[error("initial attack must include cards of the same rank")]
    MixedRanks,
    /// A follow-up attack uses a rank that is not on the table.
    #[error("attacking with a rank not seen before: {0}")]
    UnseenRank(Card),
    /// More undefended cards than the defender can answer.
    #[error("attacking with more cards than defender has")]
    DefenderOverloaded,
    /// More cards on the table than a bout allows.
    #[error("attacking with more than maximum allowed cards")]
    BoutLimitExceeded,
    /// A defense does not answer every undefended card.
    #[error("defense has {actual} cards for {expected} undefended")]
    DefenseCountMismatch {
        /// Number of undefended cards.
        expected: usize,
        /// Number of cards in the defense.
        actual: usize,
    },
    /// A defending card does not beat the card it is paired with.
    #[error("invalid defense of {attacking} by {defending}")]
    CannotBeat {
        /// The attacking card.
        attacking: Card,
        /// The card offered as defense.
        defending: Card,
    },
}

/// Errors found while auditing card conservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// Cards were created or lost.
    #[error("card count mismatch: expected {expected}, found {actual}")]
    CardCount {
        /// Number of cards the deck was created with.
        expected: usize,
        /// Number of cards found across all zones.
        actual: usize,
    },
    /// The same card sits in two places.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    /// A card from another deck is in play.
    #[error("foreign card in play: {0}")]
    ForeignCard(Card),
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Player index out of range.
    #[error("no player at index {0}")]
    NoSuchPlayer(usize),
    /// A strategy proposed an illegal move.
    #[error("player {player} broke the rules: {violation}")]
    Rule {
        /// Index of the offending player.
        player: usize,
        /// What was wrong with the move.
        violation: RuleViolation,
    },
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The integrity audit failed.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}
