//! A Durak round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds of Durak for two to
//! five players: dealing, attack and defense bouts, move validation, refills,
//! and turn rotation, until one player is left holding cards. Players are
//! driven by pluggable [`Strategy`] implementations.
//!
//! # Example
//!
//! ```
//! use durak::{Game, GameOptions, MinCardStrategy, Player, RandomStrategy};
//!
//! let players = vec![
//!     Player::new("Alice", MinCardStrategy),
//!     Player::new("Bob", RandomStrategy::new(7)),
//!     Player::new("Carol", RandomStrategy::new(8)),
//! ];
//! let mut game = Game::new(players, GameOptions::default(), 42).unwrap();
//!
//! match game.play_round(0).unwrap().losing_player {
//!     Some(loser) => println!("{} is the durak", game.players()[loser].name()),
//!     None => println!("draw"),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;
pub mod strategy;

// Re-export main types
pub use card::{Card, CardList, CardPair, DECK_SIZE, DeckId, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, DeckError, IntegrityError, RoundError, RuleViolation};
pub use game::{Game, GameState, MAX_PLAYERS, MIN_PLAYERS, Phase, Roles};
pub use hand::Hand;
pub use observer::{RoundEvent, RoundObserver};
pub use options::GameOptions;
pub use player::{Opponent, Player};
pub use result::{BoutResult, RoundResult};
pub use strategy::{MinCardStrategy, RandomStrategy, Strategy};
