//! Players and their public projection.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::hand::Hand;
use crate::strategy::Strategy;

/// A seat at the table: a name, a hand, and the strategy that plays it.
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a player with an empty hand.
    ///
    /// ```
    /// use durak::{MinCardStrategy, Player};
    ///
    /// let player = Player::new("Alice", MinCardStrategy);
    /// assert_eq!(player.name(), "Alice");
    /// assert_eq!(player.num_cards(), 0);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            strategy: Box::new(strategy),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of cards the player holds.
    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.hand.len()
    }

    /// Returns the name of the bound strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// A player as seen by everyone else: a name and a card count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    /// The player's name.
    pub name: String,
    /// Number of cards the player holds.
    pub num_cards: usize,
}
