//! Game configuration options.

/// Default number of cards dealt to every player, also the refill target.
pub const DEFAULT_HAND_SIZE: usize = 6;

/// Default maximum number of cards (undefended plus defended) in one bout.
pub const DEFAULT_MAX_BOUT_CARDS: usize = 6;

/// Configuration options for a Durak game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use durak::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle(false)
///     .with_check_integrity(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to every player and the size hands are refilled to.
    pub hand_size: usize,
    /// Maximum number of cards committed to the table in one bout.
    pub max_bout_cards: usize,
    /// Whether the deck is shuffled before dealing.
    ///
    /// Turning this off deals from the deck as it is, which makes stacked
    /// decks and replays possible.
    pub shuffle: bool,
    /// Whether card conservation is audited after every bout.
    pub check_integrity: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            max_bout_cards: DEFAULT_MAX_BOUT_CARDS,
            shuffle: true,
            check_integrity: false,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(4);
    /// assert_eq!(options.hand_size, 4);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the maximum number of cards in one bout.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bout_cards(5);
    /// assert_eq!(options.max_bout_cards, 5);
    /// ```
    #[must_use]
    pub const fn with_max_bout_cards(mut self, max_bout_cards: usize) -> Self {
        self.max_bout_cards = max_bout_cards;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether the engine audits card conservation after every bout.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_check_integrity(true);
    /// assert!(options.check_integrity);
    /// ```
    #[must_use]
    pub const fn with_check_integrity(mut self, check: bool) -> Self {
        self.check_integrity = check;
        self
    }
}
