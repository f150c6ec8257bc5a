//! Card types for the 36-card Durak deck.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// Number of cards in a Durak deck.
pub const DECK_SIZE: usize = 36;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn glyph(self) -> &'static str {
        match self {
            Self::Clubs => "\u{2663}",
            Self::Diamonds => "\u{2666}",
            Self::Hearts => "\u{2665}",
            Self::Spades => "\u{2660}",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Card rank, ordered from [`Rank::Six`] up to [`Rank::Ace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 9] = [
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static NEXT_DECK_ID: AtomicU32 = AtomicU32::new(1);

/// Identifies the deck a card was minted from.
///
/// Every [`Deck`](crate::deck::Deck) draws a fresh id, so cards smuggled in
/// from another deck can be told apart from the genuine ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeckId(u32);

impl DeckId {
    pub(crate) fn next() -> Self {
        Self(NEXT_DECK_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A playing card tagged with the deck it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// The deck this card was minted from.
    pub deck: DeckId,
}

impl Card {
    /// Creates a new card belonging to `deck`.
    ///
    /// Creating a card does not put it into play: the engine only accepts
    /// cards that are actually held in the acting player's hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, deck: DeckId) -> Self {
        Self { suit, rank, deck }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// An attacking card together with the card that beat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardPair {
    /// The attacking card.
    pub attacking: Card,
    /// The card that beat it.
    pub defending: Card,
}

impl fmt::Display for CardPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.attacking, self.defending)
    }
}

/// Displays a slice of cards or pairs as a comma separated list.
pub struct CardList<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for CardList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}

/// Writes `items` as `{a,b,c}`.
pub(crate) fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    f.write_str("{")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("}")
}
