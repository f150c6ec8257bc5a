//! Card comparison rules shared by the engine and the bundled strategies.

use core::cmp::Ordering;

use crate::card::{Card, CardPair, Rank, Suit};

/// Returns whether `defending` beats `attacking` under `trump`.
///
/// A card of the same suit must be strictly higher. A card of another suit
/// beats only if it is a trump.
///
/// ```
/// use durak::{Deck, Rank, Suit};
/// use durak::rules::can_beat;
///
/// let deck = Deck::new(0);
/// let six_clubs = durak::Card::new(Suit::Clubs, Rank::Six, deck.id());
/// let six_diamonds = durak::Card::new(Suit::Diamonds, Rank::Six, deck.id());
/// assert!(can_beat(&six_clubs, &six_diamonds, Suit::Diamonds));
/// assert!(!can_beat(&six_diamonds, &six_clubs, Suit::Diamonds));
/// ```
#[must_use]
pub fn can_beat(attacking: &Card, defending: &Card, trump: Suit) -> bool {
    if attacking.suit == defending.suit {
        attacking.rank < defending.rank
    } else {
        defending.suit == trump
    }
}

/// Orders cards by how valuable they are to keep.
///
/// Trumps rank above every other suit. Otherwise cards compare by rank,
/// with the suit as a tie breaker so the order is total.
#[must_use]
pub fn compare(lhs: &Card, rhs: &Card, trump: Suit) -> Ordering {
    let lhs_trump = lhs.suit == trump;
    let rhs_trump = rhs.suit == trump;

    lhs_trump
        .cmp(&rhs_trump)
        .then(lhs.rank.cmp(&rhs.rank))
        .then(lhs.suit.cmp(&rhs.suit))
}

/// Returns whether `rank` is already on the table in this bout.
#[must_use]
pub fn rank_on_table(rank: Rank, undefended: &[Card], defended: &[CardPair]) -> bool {
    undefended.iter().any(|card| card.rank == rank)
        || defended
            .iter()
            .any(|pair| pair.attacking.rank == rank || pair.defending.rank == rank)
}
