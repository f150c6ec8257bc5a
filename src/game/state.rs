//! Round phases, roles, and the view handed to strategies.

use alloc::vec::Vec;

use crate::card::{Card, CardPair, Rank, Suit};
use crate::player::Opponent;
use crate::rules;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round in progress; the deck holds every card.
    Idle,
    /// Cards are dealt and bouts are being played.
    InProgress,
    /// Fewer than two players hold cards; waiting for cleanup.
    RoundOver,
}

/// Who attacks and who defends in the current bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    /// The player who opened the bout.
    pub main_attacker: usize,
    /// The player whose turn it is to add cards.
    pub current_attacker: usize,
    /// The player being attacked.
    pub defender: usize,
}

/// Cards on the table and the trump for the running round.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    /// Replaced when cards are dealt.
    pub(crate) trump: Suit,
    pub(crate) roles: Roles,
    pub(crate) undefended: Vec<Card>,
    pub(crate) defended: Vec<CardPair>,
    pub(crate) discard: Vec<Card>,
    pub(crate) max_bout_cards: usize,
}

impl Table {
    pub(crate) const fn new(max_bout_cards: usize) -> Self {
        Self {
            trump: Suit::Clubs,
            roles: Roles {
                main_attacker: 0,
                current_attacker: 0,
                defender: 1,
            },
            undefended: Vec::new(),
            defended: Vec::new(),
            discard: Vec::new(),
            max_bout_cards,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.undefended.len() + self.defended.len()
    }
}

/// The game as a player sees it: everything on the table, but no hands.
///
/// A fresh view is built for every decision, so card counts are always
/// current.
#[derive(Debug, Clone, Copy)]
pub struct GameState<'a> {
    table: &'a Table,
    opponents: &'a [Opponent],
}

impl<'a> GameState<'a> {
    pub(crate) const fn new(table: &'a Table, opponents: &'a [Opponent]) -> Self {
        Self { table, opponents }
    }

    /// Returns the trump suit.
    #[must_use]
    pub const fn trump(&self) -> Suit {
        self.table.trump
    }

    /// Returns the current roles.
    #[must_use]
    pub const fn roles(&self) -> Roles {
        self.table.roles
    }

    /// Index of the player who opened the bout.
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
    pub fn undefended_cards(&self) -> &'a [Card] {
        &self.table.undefended
    }

    /// Attacks already beaten in this bout.
    #[must_use]
    pub fn defended_cards(&self) -> &'a [CardPair] {
        &self.table.defended
    }

    /// Cards out of play for the rest of the round.
    #[must_use]
    pub fn discard(&self) -> &'a [Card] {
        &self.table.discard
    }

    /// Every player's name and card count, indexed like the players.
    #[must_use]
    pub const fn opponents(&self) -> &'a [Opponent] {
        self.opponents
    }

    /// Returns whether the next attack opens the bout.
    #[must_use]
    pub fn is_initial_attack(&self) -> bool {
        self.table.len() == 0
    }

    /// Number of cards committed to the table in this bout.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Number of cards the defender holds.
    #[must_use]
    pub fn defender_cards(&self) -> usize {
        self.opponents
            .get(self.defender())
            .map_or(0, |opponent| opponent.num_cards)
    }

    /// Maximum number of cards allowed on the table in one bout.
    #[must_use]
    pub const fn max_bout_cards(&self) -> usize {
        self.table.max_bout_cards
    }

    /// How many more cards an attacker may add right now.
    #[must_use]
    pub fn attack_room(&self) -> usize {
        let defender_room = self
            .defender_cards()
            .saturating_sub(self.table.undefended.len());
        let bout_room = self.table.max_bout_cards.saturating_sub(self.table.len());
        defender_room.min(bout_room)
    }

    /// Returns whether `rank` is already on the table.
    #[must_use]
    pub fn rank_on_table(&self, rank: Rank) -> bool {
        rules::rank_on_table(rank, &self.table.undefended, &self.table.defended)
    }
}
