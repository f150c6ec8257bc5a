//! Bout and round outcomes.

/// How a bout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutResult {
    /// Every attack was beaten; the table goes to the discard pile.
    Beaten,
    /// The defender gave up and picked up the table.
    Resigned,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Index of the player left holding cards, or `None` for a draw.
    pub losing_player: Option<usize>,
    /// Number of bouts played.
    pub bouts: usize,
}

impl RoundResult {
    /// Returns whether nobody was left holding cards.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.losing_player.is_none()
    }
}
