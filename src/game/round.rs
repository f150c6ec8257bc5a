use tracing::{debug, info, warn};

use crate::error::RoundError;
use crate::observer::RoundEvent;
use crate::result::{BoutResult, RoundResult};

use super::{Game, Phase, Roles, notify};

impl Game {
    /// Plays a whole round with `first_attacker` opening.
    ///
    /// Deals, plays bouts until fewer than two players hold cards, and
    /// returns every card to the deck before reporting the loser. If a
    /// strategy breaks the rules the deck is restored as well and the error
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already running, `first_attacker` is
    /// out of range, a strategy proposes an illegal move, or the integrity
    /// audit (when enabled) fails.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{Game, GameOptions, MinCardStrategy, Player, RandomStrategy};
    ///
    /// let players = vec![
    ///     Player::new("Alice", MinCardStrategy),
    ///     Player::new("Bob", RandomStrategy::new(3)),
    /// ];
    /// let mut game = Game::new(players, GameOptions::default(), 42).unwrap();
    ///
    /// let result = game.play_round(0).unwrap();
    /// assert!(result.losing_player.is_none_or(|loser| loser < 2));
    /// assert_eq!(game.deck().len(), durak::DECK_SIZE);
    /// ```
    pub fn play_round(&mut self, first_attacker: usize) -> Result<RoundResult, RoundError> {
        self.deal(first_attacker)?;

        let outcome = self.play_bouts();
        if let Err(err) = &outcome {
            warn!(error = %err, bouts = self.bouts, "round aborted");
        }

        self.cleanup();
        outcome
    }

    fn play_bouts(&mut self) -> Result<RoundResult, RoundError> {
        while !self.is_finished() {
            let result = self.play_bout()?;
            self.refill()?;

            if self.options.check_integrity {
                self.audit()?;
            }

            if !self.is_finished() {
                self.shift_turn(result)?;
            }
        }

        self.finish()
    }

    /// Hands the attack on after a bout.
    ///
    /// After a beaten bout the defender attacks next. After a resignation the
    /// defender loses their turn and the next player holding cards attacks.
    /// The new defender is the next player holding cards after the new main
    /// attacker.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running or the round is already
    /// decided.
    pub fn shift_turn(&mut self, previous: BoutResult) -> Result<(), RoundError> {
        self.ensure_phase(Phase::InProgress)?;

        let defender = self.table.roles.defender;
        let main_attacker = match previous {
            BoutResult::Beaten => Some(defender),
            BoutResult::Resigned => self.next_player_with_cards(defender),
        };
        let next_defender = main_attacker.and_then(|index| self.next_player_with_cards(index));

        let (Some(main_attacker), Some(defender)) = (main_attacker, next_defender) else {
            return Err(RoundError::InvalidState);
        };
        if main_attacker == defender {
            return Err(RoundError::InvalidState);
        }

        let roles = Roles {
            main_attacker,
            current_attacker: main_attacker,
            defender,
        };
        self.table.roles = roles;

        debug!(main_attacker, defender, "shift turn");
        notify(&mut self.observer, &RoundEvent::TurnShifted { roles });
        Ok(())
    }

    /// Returns whether fewer than two players hold cards.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.players_with_cards() < 2
    }

    /// Returns the outcome as things stand: the loser is the only player
    /// still holding cards.
    #[must_use]
    pub fn round_result(&self) -> RoundResult {
        let mut holders = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.hand.is_empty())
            .map(|(index, _)| index);

        let losing_player = match (holders.next(), holders.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        };

        RoundResult {
            losing_player,
            bouts: self.bouts,
        }
    }

    /// Ends a decided round and reports its result.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running or two or more players still
    /// hold cards.
    pub fn finish(&mut self) -> Result<RoundResult, RoundError> {
        self.ensure_phase(Phase::InProgress)?;
        if !self.is_finished() {
            return Err(RoundError::InvalidState);
        }

        self.phase = Phase::RoundOver;
        let result = self.round_result();

        match result.losing_player {
            Some(loser) => info!(loser, name = %self.players[loser].name, bouts = result.bouts, "round lost"),
            None => info!(bouts = result.bouts, "round drawn"),
        }
        notify(&mut self.observer, &RoundEvent::RoundFinished { result });

        Ok(result)
    }

    /// Returns every card to the deck and makes the game ready for a new
    /// deal.
    ///
    /// Hands, the table, and the discard pile are all collected, so this also
    /// recovers from an aborted round. The deck keeps its id.
    pub fn cleanup(&mut self) {
        for player in &mut self.players {
            let cards = player.hand.take_all();
            self.deck.extend_top(cards);
        }

        let table = &mut self.table;
        self.deck.extend_top(table.undefended.drain(..));
        for pair in table.defended.drain(..) {
            self.deck.put_on_top(pair.attacking);
            self.deck.put_on_top(pair.defending);
        }
        self.deck.extend_top(table.discard.drain(..));

        self.refresh_opponents();
        self.phase = Phase::Idle;
        debug!(deck = self.deck.len(), "cleanup");
    }
}
