use tracing::{debug, info};

use crate::error::{DeckError, RoundError};
use crate::observer::RoundEvent;

use super::{Game, Phase, Roles, notify};

impl Game {
    /// Deals a new round with `first_attacker` opening the first bout.
    ///
    /// Shuffles the deck (unless disabled in the options), deals a full hand
    /// to every player in seating order, turns up the next card as trump and
    /// puts it at the bottom of the deck, where it is the last card drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already running, `first_attacker`
    /// is not a valid player index, or the deck is too short for a full
    /// deal. Nothing is dealt when an error is returned.
    pub fn deal(&mut self, first_attacker: usize) -> Result<(), RoundError> {
        self.ensure_phase(Phase::Idle)?;
        if first_attacker >= self.players.len() {
            return Err(RoundError::NoSuchPlayer(first_attacker));
        }

        // Every hand plus the trump card, checked before anything moves.
        let needed = self.options.hand_size * self.players.len() + 1;
        if self.deck.len() < needed {
            return Err(DeckError::NotEnoughCards {
                requested: needed,
                available: self.deck.len(),
            }
            .into());
        }

        if self.options.shuffle {
            self.deck.shuffle();
        }
        debug!(deck = %self.deck, "dealing");

        for player in &mut self.players {
            let cards = self.deck.draw_many(self.options.hand_size)?;
            player.hand.extend(cards);
        }

        let trump_card = self.deck.draw()?;
        self.table.trump = trump_card.suit;
        self.deck.put_on_bottom(trump_card);

        let roles = Roles {
            main_attacker: first_attacker,
            current_attacker: first_attacker,
            defender: self.next_player(first_attacker),
        };
        self.table.roles = roles;
        self.bouts = 0;
        self.phase = Phase::InProgress;

        info!(trump = %trump_card.suit, first_attacker, players = self.players.len(), "playing a round");
        notify(&mut self.observer, &RoundEvent::Dealt { trump_card, roles });

        Ok(())
    }

    /// Tops every hand back up to the hand size from the deck.
    ///
    /// Players draw in turn starting with the main attacker, so the defender
    /// draws after the attackers. Stops early when the deck runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running.
    pub fn refill(&mut self) -> Result<(), RoundError> {
        self.ensure_phase(Phase::InProgress)?;

        let mut index = self.table.roles.main_attacker;
        for _ in 0..self.players.len() {
            if self.deck.is_empty() {
                break;
            }

            let held = self.players[index].hand.len();
            if held < self.options.hand_size {
                let count = (self.options.hand_size - held).min(self.deck.len());
                let cards = self.deck.draw_many(count)?;
                self.players[index].hand.extend(cards);

                debug!(player = index, drawn = count, left = self.deck.len(), "refill");
                notify(
                    &mut self.observer,
                    &RoundEvent::Refilled {
                        player: index,
                        drawn: count,
                    },
                );
            }

            index = self.next_player(index);
        }

        Ok(())
    }
}
