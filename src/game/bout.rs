use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::{Card, CardList, CardPair};
use crate::error::{RoundError, RuleViolation};
use crate::observer::RoundEvent;
use crate::player::Player;
use crate::result::BoutResult;

use super::{Game, GameState, Phase, notify};

impl Game {
    /// Plays one bout and resolves it.
    ///
    /// Attackers take turns adding cards, starting with the current attacker;
    /// the defender answers after every attack until they resign. The bout
    /// ends once every attacker in a row has folded, the defender cannot be
    /// given more cards, or the table holds the maximum number of cards.
    /// Beaten cards go to the discard pile; on resignation the defender picks
    /// up the whole table.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is running or a strategy proposes an
    /// illegal move. Rule violations are not recoverable: the round should
    /// be abandoned with [`Game::cleanup`].
    pub fn play_bout(&mut self) -> Result<BoutResult, RoundError> {
        self.ensure_phase(Phase::InProgress)?;

        let mut resigned = false;
        let mut folds = 0;
        let players = self.players.len();

        debug!(
            attacker = self.table.roles.current_attacker,
            defender = self.table.roles.defender,
            "start bout"
        );

        while folds < players - 1
            && self.table.undefended.len() < self.players[self.table.roles.defender].hand.len()
            && self.table.len() < self.table.max_bout_cards
        {
            let attacker = self.table.roles.current_attacker;
            let attack = if self.players[attacker].hand.is_empty() {
                Vec::new()
            } else {
                let attack = self.ask_attack(attacker);
                self.validate_attack(attacker, &attack)
                    .map_err(|violation| reject(attacker, violation))?;
                attack
            };

            if attack.is_empty() {
                debug!(player = attacker, "fold");
                notify(&mut self.observer, &RoundEvent::Folded { player: attacker });
                folds += 1;
                self.table.roles.current_attacker = self.next_attacker(attacker);
                continue;
            }

            debug!(player = attacker, cards = %CardList(&attack), "attack");
            self.players[attacker].hand.remove_cards(&attack);
            notify(
                &mut self.observer,
                &RoundEvent::Attacked {
                    player: attacker,
                    cards: &attack,
                },
            );
            self.table.undefended.extend(attack);
            folds = 0;

            if !resigned {
                resigned = !self.defend()?;
            }
        }

        self.bouts += 1;
        let result = if resigned {
            self.pick_up()
        } else {
            self.discard_beaten()
        };

        Ok(result)
    }

    /// Asks the defender to answer the undefended cards. Returns `false` if
    /// the defender resigned.
    fn defend(&mut self) -> Result<bool, RoundError> {
        let defender = self.table.roles.defender;
        let defense = self.ask_defense(defender);

        if defense.is_empty() {
            debug!(player = defender, "resign");
            notify(&mut self.observer, &RoundEvent::Resigned { player: defender });
            return Ok(false);
        }

        self.validate_defense(defender, &defense)
            .map_err(|violation| reject(defender, violation))?;

        debug!(player = defender, cards = %CardList(&defense), "defense");
        self.players[defender].hand.remove_cards(&defense);

        let start = self.table.defended.len();
        let attacks = core::mem::take(&mut self.table.undefended);
        self.table.defended.extend(
            attacks
                .into_iter()
                .zip(defense)
                .map(|(attacking, defending)| CardPair {
                    attacking,
                    defending,
                }),
        );

        notify(
            &mut self.observer,
            &RoundEvent::Defended {
                player: defender,
                pairs: &self.table.defended[start..],
            },
        );
        Ok(true)
    }

    fn ask_attack(&mut self, attacker: usize) -> Vec<Card> {
        self.refresh_opponents();
        let state = GameState::new(&self.table, &self.opponents);
        let Player { hand, strategy, .. } = &mut self.players[attacker];
        strategy.attack(&state, hand.cards())
    }

    fn ask_defense(&mut self, defender: usize) -> Vec<Card> {
        self.refresh_opponents();
        let state = GameState::new(&self.table, &self.opponents);
        let Player { hand, strategy, .. } = &mut self.players[defender];
        strategy.defend(&state, hand.cards())
    }

    /// Moves every beaten pair to the discard pile.
    fn discard_beaten(&mut self) -> BoutResult {
        let mut moved = 0;
        for pair in self.table.defended.drain(..) {
            self.table.discard.push(pair.attacking);
            self.table.discard.push(pair.defending);
            moved += 2;
        }
        moved += self.table.undefended.len();
        self.table.discard.append(&mut self.table.undefended);

        self.resolved(BoutResult::Beaten, moved)
    }

    /// The defender takes every card on the table.
    fn pick_up(&mut self) -> BoutResult {
        let moved = self.table.len();
        let defender = &mut self.players[self.table.roles.defender].hand;
        defender.extend(self.table.undefended.drain(..));
        defender.extend_pairs(self.table.defended.drain(..));

        self.resolved(BoutResult::Resigned, moved)
    }

    fn resolved(&mut self, result: BoutResult, cards: usize) -> BoutResult {
        debug!(?result, cards, discard = self.table.discard.len(), "bout resolved");
        notify(&mut self.observer, &RoundEvent::BoutResolved { result, cards });
        result
    }
}

fn reject(player: usize, violation: RuleViolation) -> RoundError {
    warn!(player, %violation, "rule violation");
    RoundError::Rule { player, violation }
}
