use crate::card::Card;
use crate::error::RuleViolation;
use crate::rules;

use super::Game;

impl Game {
    /// Checks an attack by `attacker` before any card leaves the hand.
    pub(super) fn validate_attack(
        &self,
        attacker: usize,
        cards: &[Card],
    ) -> Result<(), RuleViolation> {
        self.validate_origin(cards)?;
        self.validate_held(attacker, cards)?;

        let table = &self.table;
        if table.len() == 0 {
            let Some(first) = cards.first() else {
                return Err(RuleViolation::EmptyAttack);
            };
            if cards.iter().any(|card| card.rank != first.rank) {
                return Err(RuleViolation::MixedRanks);
            }
        } else if let Some(card) = cards
            .iter()
            .find(|card| !rules::rank_on_table(card.rank, &table.undefended, &table.defended))
        {
            return Err(RuleViolation::UnseenRank(*card));
        }

        let defender_cards = self.players[table.roles.defender].hand.len();
        if cards.len() + table.undefended.len() > defender_cards {
            return Err(RuleViolation::DefenderOverloaded);
        }
        if cards.len() + table.len() > table.max_bout_cards {
            return Err(RuleViolation::BoutLimitExceeded);
        }

        Ok(())
    }

    /// Checks a defense by `defender`. An empty defense is a resignation and
    /// always valid.
    pub(super) fn validate_defense(
        &self,
        defender: usize,
        cards: &[Card],
    ) -> Result<(), RuleViolation> {
        if cards.is_empty() {
            return Ok(());
        }

        self.validate_origin(cards)?;
        self.validate_held(defender, cards)?;

        let undefended = &self.table.undefended;
        if cards.len() != undefended.len() {
            return Err(RuleViolation::DefenseCountMismatch {
                expected: undefended.len(),
                actual: cards.len(),
            });
        }

        for (attacking, defending) in undefended.iter().zip(cards) {
            if !rules::can_beat(attacking, defending, self.table.trump) {
                return Err(RuleViolation::CannotBeat {
                    attacking: *attacking,
                    defending: *defending,
                });
            }
        }

        Ok(())
    }

    fn validate_origin(&self, cards: &[Card]) -> Result<(), RuleViolation> {
        let deck = self.deck.id();
        match cards.iter().find(|card| card.deck != deck) {
            Some(card) => Err(RuleViolation::WrongDeck(*card)),
            None => Ok(()),
        }
    }

    /// The move must shrink the hand by exactly the number of cards played.
    fn validate_held(&self, player: usize, cards: &[Card]) -> Result<(), RuleViolation> {
        let hand = &self.players[player].hand;
        let held = hand.count_held(cards);
        if held != cards.len() {
            return Err(RuleViolation::HandMismatch {
                expected: hand.len().saturating_sub(cards.len()),
                actual: hand.len() - held,
            });
        }
        Ok(())
    }
}
