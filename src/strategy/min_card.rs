use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;
use crate::rules;

use super::{Strategy, beating_cards, follow_up_candidates};

/// Always plays the cheapest card that does the job.
///
/// Attacks with the lowest card (trumps count above everything else), keeps
/// piling on with the lowest matching rank while the table has room, and
/// beats every undefended card with the lowest card that can. Resigns when
/// some card cannot be beaten.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinCardStrategy;

impl Strategy for MinCardStrategy {
    fn name(&self) -> &str {
        "Minimal card strategy"
    }

    fn attack(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
        let trump = state.trump();

        if state.is_initial_attack() {
            return hand
                .iter()
                .min_by(|lhs, rhs| rules::compare(lhs, rhs, trump))
                .map(|card| alloc::vec![*card])
                .unwrap_or_default();
        }

        if state.attack_room() == 0 {
            return Vec::new();
        }

        follow_up_candidates(state, hand)
            .into_iter()
            .min_by(|lhs, rhs| rules::compare(lhs, rhs, trump))
            .map(|card| alloc::vec![card])
            .unwrap_or_default()
    }

    fn defend(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
        let trump = state.trump();
        let mut used = alloc::vec![false; hand.len()];
        let mut defense = Vec::with_capacity(state.undefended_cards().len());

        for attacking in state.undefended_cards() {
            let cheapest = beating_cards(state, hand, &used, attacking)
                .into_iter()
                .min_by(|&lhs, &rhs| rules::compare(&hand[lhs], &hand[rhs], trump));

            let Some(index) = cheapest else {
                return Vec::new();
            };
            used[index] = true;
            defense.push(hand[index]);
        }

        defense
    }
}
