use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::game::GameState;

use super::{Strategy, beating_cards, follow_up_candidates};

/// Plays random legal moves.
///
/// Folding and resigning are always among the options, so a random player
/// sometimes gives up even when it could go on.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy with its own seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random strategy"
    }

    fn attack(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
        if hand.is_empty() {
            return Vec::new();
        }

        if state.is_initial_attack() {
            let index = self.rng.random_range(0..hand.len());
            return alloc::vec![hand[index]];
        }

        if state.attack_room() == 0 {
            return Vec::new();
        }

        // Index 0 stands for folding.
        let candidates = follow_up_candidates(state, hand);
        let pick = self.rng.random_range(0..=candidates.len());
        if pick == 0 {
            return Vec::new();
        }
        alloc::vec![candidates[pick - 1]]
    }

    fn defend(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
        let mut used = alloc::vec![false; hand.len()];
        let mut defense = Vec::with_capacity(state.undefended_cards().len());

        for attacking in state.undefended_cards() {
            // Index 0 stands for resigning.
            let candidates = beating_cards(state, hand, &used, attacking);
            let pick = self.rng.random_range(0..=candidates.len());
            if pick == 0 {
                return Vec::new();
            }

            let index = candidates[pick - 1];
            used[index] = true;
            defense.push(hand[index]);
        }

        defense
    }
}
