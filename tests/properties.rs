//! Whole-round properties over random seeds and table sizes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;

use durak::rules::can_beat;
use durak::{
    Card, DECK_SIZE, Game, GameOptions, GameState, MAX_PLAYERS, MIN_PLAYERS, MinCardStrategy,
    Phase, Player, RandomStrategy, RoundEvent, Strategy, Suit,
};
use proptest::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: Once = Once::new();

/// Logs at the level in `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn init_logging() {
    LOGGING.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[derive(Default)]
struct Tally {
    trump: Option<Suit>,
    table: usize,
    max_table: usize,
    bad_defenses: usize,
    bouts: usize,
}

/// Records the largest table a strategy is shown, then defers to `inner`.
struct Gauge {
    inner: Box<dyn Strategy>,
    largest: Rc<Cell<usize>>,
}

impl Gauge {
    fn measure(&self, state: &GameState<'_>) {
        self.largest.set(self.largest.get().max(state.table_len()));
    }
}

impl Strategy for Gauge {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn attack(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
        self.measure(state);
        self.inner.attack(state, hand)
    }

    fn defend(&mut self, state: &GameState<'_>, hand: &[Card]) -> Vec<Card> {
        self.measure(state);
        self.inner.defend(state, hand)
    }
}

fn table(seed: u64, players: usize, random_mask: u8, largest: &Rc<Cell<usize>>) -> Vec<Player> {
    (0..players)
        .map(|index| {
            let inner: Box<dyn Strategy> = if random_mask & (1 << index) == 0 {
                Box::new(MinCardStrategy)
            } else {
                Box::new(RandomStrategy::new(seed ^ index as u64))
            };
            let gauge = Gauge {
                inner,
                largest: Rc::clone(largest),
            };
            Player::new(format!("P{index}"), gauge)
        })
        .collect()
}

fn watch(game: &mut Game) -> Rc<RefCell<Tally>> {
    let tally = Rc::new(RefCell::new(Tally::default()));
    let sink = Rc::clone(&tally);
    game.set_observer(move |event: &RoundEvent<'_>| {
        let mut tally = sink.borrow_mut();
        match *event {
            RoundEvent::Dealt { trump_card, .. } => tally.trump = Some(trump_card.suit),
            RoundEvent::Attacked { cards, .. } => tally.table += cards.len(),
            // Defended pairs are the attacks already counted above.
            RoundEvent::Defended { pairs, .. } => {
                let trump = tally.trump.unwrap_or(Suit::Clubs);
                tally.bad_defenses += pairs
                    .iter()
                    .filter(|pair| !can_beat(&pair.attacking, &pair.defending, trump))
                    .count();
            }
            RoundEvent::BoutResolved { .. } => {
                tally.bouts += 1;
                tally.table = 0;
            }
            _ => {}
        }
        tally.max_table = tally.max_table.max(tally.table);
    });
    tally
}

fn check_round(
    seed: u64,
    players: usize,
    random_mask: u8,
    first: usize,
) -> Result<(), TestCaseError> {
    init_logging();

    let largest = Rc::new(Cell::new(0));
    let options = GameOptions::default().with_check_integrity(true);
    let mut game = Game::new(table(seed, players, random_mask, &largest), options, seed).unwrap();
    let deck_id = game.deck_id();
    let tally = watch(&mut game);

    let result = game.play_round(first % players).unwrap();

    prop_assert!(result.losing_player.is_none_or(|loser| loser < players));
    prop_assert!(result.bouts > 0);
    prop_assert_eq!(game.phase(), Phase::Idle);
    prop_assert_eq!(game.deck().len(), DECK_SIZE);
    prop_assert_eq!(game.deck_id(), deck_id);
    prop_assert!(game.audit().is_ok());

    let tally = tally.borrow();
    prop_assert_eq!(tally.bouts, result.bouts);
    prop_assert!(tally.max_table <= options.max_bout_cards);
    prop_assert!(largest.get() <= options.max_bout_cards);
    prop_assert_eq!(tally.bad_defenses, 0);
    Ok(())
}

#[test]
fn full_table_of_pairs_stays_within_the_cap() {
    check_round(423_835_379_347_800_046, 2, 126, 1).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rounds_conserve_cards_and_follow_the_rules(
        seed in any::<u64>(),
        players in MIN_PLAYERS..=MAX_PLAYERS,
        random_mask in any::<u8>(),
        first in 0usize..MAX_PLAYERS,
    ) {
        check_round(seed, players, random_mask, first)?;
    }

    #[test]
    fn same_seed_replays_the_same_round(
        seed in any::<u64>(),
        players in MIN_PLAYERS..=MAX_PLAYERS,
    ) {
        init_logging();

        let play = || {
            let all_random = u8::MAX;
            let largest = Rc::new(Cell::new(0));
            let seats = table(seed, players, all_random, &largest);
            let mut game = Game::new(seats, GameOptions::default(), seed).unwrap();
            game.play_round(0).unwrap()
        };

        prop_assert_eq!(play(), play());
    }

    #[test]
    fn back_to_back_rounds_reuse_the_deck(seed in any::<u64>(), rounds in 1usize..4) {
        init_logging();

        let largest = Rc::new(Cell::new(0));
        let seats = table(seed, 3, 0b010, &largest);
        let mut game = Game::new(seats, GameOptions::default(), seed).unwrap();
        let deck_id = game.deck_id();

        for round in 0..rounds {
            game.play_round(round % 3).unwrap();
            prop_assert_eq!(game.deck().len(), DECK_SIZE);
            prop_assert!(game.deck().cards().all(|card| card.deck == deck_id));
        }
    }
}
