//! CLI Durak example: bots play a few rounds and the table is narrated.
//!
//! Usage: `cargo run --example cli_durak -- [players] [rounds] [seed]`
//! Set `RUST_LOG=durak=debug` to follow the engine.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use durak::{
    BoutResult, CardList, Game, GameOptions, MAX_PLAYERS, MIN_PLAYERS, MinCardStrategy, Player,
    RandomStrategy, RoundEvent,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let mut args = env::args().skip(1);
    let players = parse_arg(args.next(), 3).clamp(MIN_PLAYERS, MAX_PLAYERS);
    let rounds = parse_arg(args.next(), 3);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    println!("Durak CLI example: {players} players, {rounds} rounds, seed {seed}");

    let seats = (0..players)
        .map(|index| {
            let name = format!("Bot {}", index + 1);
            if index % 2 == 0 {
                Player::new(name, MinCardStrategy)
            } else {
                Player::new(name, RandomStrategy::new(seed.wrapping_add(index as u64)))
            }
        })
        .collect();

    let mut game = match Game::new(seats, GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    for player in game.players() {
        println!("  {} plays the {}", player.name(), player.strategy_name());
    }

    game.set_observer(narrate);

    let mut losses = vec![0usize; players];
    for round in 0..rounds {
        println!();
        println!("Round {}", round + 1);

        match game.play_round(round % players) {
            Ok(result) => match result.losing_player {
                Some(loser) => {
                    losses[loser] += 1;
                    println!("{} is the durak", game.players()[loser].name());
                }
                None => println!("Nobody is left holding cards: a draw"),
            },
            Err(err) => println!("Round error: {err}"),
        }
    }

    println!();
    println!("Losses:");
    for (player, lost) in game.players().iter().zip(losses) {
        println!("  {}: {lost}", player.name());
    }
}

fn narrate(event: &RoundEvent<'_>) {
    match event {
        RoundEvent::Dealt { trump_card, roles } => println!(
            "Trump card {trump_card}, player {} attacks player {}",
            roles.main_attacker, roles.defender
        ),
        RoundEvent::Attacked { player, cards } => {
            println!("  {player} attacks with {}", CardList(*cards));
        }
        RoundEvent::Defended { player, pairs } => {
            println!("  {player} beats {}", CardList(*pairs));
        }
        RoundEvent::Resigned { player } => println!("  {player} gives up"),
        RoundEvent::BoutResolved { result, cards } => match result {
            BoutResult::Beaten => println!("  {cards} cards discarded"),
            BoutResult::Resigned => println!("  {cards} cards picked up"),
        },
        RoundEvent::TurnShifted { roles } => println!(
            "Player {} attacks player {}",
            roles.main_attacker, roles.defender
        ),
        RoundEvent::Folded { .. }
        | RoundEvent::Refilled { .. }
        | RoundEvent::RoundFinished { .. } => {}
    }
}

fn parse_arg(arg: Option<String>, default: usize) -> usize {
    arg.and_then(|arg| arg.parse().ok()).unwrap_or(default)
}
