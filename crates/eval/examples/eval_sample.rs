// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_sample -- --rounds 100000
// ```
//
// Deals random rounds and prints how often each category is the best hand of
// a player and how often it wins the round.
use clap::{Parser, value_parser};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of rounds to deal.
    #[clap(long, short, default_value_t = 100_000)]
    rounds: usize,
    /// The number of players in each round.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
    players: u8,
    /// The random seed.
    #[clap(long, short, default_value_t = 1)]
    seed: u64,
}

fn main() -> Result<(), EvalError> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let now = Instant::now();
    let mut hands = [0usize; 10];
    let mut wins = [0usize; 10];

    for _ in 0..cli.rounds {
        let round = Round::deal(&mut rng, cli.players as usize)?;
        let results = round.rank_players()?;

        for r in &results {
            hands[r.hand.rank() as usize] += 1;
        }

        if let Some(winner) = results.first() {
            wins[winner.hand.rank() as usize] += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = hands.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("{:<16} {:>10} {:>8} {:>10}", "Category", "Hands", "%", "Wins");
    for rank in HandRank::ranks() {
        let n = hands[rank as usize];
        println!(
            "{:<16} {:>10} {:>7.3}% {:>10}",
            rank.name(),
            n,
            n as f64 * 100.0 / total.max(1) as f64,
            wins[rank as usize]
        );
    }

    Ok(())
}
