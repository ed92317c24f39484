// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

use showdown_eval::{Card, EvaluatedHand, MAX_PLAYERS, Round};

pub mod report;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals a random round and ranks the players hands.
    Deal {
        /// The number of players.
        #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
        players: u8,
        /// Seed for a repeatable deal.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Print the round as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Evaluates the best hand out of 5 or more cards.
    Eval {
        /// The cards, for example: AH KD 7C 7S 2D.
        #[clap(required = true)]
        cards: Vec<Card>,
        /// Print the hand as JSON.
        #[clap(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Deal {
            players,
            seed,
            json,
        } => {
            info!("Dealing {players} players with seed {seed:?}");

            let round = match seed {
                Some(seed) => Round::deal(&mut StdRng::seed_from_u64(seed), players as usize)?,
                None => Round::deal(&mut rand::rng(), players as usize)?,
            };

            let results = round.rank_players()?;
            if json {
                report::round_json(&mut stdout, &round, &results)?;
            } else {
                report::round_text(&mut stdout, &round, &results)?;
            }
        }
        Command::Eval { cards, json } => {
            let hand = EvaluatedHand::eval(&cards)?;
            if json {
                report::hand_json(&mut stdout, &hand)?;
            } else {
                report::hand_text(&mut stdout, &hand)?;
            }
        }
    }

    Ok(())
}
