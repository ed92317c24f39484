// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Finds the best 5 cards hand out of 5 or more cards and orders hands by
//! strength. Each player in a round combines 4 hole cards with 5 community
//! cards and the evaluator picks the strongest of the 126 possible hands.
//!
//! To use the evaluator create a hand and use [EvaluatedHand] to evaluate the
//! hand and compare it with other hands:
//!
//! ```
//! # use showdown_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let h1 = EvaluatedHand::eval(&cards[0..5]).unwrap();
//! let h2 = EvaluatedHand::eval(&cards[5..]).unwrap();
//! assert_eq!(h1.rank(), HandRank::StraightFlush);
//! assert!(h2 > h1);
//! ```
//!
//! To rank all players in a round use [rank_players], the first result is the
//! player with the strongest hand:
//!
//! ```
//! # use showdown_eval::*;
//! let round = Round::deal(&mut rand::rng(), 4).unwrap();
//! let results = round.rank_players().unwrap();
//! assert_eq!(results.len(), 4);
//! assert!(results[0].hand >= results[3].hand);
//! ```
//!
//! The **`parallel`** feature enables `par_rank_players` that evaluates
//! players hands from parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{EvaluatedHand, HAND_SIZE, HandRank};

pub mod ksubset;

pub mod round;
pub use round::{
    COMMUNITY_CARDS, HOLE_CARDS, MAX_PLAYERS, Player, PlayerHandResult, PlayerId, Round,
    finishing_rank, rank_players,
};

#[cfg(feature = "parallel")]
pub use round::par_rank_players;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
