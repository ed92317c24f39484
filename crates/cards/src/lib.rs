// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards, a shuffled deck is a new
//! deck and the original deck is left untouched:
//!
//! ```
//! # use showdown_cards::Deck;
//! let deck = Deck::default();
//! let mut shuffled = deck.shuffled(&mut rand::rng());
//! assert_eq!(shuffled.count(), Deck::SIZE);
//!
//! let card = shuffled.deal().unwrap();
//! assert_eq!(shuffled.count(), Deck::SIZE - 1);
//! assert_eq!(deck.count(), Deck::SIZE);
//! assert!(deck.iter().any(|c| *c == card));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
