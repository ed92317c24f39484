// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::{Card, HandRank, round::MAX_PLAYERS};

/// Errors returned by the evaluator and the round functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Less than five cards were given, no hand can be formed.
    #[error("a poker hand needs at least 5 cards, got {0}")]
    TooFewCards(usize),
    /// The same card was given more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The number of players cannot be dealt from a single deck.
    #[error("invalid number of players {0}, expected 1 to {max}", max = MAX_PLAYERS)]
    InvalidPlayers(usize),
    /// A hand category does not match the category of its cards.
    #[error("hand category {rank} does not match its cards, a {cards}")]
    RankMismatch {
        /// The given category.
        rank: HandRank,
        /// The category of the cards.
        cards: HandRank,
    },
    /// The deck ran out of cards while dealing.
    #[error("not enough cards left in the deck")]
    DeckExhausted,
}
