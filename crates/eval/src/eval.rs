// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator visits every 5 cards subset of the given cards, classifies
//! each subset and keeps the strongest one. A classified hand keeps its five
//! cards in tie-break order: the cards of the largest group first (quads,
//! trips, pairs), then the kickers, both from highest to lowest rank. This
//! makes comparing two hands of the same category a positional comparison
//! of their card ranks.
use ahash::AHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, Rank, Suit, ksubset::for_each_ksubset};

/// The number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, straights, or flushes.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The category ordinal from 0 for high card to 9 for royal flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The category label.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }

    /// Returns all categories from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The best 5 cards hand found in a set of cards.
///
/// Hands are ordered by category and then by their cards ranks position by
/// position, suits are ignored so two hands with the same category and ranks
/// are equal.
///
/// A deserialized hand is classified again from its cards, the category must
/// match the cards and the cards are put back in tie-break order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "HandData")]
pub struct EvaluatedHand {
    rank: HandRank,
    cards: [Card; HAND_SIZE],
}

/// Serialized hand fields, validated into an [EvaluatedHand].
#[derive(Deserialize)]
struct HandData {
    rank: HandRank,
    cards: [Card; HAND_SIZE],
}

impl TryFrom<HandData> for EvaluatedHand {
    type Error = EvalError;

    fn try_from(data: HandData) -> Result<Self, Self::Error> {
        let hand = Self::eval(&data.cards)?;
        if hand.rank != data.rank {
            return Err(EvalError::RankMismatch {
                rank: data.rank,
                cards: hand.rank,
            });
        }

        Ok(hand)
    }
}

impl EvaluatedHand {
    /// Evaluates the best 5 cards hand in `cards`.
    ///
    /// Fails if there are less than 5 cards or if a card appears more than once.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let cards = ["AH", "KH", "QH", "JH", "TH", "2C", "3D"]
    ///     .iter()
    ///     .map(|c| c.parse::<Card>())
    ///     .collect::<Result<Vec<_>, _>>()
    ///     .unwrap();
    ///
    /// let hand = EvaluatedHand::eval(&cards).unwrap();
    /// assert_eq!(hand.rank(), HandRank::RoyalFlush);
    /// assert_eq!(hand.to_string(), "Royal Flush [AH KH QH JH TH]");
    /// ```
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        if cards.len() < HAND_SIZE {
            return Err(EvalError::TooFewCards(cards.len()));
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        for card in cards {
            if !seen.insert(*card) {
                return Err(EvalError::DuplicateCard(*card));
            }
        }

        let mut best: Option<EvaluatedHand> = None;
        for_each_ksubset(cards.len(), HAND_SIZE, |idx| {
            let hand = Self::classify([
                cards[idx[0]],
                cards[idx[1]],
                cards[idx[2]],
                cards[idx[3]],
                cards[idx[4]],
            ]);

            trace!("Candidate {hand}");

            if best.is_none_or(|b| hand > b) {
                best = Some(hand);
            }
        });

        let best = best.ok_or(EvalError::TooFewCards(cards.len()))?;
        debug!("Best hand {best} from {} cards", cards.len());
        Ok(best)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand category label.
    pub fn name(&self) -> &'static str {
        self.rank.name()
    }

    /// The hand cards in tie-break order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The values compared position by position to break ties.
    ///
    /// These are the cards rank values except for the wheel straight where the
    /// ace, that is the last card, counts as 1.
    pub fn tie_break_values(&self) -> [u8; HAND_SIZE] {
        let mut values = self.cards.map(|c| c.rank().value());
        if is_wheel(&self.cards) {
            values[HAND_SIZE - 1] = 1;
        }

        values
    }

    /// Classifies a 5 cards hand.
    fn classify(mut cards: [Card; HAND_SIZE]) -> Self {
        let mut rank_counts = [0u8; Rank::Ace as usize + 1];
        let mut suit_counts = [0u8; Suit::COUNT];

        for card in &cards {
            rank_counts[card.rank().value() as usize] += 1;
            suit_counts[card.suit().index()] += 1;
        }

        let count = |c: &Card| rank_counts[c.rank().value() as usize];

        // Largest groups first, then higher ranks, suits only make the order stable.
        cards.sort_by(|a, b| {
            count(b)
                .cmp(&count(a))
                .then_with(|| b.rank().cmp(&a.rank()))
                .then_with(|| a.suit().index().cmp(&b.suit().index()))
        });

        let is_flush = suit_counts.iter().any(|&n| n as usize >= HAND_SIZE);

        let distinct = rank_counts.iter().filter(|&&n| n > 0).count();
        let wheel = distinct == HAND_SIZE && is_ace_low(&cards);
        let is_straight = distinct == HAND_SIZE
            && (wheel || cards[0].rank().value() - cards[4].rank().value() == 4);

        // For the wheel the ace plays low and goes after the five.
        if wheel {
            cards.rotate_left(1);
        }

        let first_group = count(&cards[0]);
        let second_group = cards.get(first_group as usize).map(count).unwrap_or(0);

        let rank = match (is_straight, is_flush, first_group, second_group) {
            (true, true, _, _) if cards[0].rank() == Rank::Ace => HandRank::RoyalFlush,
            (true, true, _, _) => HandRank::StraightFlush,
            (_, _, 4, _) => HandRank::FourOfAKind,
            (_, _, 3, 2) => HandRank::FullHouse,
            (_, true, _, _) => HandRank::Flush,
            (true, _, _, _) => HandRank::Straight,
            (_, _, 3, _) => HandRank::ThreeOfAKind,
            (_, _, 2, 2) => HandRank::TwoPair,
            (_, _, 2, _) => HandRank::OnePair,
            _ => HandRank::HighCard,
        };

        Self { rank, cards }
    }
}

/// Checks if cards sorted by descending rank are A, 5, 4, 3, 2.
fn is_ace_low(cards: &[Card; HAND_SIZE]) -> bool {
    let ranks = cards.map(|c| c.rank());
    ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce]
}

/// Checks if cards in tie-break order are the wheel 5, 4, 3, 2, A.
fn is_wheel(cards: &[Card; HAND_SIZE]) -> bool {
    let ranks = cards.map(|c| c.rank());
    ranks == [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tie_break_values().cmp(&other.tie_break_values()))
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.cards;
        write!(f, "{} [{c1} {c2} {c3} {c4} {c5}]", self.rank)
    }
}
