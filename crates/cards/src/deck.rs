// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing cards from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid rank '{0}'")]
    InvalidRank(char),
    /// The suit character is not one of `CDHS`.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
    /// A card is written as exactly two characters, rank then suit.
    #[error("invalid card '{0}', expected rank and suit like 'AH'")]
    InvalidLength(String),
}

/// A Poker card.
///
/// A card is an immutable rank and suit pair, cards are small `Copy` values
/// that can be used as hash keys and serialized.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Card::new(Rank::from_char(r)?, Suit::from_char(u)?)),
            _ => Err(ParseCardError::InvalidLength(s.to_string())),
        }
    }
}

/// Card rank.
///
/// The discriminant is the rank value used for comparisons, from 2 for a deuce
/// to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Parses a rank from its character.
    pub fn from_char(c: char) -> Result<Rank, ParseCardError> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no ordering significance, the discriminant is only an index
/// used by the evaluator to count cards per suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit index, from 0 to 3.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a suit from its character, either upper or lower case.
    pub fn from_char(c: char) -> Result<Suit, ParseCardError> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        Self::default().shuffled(rng)
    }

    /// Returns a new deck with this deck cards in random order.
    ///
    /// Uses a Fisher-Yates shuffle from the last card down to the second
    /// swapping each card with a card picked uniformly at random from the
    /// cards before it (itself included).
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }

        Self { cards }
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Iterates the deck cards in order, the last card is the next to be dealt.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{HashMap, HashSet};
    use rand::rngs::StdRng;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!("ah".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(" 9c ".parse::<Card>(), Ok(Card::new(Rank::Nine, Suit::Clubs)));

        assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank('1')));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert!(matches!(
            "10H".parse::<Card>(),
            Err(ParseCardError::InvalidLength(_))
        ));
        assert!(matches!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidLength(_))
        ));
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert!(Rank::King < Rank::Ace);
        assert!(Rank::Deuce < Rank::Trey);
        assert_eq!(Rank::ranks().count(), Rank::COUNT);
    }

    #[test]
    fn suit_indices() {
        let indices = Suit::suits().map(|s| s.index()).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(Suit::suits().count(), Suit::COUNT);
    }

    #[test]
    fn deck_has_unique_cards() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        // Fixed suit major order.
        assert_eq!(deck.iter().next(), Some(&Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!(deck.iter().last(), Some(&Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn shuffle_is_permutation() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..100 {
            let shuffled = deck.shuffled(&mut rng);
            assert_eq!(shuffled.count(), Deck::SIZE);

            let cards = shuffled.iter().copied().collect::<HashSet<_>>();
            assert_eq!(cards.len(), Deck::SIZE);
            assert!(deck.iter().all(|c| cards.contains(c)));
        }
    }

    #[test]
    fn shuffle_does_not_change_input() {
        let deck = Deck::default();
        let before = deck.iter().copied().collect::<Vec<_>>();

        let shuffled = deck.shuffled(&mut StdRng::seed_from_u64(7));
        let after = deck.iter().copied().collect::<Vec<_>>();
        assert_eq!(before, after);

        let order = shuffled.iter().copied().collect::<Vec<_>>();
        assert_ne!(before, order);
    }

    #[test]
    fn shuffle_is_seeded() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        assert!(d1.iter().eq(d2.iter()));
    }

    #[test]
    fn shuffle_top_card_distribution() {
        // Each card should land on top about 200 times.
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(2025);
        let mut counts = HashMap::<Card, usize>::default();

        for _ in 0..Deck::SIZE * 200 {
            let mut shuffled = deck.shuffled(&mut rng);
            if let Some(card) = shuffled.deal() {
                *counts.entry(card).or_default() += 1;
            }
        }

        assert_eq!(counts.len(), Deck::SIZE);
        assert!(counts.values().all(|&n| (100..300).contains(&n)));
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::default();
        assert_eq!(deck.deal(), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let mut dealt = HashSet::default();
        while let Some(card) = deck.deal() {
            dealt.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(dealt.len(), Deck::SIZE - 1);
        assert!(!dealt.contains(&Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.deal(), None);
    }
}
