// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players ranking for a round.
//!
//! Each player combines their hole cards with the community cards, the best
//! hand of each player is evaluated and players are sorted from the strongest
//! to the weakest hand. The 1-based position of a player in the result is the
//! player finishing rank.
use ahash::AHashSet;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Deck, EvalError, EvaluatedHand};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_rank_players;

/// The number of hole cards dealt to each player.
pub const HOLE_CARDS: usize = 4;

/// The number of community cards.
pub const COMMUNITY_CARDS: usize = 5;

/// The maximum number of players that can be dealt from one deck.
pub const MAX_PLAYERS: usize = (Deck::SIZE - COMMUNITY_CARDS) / HOLE_CARDS;

/// A player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The integer identifier.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A player and their hole cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// The player identifier.
    pub id: PlayerId,
    /// The player private cards.
    pub hole_cards: [Card; HOLE_CARDS],
}

impl Player {
    /// Creates a player with the given hole cards.
    pub fn new(id: PlayerId, hole_cards: [Card; HOLE_CARDS]) -> Self {
        Self { id, hole_cards }
    }
}

/// A player best hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHandResult {
    /// The player identifier.
    pub player_id: PlayerId,
    /// The player best hand.
    pub hand: EvaluatedHand,
}

/// Ranks players from the strongest to the weakest hand.
///
/// Players with equal hands are ordered by their identifiers, the lower
/// identifier first, so the result is deterministic.
///
/// Fails with [EvalError::DuplicateCard] if a card is dealt more than once,
/// either to two players or to a player and the board.
pub fn rank_players(
    players: &[Player],
    community: &[Card; COMMUNITY_CARDS],
) -> Result<Vec<PlayerHandResult>, EvalError> {
    check_dealt_cards(players, community)?;

    let mut results = players
        .iter()
        .map(|p| evaluate_player(p, community))
        .collect::<Result<Vec<_>, _>>()?;

    sort_results(&mut results);
    log_results(&results);
    Ok(results)
}

/// Returns the 1-based finishing rank of a player in ranked results.
pub fn finishing_rank(results: &[PlayerHandResult], player_id: PlayerId) -> Option<usize> {
    results
        .iter()
        .position(|r| r.player_id == player_id)
        .map(|pos| pos + 1)
}

/// Checks that all hole and community cards are distinct.
fn check_dealt_cards(
    players: &[Player],
    community: &[Card; COMMUNITY_CARDS],
) -> Result<(), EvalError> {
    let mut seen = AHashSet::with_capacity(players.len() * HOLE_CARDS + COMMUNITY_CARDS);
    let dealt = community
        .iter()
        .chain(players.iter().flat_map(|p| p.hole_cards.iter()));

    for card in dealt {
        if !seen.insert(*card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

fn evaluate_player(
    player: &Player,
    community: &[Card; COMMUNITY_CARDS],
) -> Result<PlayerHandResult, EvalError> {
    let mut cards = Vec::with_capacity(HOLE_CARDS + COMMUNITY_CARDS);
    cards.extend_from_slice(&player.hole_cards);
    cards.extend_from_slice(community);

    Ok(PlayerHandResult {
        player_id: player.id,
        hand: EvaluatedHand::eval(&cards)?,
    })
}

fn sort_results(results: &mut [PlayerHandResult]) {
    results.sort_by(|r1, r2| {
        r2.hand
            .cmp(&r1.hand)
            .then_with(|| r1.player_id.cmp(&r2.player_id))
    });
}

fn log_results(results: &[PlayerHandResult]) {
    for (pos, r) in results.iter().enumerate() {
        debug!("Rank {} player {} {}", pos + 1, r.player_id, r.hand);
    }
}

/// The cards dealt for a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    players: Vec<Player>,
    community: [Card; COMMUNITY_CARDS],
}

impl Round {
    /// Creates a round from already dealt cards.
    ///
    /// Fails if a card is dealt more than once.
    pub fn new(
        players: Vec<Player>,
        community: [Card; COMMUNITY_CARDS],
    ) -> Result<Self, EvalError> {
        check_dealt_cards(&players, &community)?;
        Ok(Self { players, community })
    }

    /// Deals a round from a new shuffled deck.
    ///
    /// Players get identifiers from 1 to `num_players` and are dealt their hole
    /// cards in turn, then the community cards are dealt.
    pub fn deal<R: Rng>(rng: &mut R, num_players: usize) -> Result<Self, EvalError> {
        if !(1..=MAX_PLAYERS).contains(&num_players) {
            return Err(EvalError::InvalidPlayers(num_players));
        }

        let mut deck = Deck::new_and_shuffled(rng);

        let players = (1..=num_players as u32)
            .map(|id| Ok(Player::new(PlayerId::new(id), deal_cards(&mut deck)?)))
            .collect::<Result<Vec<_>, EvalError>>()?;

        let community: [Card; COMMUNITY_CARDS] = deal_cards(&mut deck)?;

        debug!(
            "Dealt {num_players} players, {} cards left in the deck",
            deck.count()
        );

        Ok(Self { players, community })
    }

    /// The round players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The round community cards.
    pub fn community(&self) -> &[Card; COMMUNITY_CARDS] {
        &self.community
    }

    /// Ranks this round players, see [rank_players].
    pub fn rank_players(&self) -> Result<Vec<PlayerHandResult>, EvalError> {
        rank_players(&self.players, &self.community)
    }
}

fn deal_cards<const N: usize>(deck: &mut Deck) -> Result<[Card; N], EvalError> {
    let mut cards = Vec::with_capacity(N);
    for _ in 0..N {
        cards.push(deck.deal().ok_or(EvalError::DeckExhausted)?);
    }

    cards.try_into().map_err(|_| EvalError::DeckExhausted)
}
