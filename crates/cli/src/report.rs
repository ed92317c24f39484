// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rounds and hands output.
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use showdown_eval::{Card, EvaluatedHand, HandRank, PlayerHandResult, PlayerId, Round};

/// A ranked player in the JSON output.
#[derive(Debug, Serialize)]
struct Ranked<'a> {
    rank: usize,
    player_id: PlayerId,
    category: HandRank,
    name: &'static str,
    cards: &'a [Card],
}

impl<'a> Ranked<'a> {
    fn new(rank: usize, player_id: PlayerId, hand: &'a EvaluatedHand) -> Self {
        Self {
            rank,
            player_id,
            category: hand.rank(),
            name: hand.name(),
            cards: hand.cards(),
        }
    }
}

/// The JSON output for a round.
#[derive(Debug, Serialize)]
struct RoundReport<'a> {
    round: &'a Round,
    ranking: Vec<Ranked<'a>>,
}

fn cards_text(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the round cards and the players ranking.
pub fn round_text<W: Write>(w: &mut W, round: &Round, results: &[PlayerHandResult]) -> Result<()> {
    for player in round.players() {
        writeln!(w, "Player {:<3} {}", player.id, cards_text(&player.hole_cards))?;
    }

    writeln!(w, "Board      {}", cards_text(round.community()))?;
    writeln!(w)?;

    for (pos, r) in results.iter().enumerate() {
        writeln!(
            w,
            "{:>2}. Player {:<3} {:<16} {}",
            pos + 1,
            r.player_id,
            r.hand.name(),
            cards_text(r.hand.cards())
        )?;
    }

    Ok(())
}

/// Writes the round and the players ranking as JSON.
pub fn round_json<W: Write>(w: &mut W, round: &Round, results: &[PlayerHandResult]) -> Result<()> {
    let report = RoundReport {
        round,
        ranking: results
            .iter()
            .enumerate()
            .map(|(pos, r)| Ranked::new(pos + 1, r.player_id, &r.hand))
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)?;
    Ok(())
}

/// Writes an evaluated hand.
pub fn hand_text<W: Write>(w: &mut W, hand: &EvaluatedHand) -> Result<()> {
    writeln!(w, "{} {}", hand.name(), cards_text(hand.cards()))?;
    Ok(())
}

/// Writes an evaluated hand as JSON.
pub fn hand_json<W: Write>(w: &mut W, hand: &EvaluatedHand) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, hand)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{Player, rank_players};

    fn cards<const N: usize>(s: &str) -> [Card; N] {
        s.split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
    }

    fn round() -> Round {
        Round::new(
            vec![
                Player::new(PlayerId::new(1), cards("6C 9D 7H 8S")),
                Player::new(PlayerId::new(2), cards("AH KH QH JH")),
            ],
            cards("TH 2C 3D 4S 5C"),
        )
        .unwrap()
    }

    #[test]
    fn round_as_text() {
        let round = round();
        let results = rank_players(round.players(), round.community()).unwrap();

        let mut out = Vec::new();
        round_text(&mut out, &round, &results).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Player 1   6C 9D 7H 8S");
        assert_eq!(lines[2], "Board      TH 2C 3D 4S 5C");
        assert_eq!(lines[4], " 1. Player 2   Royal Flush      AH KH QH JH TH");
        assert_eq!(lines[5], " 2. Player 1   Straight         TH 9D 8S 7H 6C");
    }

    #[test]
    fn round_as_json() {
        let round = round();
        let results = round.rank_players().unwrap();

        let mut out = Vec::new();
        round_json(&mut out, &round, &results).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ranking = value["ranking"].as_array().unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0]["rank"], 1);
        assert_eq!(ranking[0]["player_id"], 2);
        assert_eq!(ranking[0]["category"], "RoyalFlush");
        assert_eq!(ranking[1]["name"], "Straight");
        assert_eq!(value["round"]["players"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn hand_as_text() {
        let hand = EvaluatedHand::eval(&cards::<7>("AS 5D 3C 4H 2S KD QC")).unwrap();

        let mut out = Vec::new();
        hand_text(&mut out, &hand).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Straight 5D 4H 3C 2S AS\n");
    }
}
