// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel players ranking.
use std::{panic, thread};

use super::{
    COMMUNITY_CARDS, PlayerHandResult, check_dealt_cards, evaluate_player, log_results,
    sort_results,
};
use crate::{Card, EvalError, Player};

/// Ranks players evaluating their hands from `num_tasks` parallel tasks.
///
/// Returns the same result as [rank_players](super::rank_players).
pub fn par_rank_players(
    players: &[Player],
    community: &[Card; COMMUNITY_CARDS],
    num_tasks: usize,
) -> Result<Vec<PlayerHandResult>, EvalError> {
    check_dealt_cards(players, community)?;

    let num_tasks = num_tasks.max(1);
    let players_per_task = players.len().div_ceil(num_tasks).max(1);

    let partials = thread::scope(|s| {
        let handles = players
            .chunks(players_per_task)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|p| evaluate_player(p, community))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let mut results = Vec::with_capacity(players.len());
    for partial in partials {
        results.extend(partial?);
    }

    sort_results(&mut results);
    log_results(&results);
    Ok(results)
}
