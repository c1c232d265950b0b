//! Scoring module - final score and letter rank
//!
//! Score starts at 1000 and loses 10 per move and 25 per locked cell on the
//! grid at query time, floored at zero. The value is defined at any point but
//! only final once every goal is activated; see [`final_result`].

use crate::game_state::GameState;
use crate::types::{Rank, RANK_THRESHOLDS, SCORE_BASE, SCORE_LOCK_PENALTY, SCORE_MOVE_PENALTY};

/// Score and rank of a won level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    pub score: u32,
    pub rank: Rank,
}

/// Calculate the score from a move count and a locked cell count
pub fn calculate_score(moves: u32, locked_cells: usize) -> u32 {
    let raw = SCORE_BASE
        - i64::from(moves) * SCORE_MOVE_PENALTY
        - locked_cells as i64 * SCORE_LOCK_PENALTY;
    raw.max(0) as u32
}

/// Score for the state as it stands (locked cells counted now, not cached)
pub fn compute_score(state: &GameState) -> u32 {
    calculate_score(state.moves(), state.grid().locked_count())
}

/// Letter rank for a score. Total over all scores.
pub fn compute_rank(score: u32) -> Rank {
    RANK_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(Rank::C, |&(_, rank)| rank)
}

/// Score and rank, only once the level is won.
pub fn final_result(state: &GameState) -> Option<ScoreResult> {
    if !state.all_goals_activated() {
        return None;
    }
    let score = compute_score(state);
    Some(ScoreResult {
        score,
        rank: compute_rank(score),
    })
}
