//! End-of-session summary, printed as one JSON line so a level can be replayed.

use serde::Serialize;

use crate::core::{compute_score, GenerationReport};
use crate::engine::Session;
use crate::types::Rank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub seed: u32,
    pub moves: u32,
    pub goals_done: usize,
    pub goals_total: usize,
    pub won: bool,
    /// Current score; only final when `won`
    pub score: u32,
    pub rank: Option<Rank>,
    pub generation: GenerationReport,
}

impl From<&Session> for Summary {
    fn from(session: &Session) -> Self {
        let status = session.status();
        Self {
            seed: status.seed,
            moves: status.moves,
            goals_done: status.goals_done,
            goals_total: status.goals_total,
            won: status.result.is_some(),
            score: compute_score(session.state()),
            rank: status.result.map(|r| r.rank),
            generation: *session.state().generation(),
        }
    }
}
