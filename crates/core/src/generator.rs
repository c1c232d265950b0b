//! Generator module - seeded level construction
//!
//! A level is built in one pass from a seed (goals, pre-locked cells, cursor,
//! start sanity fix), then scored by a difficulty heuristic. Levels outside the
//! configured band are thrown away and rebuilt from `seed + 1`, up to
//! `max_retries` times; after that the last candidate is kept as is.

use tracing::{debug, warn};

use crate::config::{DifficultyWeights, GeneratorConfig};
use crate::game_state::GameState;
use crate::rng::{draw_inclusive, pick_unique, SimpleRng};
use crate::snapshot::Snapshot;
use crate::types::{Pos, Tile};

/// Difficulty score split into its terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyBreakdown {
    pub goal_count: u32,
    pub locked_count: u32,
    /// Spread penalty (zero or negative)
    pub goal_distance: i32,
    pub total: i32,
}

/// Diagnostics recorded by the last generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Seed the caller asked for
    pub requested_seed: u32,
    /// Seed of the level that was kept
    pub seed: u32,
    /// Failed difficulty checks before the level was kept
    pub retries_used: u32,
    /// Whether the retry budget ran out and the last candidate was kept regardless
    pub fallback_accepted: bool,
    pub breakdown: DifficultyBreakdown,
}

/// Generate a level for `seed`, retrying with successive seeds until the
/// difficulty lands in the configured band or the retry budget is spent.
pub fn generate(seed: u32, config: &GeneratorConfig) -> GameState {
    let mut attempt_seed = seed;
    let mut retries = 0;

    loop {
        let level = build_level(attempt_seed, config);
        let breakdown = difficulty(&level, &config.weights);

        let accepted = config.accepts(breakdown.total);
        let exhausted = retries >= config.max_retries;
        if accepted || exhausted {
            if accepted {
                debug!(seed = attempt_seed, retries, total = breakdown.total, "level accepted");
            } else {
                warn!(
                    requested_seed = seed,
                    seed = attempt_seed,
                    retries,
                    total = breakdown.total,
                    "retry budget exhausted, keeping last level"
                );
            }

            let mut state = GameState::from_snapshot(level);
            state.generation = GenerationReport {
                requested_seed: seed,
                seed: attempt_seed,
                retries_used: retries,
                fallback_accepted: !accepted,
                breakdown,
            };
            return state;
        }

        debug!(
            seed = attempt_seed,
            total = breakdown.total,
            min = config.difficulty_min,
            max = config.difficulty_max,
            "difficulty out of band, retrying"
        );
        retries += 1;
        attempt_seed = attempt_seed.wrapping_add(1);
    }
}

/// Build one candidate level without any difficulty check.
pub fn build_level(seed: u32, config: &GeneratorConfig) -> Snapshot {
    let mut rng = SimpleRng::new(seed);
    let size = config.size;
    let cells = size * size;
    let mut level = Snapshot::blank(size, seed);

    let goal_count = draw_inclusive(&mut rng, config.goal_count_min, config.goal_count_max);
    for i in pick_unique(&mut rng, goal_count as usize, cells) {
        level.goals[i] = true;
    }

    let lock_count = rng.below(config.max_locks + 1);
    for i in pick_unique(&mut rng, lock_count as usize, cells) {
        // Goals are never pre-locked.
        if level.goals[i] {
            continue;
        }
        level.grid.set_tile(i, Tile::Locked);
    }

    let mut cursor = Pos::default();
    for _ in 0..config.cursor_attempts {
        cursor = Pos::new(rng.below(size as u32) as i32, rng.below(size as u32) as i32);
        if !level.grid.is_locked(cursor) {
            break;
        }
    }
    level.cursor = cursor;

    if !has_any_start_action(&level) {
        for (_, i) in level.grid.neighbors(cursor) {
            level.grid.set_tile(i, Tile::Stable);
            if has_any_start_action(&level) {
                break;
            }
        }
    }

    level
}

/// Whether the player has at least one legal action from the cursor:
/// an activation in place, or a step onto some unlocked neighbour.
pub fn has_any_start_action(level: &Snapshot) -> bool {
    if level.is_goal(level.cursor) && !level.is_activated(level.cursor) {
        return true;
    }
    level
        .grid
        .neighbors(level.cursor)
        .iter()
        .any(|&(_, i)| !level.grid.tile(i).is_locked())
}

/// Score a level: more goals and locks raise it, spread-out goals lower it.
pub fn difficulty(level: &Snapshot, weights: &DifficultyWeights) -> DifficultyBreakdown {
    let goals: Vec<Pos> = level.goal_positions().collect();
    let spread: u32 = goals
        .iter()
        .enumerate()
        .flat_map(|(i, a)| goals[i + 1..].iter().map(move |b| a.manhattan(*b)))
        .sum();

    let goal_count = goals.len() as u32;
    let locked_count = level.grid.locked_count() as u32;
    let goal_distance = -weights.spread * spread as i32;
    let total =
        goal_count as i32 * weights.goal + locked_count as i32 * weights.lock + goal_distance;

    DifficultyBreakdown {
        goal_count,
        locked_count,
        goal_distance,
        total,
    }
}

impl GameState {
    /// See [`has_any_start_action`].
    pub fn has_any_start_action(&self) -> bool {
        has_any_start_action(self.snapshot())
    }
}
