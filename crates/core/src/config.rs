//! Generator configuration
//!
//! Defaults come from [`crate::types`]. Any field can be overridden through the
//! environment:
//!
//! - `FRACTURE_GRID_SIZE`: grid edge length (default 5, at most 64)
//! - `FRACTURE_DIFFICULTY_MIN` / `FRACTURE_DIFFICULTY_MAX`: accepted band (default 20..=120)
//! - `FRACTURE_MAX_RETRIES`: failed checks before fail-safe acceptance (default 50)

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{
    CURSOR_PLACEMENT_ATTEMPTS, DIFFICULTY_GOAL_WEIGHT, DIFFICULTY_LOCK_WEIGHT, DIFFICULTY_MAX,
    DIFFICULTY_MIN, DIFFICULTY_SPREAD_WEIGHT, GOAL_COUNT_MAX, GOAL_COUNT_MIN, GRID_SIZE,
    GRID_SIZE_MAX, LOCK_COUNT_MAX, MAX_GENERATION_RETRIES,
};

pub const ENV_GRID_SIZE: &str = "FRACTURE_GRID_SIZE";
pub const ENV_DIFFICULTY_MIN: &str = "FRACTURE_DIFFICULTY_MIN";
pub const ENV_DIFFICULTY_MAX: &str = "FRACTURE_DIFFICULTY_MAX";
pub const ENV_MAX_RETRIES: &str = "FRACTURE_MAX_RETRIES";

/// Errors raised while building a [`GeneratorConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment override could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// The grid cannot hold the requested number of goals or locks.
    #[error("grid of {cells} cells is too small for {requested} distinct picks")]
    GridTooSmall { cells: usize, requested: u32 },

    /// Grid edge length above [`GRID_SIZE_MAX`].
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    /// Goal count range is inverted.
    #[error("goal count range {min}..={max} is empty")]
    EmptyGoalRange { min: u32, max: u32 },

    /// Difficulty band is inverted.
    #[error("difficulty band {min}..={max} is empty")]
    EmptyBand { min: i32, max: i32 },
}

/// Difficulty heuristic weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyWeights {
    /// Points per goal
    pub goal: i32,
    /// Points per locked cell
    pub lock: i32,
    /// Penalty per unit of summed pairwise goal distance
    pub spread: i32,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            goal: DIFFICULTY_GOAL_WEIGHT,
            lock: DIFFICULTY_LOCK_WEIGHT,
            spread: DIFFICULTY_SPREAD_WEIGHT,
        }
    }
}

/// Tuning knobs for level generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub size: usize,
    pub goal_count_min: u32,
    pub goal_count_max: u32,
    /// Lock count is drawn from `0..=max_locks`
    pub max_locks: u32,
    pub cursor_attempts: u32,
    pub difficulty_min: i32,
    pub difficulty_max: i32,
    pub max_retries: u32,
    pub weights: DifficultyWeights,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            goal_count_min: GOAL_COUNT_MIN,
            goal_count_max: GOAL_COUNT_MAX,
            max_locks: LOCK_COUNT_MAX,
            cursor_attempts: CURSOR_PLACEMENT_ATTEMPTS,
            difficulty_min: DIFFICULTY_MIN,
            difficulty_max: DIFFICULTY_MAX,
            max_retries: MAX_GENERATION_RETRIES,
            weights: DifficultyWeights::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults with overrides from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(size) = parse_var(&lookup, ENV_GRID_SIZE)? {
            config.size = size;
        }
        if let Some(min) = parse_var(&lookup, ENV_DIFFICULTY_MIN)? {
            config.difficulty_min = min;
        }
        if let Some(max) = parse_var(&lookup, ENV_DIFFICULTY_MAX)? {
            config.difficulty_max = max;
        }
        if let Some(retries) = parse_var(&lookup, ENV_MAX_RETRIES)? {
            config.max_retries = retries;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configs the generator cannot honour.
    ///
    /// Distinct picks must stay strictly below the cell count, or sampling would
    /// never finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size > GRID_SIZE_MAX {
            return Err(ConfigError::GridTooLarge {
                size: self.size,
                max: GRID_SIZE_MAX,
            });
        }
        if self.goal_count_min > self.goal_count_max {
            return Err(ConfigError::EmptyGoalRange {
                min: self.goal_count_min,
                max: self.goal_count_max,
            });
        }
        if self.difficulty_min > self.difficulty_max {
            return Err(ConfigError::EmptyBand {
                min: self.difficulty_min,
                max: self.difficulty_max,
            });
        }
        let cells = self.size * self.size;
        let requested = self.goal_count_max.max(self.max_locks);
        if requested as usize >= cells {
            return Err(ConfigError::GridTooSmall { cells, requested });
        }
        Ok(())
    }

    /// Whether a difficulty total lies in the accepted band.
    pub fn accepts(&self, difficulty: i32) -> bool {
        (self.difficulty_min..=self.difficulty_max).contains(&difficulty)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
