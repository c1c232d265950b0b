//! Application configuration from environment variables.
//!
//! - `FRACTURE_SEED`: decimal seed of the first level (default 12345)
//! - `FRACTURE_LOG_PATH`: if set, tracing output is appended to this file
//! - generator overrides, see [`GeneratorConfig::from_lookup`]

use std::env;
use std::path::PathBuf;

use crate::core::{ConfigError, GeneratorConfig};

pub const ENV_SEED: &str = "FRACTURE_SEED";
pub const ENV_LOG_PATH: &str = "FRACTURE_LOG_PATH";

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = lookup(ENV_SEED).map_or(DEFAULT_SEED, |raw| parse_seed(&raw));
        let log_path = lookup(ENV_LOG_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let generator = GeneratorConfig::from_lookup(&lookup)?;
        Ok(Self {
            seed,
            log_path,
            generator,
        })
    }
}

/// Lenient seed parsing: a leading signed decimal integer, truncated to 32 bits.
///
/// Anything without leading digits, or a zero, becomes 1.
pub fn parse_seed(raw: &str) -> u32 {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let value = digits
        .chars()
        .take_while(char::is_ascii_digit)
        .fold(None, |acc: Option<i64>, ch| {
            let digit = i64::from(ch.to_digit(10).unwrap_or(0));
            Some(acc.unwrap_or(0).wrapping_mul(10).wrapping_add(digit))
        });

    match value {
        None | Some(0) => 1,
        Some(v) => {
            let v = if negative { -v } else { v };
            v as i32 as u32
        }
    }
}
