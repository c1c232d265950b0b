//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the puzzle rules, state management and level generation.
//! It has **no dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed always produces the same level
//! - **Testable**: every rule is a plain method returning whether it changed anything
//! - **Portable**: can drive a terminal, a GUI or a headless solver
//!
//! # Module Structure
//!
//! - [`grid`]: square tile grid with bounds-checked indexing
//! - [`game_state`]: the current snapshot plus its undo history
//! - [`snapshot`]: history-free value copy of the game, used for undo and rendering
//! - [`rules`]: move, activate, stabilize and undo
//! - [`generator`]: seeded level construction with a difficulty retry loop
//! - [`rng`]: Mulberry32 and distinct index sampling
//! - [`scoring`]: score and letter rank
//! - [`config`]: generator tuning with environment overrides
//!
//! # Game Rules
//!
//! - **Activation**: activating the goal under the cursor pushes every orthogonal
//!   neighbour one step along `Stable -> Cracked -> Fractured -> Locked`
//! - **Movement**: one orthogonal step at a time, never onto a locked tile
//! - **Stabilize**: in pick mode, repair one step of damage on any cracked or fractured tile
//! - **Undo**: restores the exact previous snapshot, any number of times
//! - **Win**: every goal activated; score is `1000 - 10*moves - 25*locked`
//!
//! # Example
//!
//! ```
//! use fracture_grid_core::{generate, compute_score, GeneratorConfig};
//!
//! let mut game = generate(12345, &GeneratorConfig::default());
//! assert_eq!(game.moves(), 0);
//!
//! // Try every neighbour until one move succeeds.
//! let cursor = game.cursor();
//! let moved = cursor.orthogonal().into_iter().any(|target| game.move_cursor(target));
//! assert!(moved || game.activate());
//!
//! assert_eq!(game.moves(), 1);
//! assert!(game.undo());
//! assert_eq!(compute_score(&game), 1000 - 25 * game.grid().locked_count() as u32);
//! ```

pub mod config;
pub mod game_state;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

pub use fracture_grid_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, DifficultyWeights, GeneratorConfig};
pub use game_state::GameState;
pub use generator::{
    build_level, difficulty, generate, has_any_start_action, DifficultyBreakdown,
    GenerationReport,
};
pub use grid::Grid;
pub use rng::{pick_unique, SimpleRng};
pub use rules::StabilizePicker;
pub use scoring::{calculate_score, compute_rank, compute_score, final_result, ScoreResult};
pub use snapshot::Snapshot;
