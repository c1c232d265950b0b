//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! by the core rules, the input layer and the terminal renderer alike.
//!
//! # Grid
//!
//! The playfield is a square grid (5x5 by default) stored row-major, so cell
//! `(x, y)` lives at index `y * size + x`.
//!
//! # Tile Progression
//!
//! | Tile | Under activation | Under stabilize |
//! |------|------------------|-----------------|
//! | `Stable` | `Cracked` | - |
//! | `Cracked` | `Fractured` | `Stable` |
//! | `Fractured` | `Locked` | `Cracked` |
//! | `Locked` | `Locked` | - |
//!
//! # Generator Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GOAL_COUNT_MIN..=GOAL_COUNT_MAX` | 3..=5 | Goals per level |
//! | `LOCK_COUNT_MAX` | 4 | Upper bound of pre-locked cells |
//! | `CURSOR_PLACEMENT_ATTEMPTS` | 200 | Samples before keeping a locked start |
//! | `DIFFICULTY_MIN..=DIFFICULTY_MAX` | 20..=120 | Accepted difficulty band |
//! | `MAX_GENERATION_RETRIES` | 50 | Retries before fail-safe acceptance |
//!
//! # Examples
//!
//! ```
//! use fracture_grid_types::{Mode, Tile, GRID_SIZE};
//!
//! assert!(Tile::Stable < Tile::Locked);
//! assert_eq!(Tile::Cracked.pressured(), Tile::Fractured);
//! assert_eq!(Tile::Cracked.repaired(), Some(Tile::Stable));
//!
//! assert_eq!(Mode::default(), Mode::Normal);
//! assert_eq!(GRID_SIZE, 5);
//! ```

/// Default grid edge length (5x5 board).
pub const GRID_SIZE: usize = 5;

/// Largest grid edge length a config may request.
pub const GRID_SIZE_MAX: usize = 64;

/// Fewest goals a generated level carries.
pub const GOAL_COUNT_MIN: u32 = 3;

/// Most goals a generated level carries.
pub const GOAL_COUNT_MAX: u32 = 5;

/// Upper bound (inclusive) of cells the generator tries to lock.
pub const LOCK_COUNT_MAX: u32 = 4;

/// Cursor samples drawn before settling on the last one.
pub const CURSOR_PLACEMENT_ATTEMPTS: u32 = 200;

/// Lower edge of the accepted difficulty band (inclusive).
pub const DIFFICULTY_MIN: i32 = 20;

/// Upper edge of the accepted difficulty band (inclusive).
pub const DIFFICULTY_MAX: i32 = 120;

/// Failed difficulty checks tolerated before fail-safe acceptance.
pub const MAX_GENERATION_RETRIES: u32 = 50;

/// Difficulty points per goal.
pub const DIFFICULTY_GOAL_WEIGHT: i32 = 10;

/// Difficulty points per locked cell.
pub const DIFFICULTY_LOCK_WEIGHT: i32 = 15;

/// Difficulty penalty per unit of pairwise goal distance.
pub const DIFFICULTY_SPREAD_WEIGHT: i32 = 2;

/// Score before penalties.
pub const SCORE_BASE: i64 = 1000;

/// Score penalty per move.
pub const SCORE_MOVE_PENALTY: i64 = 10;

/// Score penalty per locked cell on the final grid.
pub const SCORE_LOCK_PENALTY: i64 = 25;

/// Rank thresholds, highest first.
pub const RANK_THRESHOLDS: [(u32, Rank); 3] = [(850, Rank::S), (700, Rank::A), (550, Rank::B)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_defaults() {
        assert_eq!(GOAL_COUNT_MIN, 3);
        assert_eq!(GOAL_COUNT_MAX, 5);
        assert_eq!(LOCK_COUNT_MAX, 4);
        assert_eq!(CURSOR_PLACEMENT_ATTEMPTS, 200);
        assert_eq!((DIFFICULTY_MIN, DIFFICULTY_MAX), (20, 120));
        assert_eq!(MAX_GENERATION_RETRIES, 50);
    }

    #[test]
    fn tile_order_follows_progression() {
        assert!(Tile::Stable < Tile::Cracked);
        assert!(Tile::Cracked < Tile::Fractured);
        assert!(Tile::Fractured < Tile::Locked);
    }

    #[test]
    fn pressure_never_moves_backwards() {
        for tile in Tile::ALL {
            assert!(tile.pressured() >= tile);
        }
        assert_eq!(Tile::Locked.pressured(), Tile::Locked);
    }

    #[test]
    fn repair_only_applies_to_damaged_tiles() {
        assert_eq!(Tile::Stable.repaired(), None);
        assert_eq!(Tile::Cracked.repaired(), Some(Tile::Stable));
        assert_eq!(Tile::Fractured.repaired(), Some(Tile::Cracked));
        assert_eq!(Tile::Locked.repaired(), None);
    }

    #[test]
    fn pos_manhattan() {
        let a = Pos::new(1, 2);
        assert_eq!(a.manhattan(Pos::new(1, 2)), 0);
        assert_eq!(a.manhattan(Pos::new(2, 2)), 1);
        assert_eq!(a.manhattan(Pos::new(-1, 5)), 5);
        assert_eq!(a.offset(1, -1), Pos::new(2, 1));
    }

    #[test]
    fn command_names_are_distinct() {
        let p = Pos::new(0, 0);
        let names = [
            Command::Move(p),
            Command::Activate,
            Command::Stabilize,
            Command::Cancel,
            Command::Pick(p),
            Command::Click(p),
            Command::Undo,
            Command::Reset,
            Command::NewGame(1),
        ]
        .map(|c| c.as_str());
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate {}", name);
        }
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Normal.as_str(), "normal");
        assert_eq!(Mode::StabilizePick.as_str(), "stabilize");
    }
}

/// A single grid cell's damage state.
///
/// Variants are declared in progression order, so `Ord` matches
/// `Stable < Cracked < Fractured < Locked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tile {
    #[default]
    Stable,
    Cracked,
    Fractured,
    Locked,
}

impl Tile {
    pub const ALL: [Tile; 4] = [Tile::Stable, Tile::Cracked, Tile::Fractured, Tile::Locked];

    /// Next state when a neighbouring goal is activated.
    ///
    /// `Locked` is absorbing.
    pub fn pressured(self) -> Self {
        match self {
            Tile::Stable => Tile::Cracked,
            Tile::Cracked => Tile::Fractured,
            Tile::Fractured | Tile::Locked => Tile::Locked,
        }
    }

    /// State after one stabilize step, or `None` if the tile cannot be repaired.
    pub fn repaired(self) -> Option<Self> {
        match self {
            Tile::Fractured => Some(Tile::Cracked),
            Tile::Cracked => Some(Tile::Stable),
            Tile::Stable | Tile::Locked => None,
        }
    }

    pub fn is_locked(self) -> bool {
        self == Tile::Locked
    }
}

/// Interaction mode.
///
/// In `StabilizePick` the next cell selection repairs a tile instead of moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Mode {
    #[default]
    Normal,
    StabilizePick,
}

impl Mode {
    /// Short label shown in the status panel.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::StabilizePick => "stabilize",
        }
    }
}

/// Grid coordinate.
///
/// Signed so callers can hand in out-of-range targets; the core bounds-checks
/// every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours in the fixed order `+x, -x, +y, -y`.
    ///
    /// Bounds are not checked here.
    pub fn orthogonal(self) -> [Pos; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }
}

/// Letter rank derived from a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    S,
    A,
    B,
    C,
}

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        }
    }
}

/// Player commands accepted by a session.
///
/// These are produced by the input layer and map one-to-one onto core
/// operations (plus the new game / reset lifecycle actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor to an adjacent cell
    Move(Pos),
    /// Activate the goal under the cursor
    Activate,
    /// Switch to stabilize pick mode
    Stabilize,
    /// Leave stabilize pick mode without repairing
    Cancel,
    /// Repair the given cell (pick mode only)
    Pick(Pos),
    /// Pointer-style selection: pick, activate or move depending on mode and target
    Click(Pos),
    /// Revert the last successful action
    Undo,
    /// Regenerate the current level from its seed
    Reset,
    /// Generate a level from a new seed
    NewGame(u32),
}

impl Command {
    /// Name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::Activate => "activate",
            Command::Stabilize => "stabilize",
            Command::Cancel => "cancel",
            Command::Pick(_) => "pick",
            Command::Click(_) => "click",
            Command::Undo => "undo",
            Command::Reset => "reset",
            Command::NewGame(_) => "newGame",
        }
    }
}
