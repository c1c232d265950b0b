//! Game state module - the puzzle data model
//!
//! A [`GameState`] is the current [`Snapshot`] plus a linear undo stack of
//! earlier snapshots. Rules live in [`crate::rules`]; level construction in
//! [`crate::generator`].

use crate::config::GeneratorConfig;
use crate::generator::{self, GenerationReport};
use crate::grid::Grid;
use crate::snapshot::Snapshot;
use crate::types::{Mode, Pos, Tile, GRID_SIZE};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) current: Snapshot,
    /// Earlier snapshots, most recent last. Entries never carry history of their own.
    pub(crate) history: Vec<Snapshot>,
    pub(crate) generation: GenerationReport,
}

impl GameState {
    /// Create an empty all-stable board with no goals and the cursor at (0, 0)
    pub fn new(size: usize) -> Self {
        Self::from_snapshot(Snapshot::blank(size, 1))
    }

    /// Build a hand-made level.
    ///
    /// Returns `None` if the cursor or any goal is out of bounds, or a goal sits
    /// on a locked tile.
    pub fn from_layout(grid: Grid, goals: &[Pos], cursor: Pos) -> Option<Self> {
        let mut snap = Snapshot::blank(grid.size(), 1);
        if !grid.in_bounds(cursor) {
            return None;
        }
        for &goal in goals {
            let index = grid.index(goal)?;
            if grid.tile(index) == Tile::Locked {
                return None;
            }
            snap.goals[index] = true;
        }
        snap.grid = grid;
        snap.cursor = cursor;
        Some(Self::from_snapshot(snap))
    }

    pub(crate) fn from_snapshot(current: Snapshot) -> Self {
        Self {
            current,
            history: Vec::new(),
            generation: GenerationReport::default(),
        }
    }

    /// Replace this state with a freshly generated level and return the seed actually used.
    pub fn regenerate(&mut self, seed: u32, config: &GeneratorConfig) -> u32 {
        *self = generator::generate(seed, config);
        self.generation.seed
    }

    pub fn size(&self) -> usize {
        self.current.size()
    }

    pub fn seed(&self) -> u32 {
        self.current.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.current.grid
    }

    pub fn goals(&self) -> &[bool] {
        &self.current.goals
    }

    pub fn activated(&self) -> &[bool] {
        &self.current.activated
    }

    pub fn cursor(&self) -> Pos {
        self.current.cursor
    }

    pub fn moves(&self) -> u32 {
        self.current.moves
    }

    pub fn mode(&self) -> Mode {
        self.current.mode
    }

    pub fn generation(&self) -> &GenerationReport {
        &self.generation
    }

    /// Read-only view of the current (history-free) state
    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record the state as it is right before a mutation.
    pub(crate) fn push_history(&mut self) {
        self.history.push(self.current.clone());
    }

    /// Restore the most recent snapshot.
    ///
    /// Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}
