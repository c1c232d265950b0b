//! Grid module - square tile storage
//!
//! The grid is a `size x size` square where each cell holds a [`Tile`].
//! Uses a flat row-major vector (`y * size + x`).
//! Coordinates are signed so out-of-range lookups return `None` instead of wrapping.

use arrayvec::ArrayVec;

use crate::types::{Pos, Tile};

/// Square grid of tiles using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an all-stable grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Tile::Stable; size * size],
        }
    }

    /// Build a grid from explicit rows (top to bottom).
    ///
    /// Returns `None` if the rows do not form a square.
    pub fn from_rows(rows: &[&[Tile]]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, pos: Pos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((pos.y as usize) * self.size + (pos.x as usize))
    }

    /// Coordinates of a flat index
    pub fn pos_of(&self, index: usize) -> Pos {
        Pos::new((index % self.size) as i32, (index / self.size) as i32)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        let size = self.size as i32;
        pos.x >= 0 && pos.y >= 0 && pos.x < size && pos.y < size
    }

    /// Get tile at position; `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set tile at position; returns false if out of bounds
    pub fn set(&mut self, pos: Pos, tile: Tile) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn tile(&self, index: usize) -> Tile {
        self.cells[index]
    }

    pub(crate) fn set_tile(&mut self, index: usize, tile: Tile) {
        self.cells[index] = tile;
    }

    pub fn is_locked(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Tile::Locked))
    }

    /// In-bounds orthogonal neighbours with their flat indices, in `+x, -x, +y, -y` order
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<(Pos, usize), 4> {
        pos.orthogonal()
            .into_iter()
            .filter_map(|n| self.index(n).map(|i| (n, i)))
            .collect()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    pub fn locked_count(&self) -> usize {
        self.count(Tile::Locked)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }
}
