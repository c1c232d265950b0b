use crate::grid::Grid;
use crate::types::{Mode, Pos};

/// Value copy of everything in a [`GameState`](crate::GameState) except its history.
///
/// This is both the unit of undo and the read-only view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub(crate) seed: u32,
    pub(crate) grid: Grid,
    pub(crate) goals: Vec<bool>,
    pub(crate) activated: Vec<bool>,
    pub(crate) cursor: Pos,
    pub(crate) moves: u32,
    pub(crate) mode: Mode,
}

impl Snapshot {
    pub(crate) fn blank(size: usize, seed: u32) -> Self {
        let cells = size * size;
        Self {
            seed,
            grid: Grid::new(size),
            goals: vec![false; cells],
            activated: vec![false; cells],
            cursor: Pos::default(),
            moves: 0,
            mode: Mode::Normal,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn goals(&self) -> &[bool] {
        &self.goals
    }

    pub fn activated(&self) -> &[bool] {
        &self.activated
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn goal_count(&self) -> usize {
        self.goals.iter().filter(|&&g| g).count()
    }

    pub fn activated_count(&self) -> usize {
        self.activated.iter().filter(|&&a| a).count()
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.index(pos).is_some_and(|i| self.goals[i])
    }

    pub fn is_activated(&self, pos: Pos) -> bool {
        self.grid.index(pos).is_some_and(|i| self.activated[i])
    }

    /// Goal coordinates in index order
    pub fn goal_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.goals
            .iter()
            .enumerate()
            .filter(|&(_, &g)| g)
            .map(|(i, _)| self.grid.pos_of(i))
    }
}
