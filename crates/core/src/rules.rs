//! Rules module - player actions on a [`GameState`]
//!
//! Every action either succeeds (records an undo snapshot of the state it
//! replaced, then mutates) or fails and leaves the state untouched. The
//! returned `bool` tells callers whether anything changed.
//!
//! Stabilize picks are only reachable through a [`StabilizePicker`], which can
//! only be obtained while the state is in [`Mode::StabilizePick`].

use crate::game_state::GameState;
use crate::types::{Mode, Pos};

impl GameState {
    /// Whether the cursor may move to `target`: in bounds, not locked, one orthogonal step away.
    pub fn can_move_to(&self, target: Pos) -> bool {
        match self.grid().get(target) {
            Some(tile) => !tile.is_locked() && self.cursor().manhattan(target) == 1,
            None => false,
        }
    }

    /// Move the cursor one orthogonal step.
    pub fn move_cursor(&mut self, target: Pos) -> bool {
        if !self.can_move_to(target) {
            return false;
        }
        self.push_history();
        self.current.cursor = target;
        self.current.moves += 1;
        true
    }

    /// Whether the cursor sits on a goal that has not been activated yet.
    pub fn is_goal_here(&self) -> bool {
        self.grid()
            .index(self.cursor())
            .is_some_and(|i| self.goals()[i] && !self.activated()[i])
    }

    /// Activate the goal under the cursor and push damage onto its neighbours.
    pub fn activate(&mut self) -> bool {
        if !self.is_goal_here() {
            return false;
        }
        let cursor = self.cursor();
        let Some(center) = self.grid().index(cursor) else {
            return false;
        };
        self.push_history();

        let snap = &mut self.current;
        snap.activated[center] = true;
        for (_, i) in snap.grid.neighbors(cursor) {
            let next = snap.grid.tile(i).pressured();
            snap.grid.set_tile(i, next);
        }
        snap.moves += 1;
        true
    }

    /// Switch to stabilize pick mode. Idempotent.
    pub fn enter_stabilize_mode(&mut self) {
        self.current.mode = Mode::StabilizePick;
    }

    /// Leave pick mode without repairing anything.
    ///
    /// Does not count as a move and is not recorded in history. Returns false if
    /// the state was not in pick mode.
    pub fn cancel_stabilize_mode(&mut self) -> bool {
        if self.mode() != Mode::StabilizePick {
            return false;
        }
        self.current.mode = Mode::Normal;
        true
    }

    /// Borrow a picker if the state is in pick mode.
    pub fn stabilizer(&mut self) -> Option<StabilizePicker<'_>> {
        match self.mode() {
            Mode::StabilizePick => Some(StabilizePicker { state: self }),
            Mode::Normal => None,
        }
    }

    /// Repair `target` if in pick mode; false otherwise.
    pub fn stabilize_pick(&mut self, target: Pos) -> bool {
        self.stabilizer().is_some_and(|mut picker| picker.pick(target))
    }

    /// Win condition: every goal has been activated.
    pub fn all_goals_activated(&self) -> bool {
        self.goals()
            .iter()
            .zip(self.activated())
            .all(|(&goal, &done)| !goal || done)
    }
}

/// Exclusive handle for repairing one tile while in [`Mode::StabilizePick`].
#[derive(Debug)]
pub struct StabilizePicker<'a> {
    state: &'a mut GameState,
}

impl StabilizePicker<'_> {
    /// Repair one step of damage on `target`.
    ///
    /// Succeeds only on cracked or fractured tiles; on success the state returns
    /// to [`Mode::Normal`]. On failure nothing changes and pick mode stays on.
    pub fn pick(&mut self, target: Pos) -> bool {
        let Some(index) = self.state.grid().index(target) else {
            return false;
        };
        let Some(repaired) = self.state.grid().tile(index).repaired() else {
            return false;
        };

        self.state.push_history();
        let snap = &mut self.state.current;
        snap.grid.set_tile(index, repaired);
        snap.moves += 1;
        snap.mode = Mode::Normal;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::types::Tile;

    fn center_goal() -> GameState {
        GameState::from_layout(Grid::new(5), &[Pos::new(2, 2)], Pos::new(2, 2)).unwrap()
    }

    #[test]
    fn test_move_to_adjacent() {
        let mut state = center_goal();
        assert!(state.move_cursor(Pos::new(3, 2)));
        assert_eq!(state.cursor(), Pos::new(3, 2));
        assert_eq!(state.moves(), 1);
        assert_eq!(state.history_len(), 1);
    }

    #[test]
    fn test_move_rejects_diagonal_far_and_same() {
        let mut state = center_goal();
        let before = state.clone();

        assert!(!state.move_cursor(Pos::new(3, 3)));
        assert!(!state.move_cursor(Pos::new(4, 2)));
        assert!(!state.move_cursor(Pos::new(2, 2)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_rejects_locked_and_out_of_bounds() {
        let mut grid = Grid::new(5);
        grid.set(Pos::new(1, 0), Tile::Locked);
        let mut state = GameState::from_layout(grid, &[], Pos::new(0, 0)).unwrap();
        let before = state.clone();

        assert!(!state.move_cursor(Pos::new(1, 0)));
        assert!(!state.move_cursor(Pos::new(-1, 0)));
        assert!(!state.move_cursor(Pos::new(0, -1)));
        assert_eq!(state, before);

        assert!(state.move_cursor(Pos::new(0, 1)));
    }

    #[test]
    fn test_activate_center_cracks_neighbors() {
        let mut state = center_goal();
        assert!(state.activate());

        assert!(state.activated()[12]);
        for pos in [Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1), Pos::new(2, 3)] {
            assert_eq!(state.grid().get(pos), Some(Tile::Cracked), "{pos:?}");
        }
        assert_eq!(state.grid().count(Tile::Stable), 21);
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn test_activate_twice_fails() {
        let mut state = center_goal();
        assert!(state.activate());
        assert!(!state.is_goal_here());

        let before = state.clone();
        assert!(!state.activate());
        assert_eq!(state, before);
    }

    #[test]
    fn test_activate_off_goal_fails() {
        let mut state = GameState::from_layout(Grid::new(5), &[Pos::new(2, 2)], Pos::new(0, 0))
            .unwrap();
        assert!(!state.activate());
        assert_eq!(state.moves(), 0);
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn test_activation_locks_fractured_and_leaves_locked() {
        // Two goals either side of (1, 0), which starts fractured.
        let mut grid = Grid::new(5);
        grid.set(Pos::new(1, 0), Tile::Fractured);
        let mut state =
            GameState::from_layout(grid, &[Pos::new(0, 0), Pos::new(2, 0)], Pos::new(0, 0))
                .unwrap();

        assert!(state.activate());
        assert_eq!(state.grid().get(Pos::new(1, 0)), Some(Tile::Locked));

        // Walk around the locked tile to the second goal.
        for step in [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1), Pos::new(2, 0)] {
            assert!(state.move_cursor(step), "{step:?}");
        }
        assert!(state.activate());
        assert_eq!(state.grid().get(Pos::new(1, 0)), Some(Tile::Locked));
        assert!(state.all_goals_activated());
    }

    #[test]
    fn test_enter_stabilize_is_idempotent() {
        let mut state = center_goal();
        state.enter_stabilize_mode();
        state.enter_stabilize_mode();
        assert_eq!(state.mode(), Mode::StabilizePick);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn test_stabilize_repairs_one_step() {
        let mut grid = Grid::new(5);
        grid.set(Pos::new(4, 4), Tile::Fractured);
        let mut state = GameState::from_layout(grid, &[], Pos::new(0, 0)).unwrap();

        state.enter_stabilize_mode();
        assert!(state.stabilize_pick(Pos::new(4, 4)));
        assert_eq!(state.grid().get(Pos::new(4, 4)), Some(Tile::Cracked));
        assert_eq!(state.mode(), Mode::Normal);
        assert_eq!(state.moves(), 1);

        state.enter_stabilize_mode();
        assert!(state.stabilize_pick(Pos::new(4, 4)));
        assert_eq!(state.grid().get(Pos::new(4, 4)), Some(Tile::Stable));
        assert_eq!(state.moves(), 2);
    }

    #[test]
    fn test_stabilize_failure_keeps_pick_mode() {
        let mut grid = Grid::new(5);
        grid.set(Pos::new(1, 1), Tile::Locked);
        let mut state = GameState::from_layout(grid, &[], Pos::new(0, 0)).unwrap();
        state.enter_stabilize_mode();
        let before = state.clone();

        assert!(!state.stabilize_pick(Pos::new(1, 1)));
        assert!(!state.stabilize_pick(Pos::new(0, 0)));
        assert!(!state.stabilize_pick(Pos::new(9, 9)));
        assert_eq!(state, before);
        assert_eq!(state.mode(), Mode::StabilizePick);
    }

    #[test]
    fn test_stabilize_requires_pick_mode() {
        let mut grid = Grid::new(5);
        grid.set(Pos::new(1, 1), Tile::Cracked);
        let mut state = GameState::from_layout(grid, &[], Pos::new(0, 0)).unwrap();

        assert!(state.stabilizer().is_none());
        assert!(!state.stabilize_pick(Pos::new(1, 1)));
        assert_eq!(state.grid().get(Pos::new(1, 1)), Some(Tile::Cracked));
    }

    #[test]
    fn test_cancel_stabilize() {
        let mut state = center_goal();
        assert!(!state.cancel_stabilize_mode());
        state.enter_stabilize_mode();
        assert!(state.cancel_stabilize_mode());
        assert_eq!(state.mode(), Mode::Normal);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn test_undo_restores_pick_mode_snapshot() {
        let mut grid = Grid::new(5);
        grid.set(Pos::new(0, 1), Tile::Cracked);
        let mut state = GameState::from_layout(grid, &[], Pos::new(0, 0)).unwrap();

        state.enter_stabilize_mode();
        let picking = state.snapshot().clone();
        assert!(state.stabilize_pick(Pos::new(0, 1)));
        assert!(state.undo());
        assert_eq!(state.snapshot(), &picking);
        assert_eq!(state.mode(), Mode::StabilizePick);
    }

    #[test]
    fn test_undo_walks_back_to_start() {
        let mut state = center_goal();
        let start = state.clone();

        assert!(state.activate());
        assert!(state.move_cursor(Pos::new(2, 3)));
        state.enter_stabilize_mode();
        assert!(state.stabilize_pick(Pos::new(2, 3)));
        assert_eq!(state.moves(), 3);

        assert!(state.undo());
        assert!(state.undo());
        assert!(state.undo());
        assert!(!state.undo());
        assert_eq!(state, start);
    }

    #[test]
    fn test_all_goals_activated() {
        let mut state = GameState::new(5);
        assert!(state.all_goals_activated());

        state = center_goal();
        assert!(!state.all_goals_activated());
        assert!(state.activate());
        assert!(state.all_goals_activated());
    }
}
