//! Session: owns the single live [`GameState`] and routes player commands to it.
//!
//! New games and resets replace the state wholesale with a freshly generated
//! one; all other commands mutate it through the core rules.

use tracing::{debug, info};

use crate::core::{final_result, generate, GameState, GeneratorConfig, ScoreResult};
use crate::types::{Command, Mode, Pos};

/// Panel-level summary of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub goals_done: usize,
    pub goals_total: usize,
    pub moves: u32,
    pub mode: Mode,
    pub seed: u32,
    /// Present only once every goal is activated
    pub result: Option<ScoreResult>,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    config: GeneratorConfig,
}

impl Session {
    /// Start a session on a level generated from `seed`.
    pub fn new(seed: u32, config: GeneratorConfig) -> Self {
        let state = generate(seed, &config);
        info!(
            requested_seed = seed,
            seed = state.generation().seed,
            "session started"
        );
        Self { state, config }
    }

    /// Start a session on an existing level, e.g. a hand-built one.
    pub fn from_state(state: GameState, config: GeneratorConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Seed of the current level, suitable for replaying it later.
    pub fn seed(&self) -> u32 {
        self.state.generation().seed
    }

    /// Replace the current level with one generated from `seed`. Returns the seed kept.
    pub fn new_game(&mut self, seed: u32) -> u32 {
        let kept = self.state.regenerate(seed, &self.config);
        let report = self.state.generation();
        info!(
            requested_seed = seed,
            seed = kept,
            retries = report.retries_used,
            fallback = report.fallback_accepted,
            "new game"
        );
        kept
    }

    /// Regenerate the current level from scratch.
    ///
    /// Replays the originally requested seed so the generation report comes
    /// back unchanged along with the level.
    pub fn reset(&mut self) -> u32 {
        let seed = self.state.generation().requested_seed;
        self.new_game(seed)
    }

    /// Single-cell selection as a pointer would do it: pick in stabilize mode,
    /// activate when selecting the cursor cell, move otherwise.
    pub fn click(&mut self, target: Pos) -> bool {
        if let Some(mut picker) = self.state.stabilizer() {
            return picker.pick(target);
        }
        if target == self.state.cursor() {
            return self.state.activate();
        }
        self.state.move_cursor(target)
    }

    /// Apply a command. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = self.dispatch(command);
        debug!(
            command = command.as_str(),
            changed,
            moves = self.state.moves(),
            "command applied"
        );
        changed
    }

    fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Move(target) => self.state.move_cursor(target),
            Command::Activate => self.state.activate(),
            Command::Stabilize => {
                let changed = self.state.mode() != Mode::StabilizePick;
                self.state.enter_stabilize_mode();
                changed
            }
            Command::Cancel => self.state.cancel_stabilize_mode(),
            Command::Pick(target) => self.state.stabilize_pick(target),
            Command::Click(target) => self.click(target),
            Command::Undo => self.state.undo(),
            Command::Reset => {
                self.reset();
                true
            }
            Command::NewGame(seed) => {
                self.new_game(seed);
                true
            }
        }
    }

    pub fn is_won(&self) -> bool {
        self.state.all_goals_activated()
    }

    pub fn status(&self) -> Status {
        let snap = self.state.snapshot();
        Status {
            goals_done: snap.activated_count(),
            goals_total: snap.goal_count(),
            moves: snap.moves(),
            mode: snap.mode(),
            seed: self.seed(),
            result: final_result(&self.state),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1, GeneratorConfig::default())
    }
}
