//! Turns intents into session commands.
//!
//! In normal mode steps move the cursor directly. In stabilize pick mode they
//! move a separate target marker instead, and confirm repairs the marked cell.

use crate::map::Intent;
use crate::types::{Command, Mode, Pos};

/// The parts of the game an input handler needs to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub cursor: Pos,
    pub mode: Mode,
    pub size: usize,
}

/// Tracks the stabilize target marker between key presses.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    marker: Option<Pos>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker to draw, if the game is in pick mode.
    pub fn marker(&self, focus: Focus) -> Option<Pos> {
        match focus.mode {
            Mode::StabilizePick => Some(self.marker.unwrap_or(focus.cursor)),
            Mode::Normal => None,
        }
    }

    /// Translate an intent. `None` means nothing to send to the session
    /// (marker-only moves, or `NewGame`, which needs a seed from the caller).
    pub fn handle(&mut self, intent: Intent, focus: Focus) -> Option<Command> {
        match focus.mode {
            Mode::Normal => {
                self.marker = None;
                match intent {
                    Intent::Step(dx, dy) => Some(Command::Move(focus.cursor.offset(dx, dy))),
                    Intent::Confirm => Some(Command::Activate),
                    Intent::Stabilize => {
                        self.marker = Some(focus.cursor);
                        Some(Command::Stabilize)
                    }
                    Intent::Cancel | Intent::NewGame => None,
                    Intent::Undo => Some(Command::Undo),
                    Intent::Reset => Some(Command::Reset),
                }
            }
            Mode::StabilizePick => {
                let marker = self.marker.unwrap_or(focus.cursor);
                match intent {
                    Intent::Step(dx, dy) => {
                        self.marker = Some(clamp(marker.offset(dx, dy), focus.size));
                        None
                    }
                    Intent::Confirm => Some(Command::Pick(marker)),
                    Intent::Cancel => {
                        self.marker = None;
                        Some(Command::Cancel)
                    }
                    Intent::Stabilize | Intent::NewGame => None,
                    Intent::Undo => Some(Command::Undo),
                    Intent::Reset => Some(Command::Reset),
                }
            }
        }
    }
}

fn clamp(pos: Pos, size: usize) -> Pos {
    let max = size.saturating_sub(1) as i32;
    Pos::new(pos.x.clamp(0, max), pos.y.clamp(0, max))
}
