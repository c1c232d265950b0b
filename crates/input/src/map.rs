//! Key mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for, before mode and cursor are taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// One orthogonal step (dx, dy)
    Step(i32, i32),
    /// Activate, or confirm a stabilize pick
    Confirm,
    Stabilize,
    Cancel,
    Undo,
    Reset,
    NewGame,
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.code == KeyCode::Char('z') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Intent::Undo);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::Step(-1, 0))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::Step(1, 0))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Intent::Step(0, -1))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::Step(0, 1))
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::Confirm),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::Stabilize),
        KeyCode::Esc => Some(Intent::Cancel),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(Intent::Undo),

        // Lifecycle
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Intent::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
