//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`Intent`]s and turns those into session
//! [`crate::types::Command`]s, tracking the stabilize target marker in between.

pub mod handler;
pub mod map;

pub use fracture_grid_types as types;

pub use handler::{Focus, InputHandler};
pub use map::{handle_key_event, should_quit, Intent};
