//! Terminal "game renderer" module.
//!
//! Renders the puzzle into a simple framebuffer that is then flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layouts can be asserted in tests
//! - Allow precise control over aspect ratio (3 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fracture_grid_core as core;
pub use fracture_grid_engine as engine;
pub use fracture_grid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_glyph, GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
