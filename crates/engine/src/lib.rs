//! Game engine: session lifecycle and command dispatch on top of the pure core.

pub mod session;

pub use fracture_grid_core as core;
pub use fracture_grid_types as types;

pub use session::{Session, Status};
