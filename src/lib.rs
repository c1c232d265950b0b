//! Fracture Grid (workspace facade crate).
//!
//! Re-exports the workspace crates as `fracture_grid::{core,engine,input,term,types}`
//! and hosts the application-level configuration used by the binary.

pub mod config;
pub mod summary;

pub use fracture_grid_core as core;
pub use fracture_grid_engine as engine;
pub use fracture_grid_input as input;
pub use fracture_grid_term as term;
pub use fracture_grid_types as types;
