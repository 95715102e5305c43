//! Sprite grid (workspace facade crate).
//!
//! Exposes `sprite_grid::{core,term,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use sprite_grid_core as core;
pub use sprite_grid_term as term;
pub use sprite_grid_types as types;
