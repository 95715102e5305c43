//! Core grid module - pure, deterministic, and testable
//!
//! This crate holds the grid contract and its dense array realization. It has
//! no dependency on terminals or I/O; rendering here means producing text.
//!
//! # Module Structure
//!
//! - [`grid`]: the [`Grid`] trait, deep equality, text form
//! - [`array_grid`]: [`ArrayGrid`], a flat row-major realization
//! - [`error`]: [`GridError`] for out-of-range access and malformed input
//!
//! # Example
//!
//! ```
//! use sprite_grid_core::{ArrayGrid, Grid};
//! use sprite_grid_types::{Sprite, SpriteKind};
//!
//! let mut grid = ArrayGrid::new(1, 3);
//! for column in 0..3 {
//!     let kind = if column == 1 { SpriteKind::Agent } else { SpriteKind::Wall };
//!     let sprite = Sprite::with_default_symbol(kind, 0, column as i32);
//!     grid.set_cell(0, column, sprite).unwrap();
//! }
//!
//! assert_eq!(grid.to_string(), "#@#");
//! assert!(grid.get_cell(0, 3).is_err());
//! ```

pub mod array_grid;
pub mod error;
pub mod grid;

pub use sprite_grid_types as types;

// Re-export commonly used types for convenience
pub use array_grid::ArrayGrid;
pub use error::{GridError, GridResult};
pub use grid::Grid;
