//! Terminal output for grids.
//!
//! A thin console display routine: it takes a grid's text form, row by row,
//! and writes it to a terminal through crossterm. Anything fancier (colors,
//! layout, diffing) is out of scope.

pub mod printer;

pub use sprite_grid_core as core;
pub use sprite_grid_types as types;

pub use printer::{encode_grid_into, GridPrinter};
