//! Core types module - sprites and shared rendering constants
//!
//! This module defines the positioned-symbol entity placed on grids, plus the
//! constants every renderer agrees on. All types are pure data with no
//! external dependencies, making them usable in any context (grid storage,
//! terminal output, tests).
//!
//! # Sprite Kinds
//!
//! | Kind | Default symbol |
//! |------|----------------|
//! | `Wall` | `#` |
//! | `Floor` | `.` |
//! | `Goal` | `*` |
//! | `Agent` | `@` |
//!
//! Equality is kind-aware: two sprites with the same symbol at the same
//! coordinates are still different when their kinds differ.
//!
//! # Examples
//!
//! ```
//! use sprite_grid_types::{Sprite, SpriteKind};
//!
//! let wall = Sprite::with_default_symbol(SpriteKind::Wall, 0, 0);
//! assert_eq!(wall.to_string(), "#");
//!
//! // Same glyph and position, different kind
//! let fake = Sprite::new(SpriteKind::Goal, '#', 0, 0);
//! assert_ne!(wall, fake);
//!
//! // Parse kind from string (case-insensitive)
//! assert_eq!(SpriteKind::from_str("WALL"), Some(SpriteKind::Wall));
//! ```

use std::fmt;

/// Symbol rendered for a grid cell that was never set
pub const EMPTY_CELL_SYMBOL: char = ' ';

/// Separator placed between rendered grid rows (never after the last one)
pub const LINE_SEPARATOR: &str = "\n";

/// Default symbol for [`SpriteKind::Wall`]
pub const WALL_SYMBOL: char = '#';

/// Default symbol for [`SpriteKind::Floor`]
pub const FLOOR_SYMBOL: char = '.';

/// Default symbol for [`SpriteKind::Goal`]
pub const GOAL_SYMBOL: char = '*';

/// Default symbol for [`SpriteKind::Agent`]
pub const AGENT_SYMBOL: char = '@';

/// Rows of the demo grid built by the `sprite-grid` binary
pub const DEMO_ROWS: usize = 5;

/// Columns of the demo grid built by the `sprite-grid` binary
pub const DEMO_COLUMNS: usize = 9;

/// The closed set of sprite variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Wall,
    Floor,
    Goal,
    Agent,
}

impl SpriteKind {
    /// All kinds, in declaration order
    pub const ALL: [SpriteKind; 4] = [
        SpriteKind::Wall,
        SpriteKind::Floor,
        SpriteKind::Goal,
        SpriteKind::Agent,
    ];

    /// Conventional display symbol for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use sprite_grid_types::SpriteKind;
    ///
    /// assert_eq!(SpriteKind::Wall.default_symbol(), '#');
    /// assert_eq!(SpriteKind::Agent.default_symbol(), '@');
    /// ```
    pub fn default_symbol(&self) -> char {
        match self {
            SpriteKind::Wall => WALL_SYMBOL,
            SpriteKind::Floor => FLOOR_SYMBOL,
            SpriteKind::Goal => GOAL_SYMBOL,
            SpriteKind::Agent => AGENT_SYMBOL,
        }
    }

    /// Look up the kind whose default symbol is `symbol`
    ///
    /// # Examples
    ///
    /// ```
    /// use sprite_grid_types::SpriteKind;
    ///
    /// assert_eq!(SpriteKind::from_symbol('*'), Some(SpriteKind::Goal));
    /// assert_eq!(SpriteKind::from_symbol('?'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.default_symbol() == symbol)
    }

    /// Parse kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wall" => Some(SpriteKind::Wall),
            "floor" => Some(SpriteKind::Floor),
            "goal" => Some(SpriteKind::Goal),
            "agent" => Some(SpriteKind::Agent),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKind::Wall => "wall",
            SpriteKind::Floor => "floor",
            SpriteKind::Goal => "goal",
            SpriteKind::Agent => "agent",
        }
    }
}

/// A single-character glyph anchored at a row/column
///
/// Sprites are immutable once built. Coordinates are not range-checked here;
/// whichever grid places the sprite owns that concern.
///
/// Two sprites are equal only when kind, symbol, row and column all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite {
    kind: SpriteKind,
    symbol: char,
    row: i32,
    column: i32,
}

impl Sprite {
    /// Create a sprite with an explicit symbol
    pub fn new(kind: SpriteKind, symbol: char, row: i32, column: i32) -> Self {
        Self {
            kind,
            symbol,
            row,
            column,
        }
    }

    /// Create a sprite using the kind's conventional symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use sprite_grid_types::{Sprite, SpriteKind};
    ///
    /// let agent = Sprite::with_default_symbol(SpriteKind::Agent, 2, 3);
    /// assert_eq!(agent.symbol(), '@');
    /// assert_eq!((agent.row(), agent.column()), (2, 3));
    /// ```
    pub fn with_default_symbol(kind: SpriteKind, row: i32, column: i32) -> Self {
        Self::new(kind, kind.default_symbol(), row, column)
    }

    pub fn kind(&self) -> SpriteKind {
        self.kind
    }

    /// Display symbol
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Row coordinate
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column coordinate
    pub fn column(&self) -> i32 {
        self.column
    }
}

impl fmt::Display for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
