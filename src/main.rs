//! Sprite grid demo (default binary).
//!
//! Builds a small walled room with a goal and an agent, prints it, and shows
//! that kind-aware equality tells apart grids that print the same text.

use anyhow::Result;
use log::info;

use sprite_grid::core::{ArrayGrid, Grid};
use sprite_grid::term::GridPrinter;
use sprite_grid::types::{Sprite, SpriteKind, DEMO_COLUMNS, DEMO_ROWS};

fn main() -> Result<()> {
    env_logger::init();

    let room = build_room(DEMO_ROWS, DEMO_COLUMNS)?;
    info!(
        "built {}x{} room ({} cells set)",
        room.num_rows(),
        room.num_columns(),
        room.cells().iter().filter(|cell| cell.is_some()).count()
    );

    let mut printer = GridPrinter::new();
    printer.print(&room)?;

    // Same glyph in the goal's slot, but a different kind.
    let mut decoy = room.clone();
    let (goal_row, goal_column) = (DEMO_ROWS / 2, DEMO_COLUMNS - 2);
    decoy.set_cell(
        goal_row,
        goal_column,
        Sprite::new(
            SpriteKind::Floor,
            SpriteKind::Goal.default_symbol(),
            goal_row as i32,
            goal_column as i32,
        ),
    )?;

    info!(
        "decoy prints identically: {}, compares equal: {}",
        decoy.to_string() == room.to_string(),
        decoy == room
    );
    Ok(())
}

/// Walls on the border, floor inside, agent on the left and goal on the right.
fn build_room(rows: usize, columns: usize) -> Result<ArrayGrid<Sprite>> {
    let mut room = ArrayGrid::try_new(rows, columns)?;

    for row in 0..rows {
        for column in 0..columns {
            let border = row == 0 || column == 0 || row + 1 == rows || column + 1 == columns;
            let kind = if border {
                SpriteKind::Wall
            } else if row == rows / 2 && column == 1 {
                SpriteKind::Agent
            } else if row == rows / 2 && column + 2 == columns {
                SpriteKind::Goal
            } else {
                SpriteKind::Floor
            };
            room.set_cell(
                row,
                column,
                Sprite::with_default_symbol(kind, row as i32, column as i32),
            )?;
        }
    }

    Ok(room)
}
