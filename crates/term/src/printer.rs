//! GridPrinter: flushes a grid's text form to a real terminal.
//!
//! Rows are written as plain text with `\r\n` between them so the output lines
//! up whether or not the terminal is in raw mode. No styling is applied.

use std::fmt;
use std::io::{self, Write};

use anyhow::Result;

use crossterm::{style::Print, QueueableCommand};

use crate::core::Grid;

pub struct GridPrinter {
    stdout: io::Stdout,
    buf: Vec<u8>,
    line: String,
}

impl GridPrinter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            line: String::new(),
        }
    }

    /// Print every row of `grid`, followed by a line break.
    pub fn print<T, G>(&mut self, grid: &G) -> Result<()>
    where
        T: fmt::Display,
        G: Grid<T> + ?Sized,
    {
        self.buf.clear();
        encode_rows_into(grid, &mut self.buf, &mut self.line)?;
        if grid.num_rows() > 0 && grid.num_columns() > 0 {
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for GridPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode all rows of `grid` into `out`, with no trailing line break.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_grid_into<T, G>(grid: &G, out: &mut Vec<u8>) -> Result<()>
where
    T: fmt::Display,
    G: Grid<T> + ?Sized,
{
    let mut line = String::new();
    encode_rows_into(grid, out, &mut line)
}

fn encode_rows_into<T, G>(grid: &G, out: &mut Vec<u8>, line: &mut String) -> Result<()>
where
    T: fmt::Display,
    G: Grid<T> + ?Sized,
{
    if grid.num_columns() == 0 {
        return Ok(());
    }
    for row in 0..grid.num_rows() {
        if row > 0 {
            out.queue(Print("\r\n"))?;
        }
        line.clear();
        grid.write_row(row, &mut *line)?;
        out.queue(Print(line.as_str()))?;
    }
    Ok(())
}
