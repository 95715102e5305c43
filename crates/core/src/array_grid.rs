//! ArrayGrid module - dense grid backed by one flat vector
//!
//! Cells are stored row-major (`row * columns + column`) in a single
//! allocation made at construction. There is no resize operation; the
//! dimensions are fixed for the life of the grid.

use std::any::Any;
use std::fmt;

use log::debug;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// Dense `rows x columns` grid of optional values
#[derive(Debug, Clone)]
pub struct ArrayGrid<T> {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order
    cells: Vec<Option<T>>,
}

impl<T> ArrayGrid<T> {
    /// Create a grid with every cell empty
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`. Use [`ArrayGrid::try_new`]
    /// when the dimensions come from untrusted input.
    pub fn new(rows: usize, columns: usize) -> Self {
        match Self::try_new(rows, columns) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a grid with every cell empty, rejecting oversized dimensions
    pub fn try_new(rows: usize, columns: usize) -> GridResult<Self> {
        let len = Self::cell_count(rows, columns)?;
        let cells = std::iter::repeat_with(|| None).take(len).collect();
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    fn cell_count(rows: usize, columns: usize) -> GridResult<usize> {
        rows.checked_mul(columns)
            .ok_or(GridError::TooLarge { rows, columns })
    }

    /// Build a fully populated grid from nested rows
    ///
    /// Every row must have the same length as the first one. An empty outer
    /// vector yields a 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> GridResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let num_rows = rows.len();
        let mut cells = Vec::with_capacity(Self::cell_count(num_rows, columns)?);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(GridError::RaggedRow {
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
            cells.extend(values.into_iter().map(Some));
        }

        Ok(Self {
            rows: num_rows,
            columns,
            cells,
        })
    }

    /// Calculate flat index from (row, column) coordinates
    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> GridResult<usize> {
        if row >= self.rows || column >= self.columns {
            debug!(
                "rejected cell ({}, {}) on {}x{} grid",
                row, column, self.rows, self.columns
            );
            return Err(GridError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    /// Empty the cell at (row, column), returning what it held
    pub fn clear_cell(&mut self, row: usize, column: usize) -> GridResult<Option<T>> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx].take())
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Iterate all cells as `(row, column, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<&T>)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / columns, idx % columns, cell.as_ref()))
    }
}

impl<T: 'static> Grid<T> for ArrayGrid<T> {
    fn set_cell(&mut self, row: usize, column: usize, value: T) -> GridResult<()> {
        let idx = self.index(row, column)?;
        self.cells[idx] = Some(value);
        Ok(())
    }

    fn get_cell(&self, row: usize, column: usize) -> GridResult<Option<&T>> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx].as_ref())
    }

    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.columns
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: PartialEq> PartialEq for ArrayGrid<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.rows == other.rows
                && self.columns == other.columns
                && self.cells == other.cells)
    }
}

impl<T: Eq> Eq for ArrayGrid<T> {}

impl<T: fmt::Display + 'static> fmt::Display for ArrayGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f)
    }
}
