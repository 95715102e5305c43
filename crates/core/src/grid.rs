//! Grid module - the contract every grid realization implements
//!
//! A grid is a fixed-size rectangular table addressed by `(row, column)`,
//! with rows counted top to bottom and columns left to right. Cells start
//! empty; reading one that was never set yields `Ok(None)`.
//!
//! Text form: each row's cells are concatenated with no separator, rows are
//! joined with [`LINE_SEPARATOR`], and there is no trailing separator. Empty
//! cells render as [`EMPTY_CELL_SYMBOL`].

use std::any::Any;
use std::fmt;

use crate::error::GridResult;
use crate::types::{EMPTY_CELL_SYMBOL, LINE_SEPARATOR};

pub trait Grid<T> {
    /// Store `value` at `(row, column)`, replacing whatever was there
    fn set_cell(&mut self, row: usize, column: usize, value: T) -> GridResult<()>;

    /// Read the value at `(row, column)`; `None` if never set
    fn get_cell(&self, row: usize, column: usize) -> GridResult<Option<&T>>;

    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    /// The concrete grid behind this value, for exact-type checks
    ///
    /// Implementations return `self`.
    fn as_any(&self) -> &dyn Any;

    /// Check if `(row, column)` lies inside the grid
    fn contains(&self, row: usize, column: usize) -> bool {
        row < self.num_rows() && column < self.num_columns()
    }

    /// Deep equality against any grid with the same element type
    ///
    /// Identity short-circuits. Otherwise both grids must be the same
    /// concrete type, have the same dimensions, and hold equal values (or
    /// both be empty) at every coordinate. Grids of different types never
    /// compare equal, even with matching contents.
    fn grid_eq(&self, other: &dyn Grid<T>) -> bool
    where
        T: PartialEq,
    {
        if std::ptr::addr_eq(self, other) {
            return true;
        }
        if Any::type_id(self.as_any()) != Any::type_id(other.as_any())
            || self.num_rows() != other.num_rows()
            || self.num_columns() != other.num_columns()
        {
            return false;
        }

        (0..self.num_rows()).all(|row| {
            (0..self.num_columns())
                .all(|column| self.get_cell(row, column).ok() == other.get_cell(row, column).ok())
        })
    }

    /// Write one row's cells, left to right, with no separator
    ///
    /// Fails with [`fmt::Error`] if `row` is out of range.
    fn write_row(&self, row: usize, out: &mut dyn fmt::Write) -> fmt::Result
    where
        T: fmt::Display,
    {
        for column in 0..self.num_columns() {
            match self.get_cell(row, column).map_err(|_| fmt::Error)? {
                Some(value) => write!(out, "{value}")?,
                None => out.write_char(EMPTY_CELL_SYMBOL)?,
            }
        }
        Ok(())
    }

    /// Write every row, joined by [`LINE_SEPARATOR`]
    ///
    /// A grid with zero rows or zero columns writes nothing.
    fn write_rows(&self, out: &mut dyn fmt::Write) -> fmt::Result
    where
        T: fmt::Display,
    {
        if self.num_columns() == 0 {
            return Ok(());
        }
        for row in 0..self.num_rows() {
            if row > 0 {
                out.write_str(LINE_SEPARATOR)?;
            }
            self.write_row(row, out)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for dyn Grid<T> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayGrid;

    #[test]
    fn test_contains_uses_dimensions() {
        let grid: ArrayGrid<u8> = ArrayGrid::new(2, 3);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(1, 2));
        assert!(!grid.contains(2, 0));
        assert!(!grid.contains(0, 3));
    }

    #[test]
    fn test_dyn_grid_display() {
        let mut grid = ArrayGrid::new(2, 2);
        grid.set_cell(0, 0, 'A').unwrap();
        grid.set_cell(1, 1, 'D').unwrap();

        let as_dyn: &dyn Grid<char> = &grid;
        assert_eq!(as_dyn.to_string(), "A \n D");
    }

    #[test]
    fn test_write_row_out_of_range_fails() {
        let grid: ArrayGrid<char> = ArrayGrid::new(1, 1);
        let mut out = String::new();
        assert!(grid.write_row(1, &mut out).is_err());
    }

    /// Single-cell grid that is not an `ArrayGrid`
    struct CellGrid {
        value: Option<char>,
    }

    impl Grid<char> for CellGrid {
        fn set_cell(&mut self, row: usize, column: usize, value: char) -> GridResult<()> {
            if row != 0 || column != 0 {
                return Err(crate::GridError::OutOfBounds {
                    row,
                    column,
                    rows: 1,
                    columns: 1,
                });
            }
            self.value = Some(value);
            Ok(())
        }

        fn get_cell(&self, row: usize, column: usize) -> GridResult<Option<&char>> {
            if row != 0 || column != 0 {
                return Err(crate::GridError::OutOfBounds {
                    row,
                    column,
                    rows: 1,
                    columns: 1,
                });
            }
            Ok(self.value.as_ref())
        }

        fn num_rows(&self) -> usize {
            1
        }

        fn num_columns(&self) -> usize {
            1
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_grid_eq_rejects_other_grid_type() {
        let mut array = ArrayGrid::new(1, 1);
        array.set_cell(0, 0, '#').unwrap();
        let mut single = CellGrid { value: None };
        single.set_cell(0, 0, '#').unwrap();

        // Same dimensions and text, different concrete type
        assert_eq!(array.to_string(), (&single as &dyn Grid<char>).to_string());
        assert!(!array.grid_eq(&single));
        assert!(!single.grid_eq(&array));
        assert!(single.grid_eq(&single));
    }

    #[test]
    fn test_grid_eq_through_trait_objects() {
        let mut a = ArrayGrid::new(1, 2);
        let mut b = ArrayGrid::new(1, 2);
        a.set_cell(0, 1, 'x').unwrap();
        b.set_cell(0, 1, 'x').unwrap();

        let a: &dyn Grid<char> = &a;
        let b: &dyn Grid<char> = &b;
        assert!(a.grid_eq(b));
    }

    #[test]
    fn test_grid_eq_identity() {
        let grid: ArrayGrid<u8> = ArrayGrid::new(3, 3);
        assert!(grid.grid_eq(&grid));
    }
}
