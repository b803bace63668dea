//! Grid - generic 2-D cell storage
//!
//! `Grid<T>` is a dense row-major array addressed by `(row, col)`. It is
//! the storage behind [`LetterGrid`](crate::LetterGrid) and
//! [`PixelImage`](crate::PixelImage), and the shape of
//! [`VisitedMask`](crate::VisitedMask).

use crate::error::{Error, Result};
use std::fmt;

/// A `(row, col)` cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, returning `None` on underflow.
    ///
    /// Upper bounds are not checked here; see [`Grid::offset`].
    pub fn checked_offset(self, drow: isize, dcol: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(drow)?,
            col: self.col.checked_add_signed(dcol)?,
        })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Dense row-major 2-D array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(Error::InvalidDimension { rows, cols })?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from a list of rows.
    ///
    /// An empty list gives a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major cell data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Check whether `(row, col)` lies inside the grid
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.cols + col)
    }

    /// Get a reference to the value at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index(row, col).map(|i| &self.data[i])
    }

    /// Get a mutable reference to the value at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.index(row, col).map(move |i| &mut self.data[i])
    }

    /// Set the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        match self.index(row, col) {
            Some(i) => {
                self.data[i] = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Step from `cell` by a signed offset, staying inside the grid.
    pub fn offset(&self, cell: Cell, drow: isize, dcol: isize) -> Option<Cell> {
        cell.checked_offset(drow, dcol)
            .filter(|c| self.contains(c.row, c.col))
    }

    /// All cell coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<T> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell { row, col }))
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and a 0-column grid has no row data anyway
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid filled with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::InvalidDimension { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_size_check() {
        assert!(Grid::from_vec(2, 3, vec![0u8; 6]).is_ok());
        assert_eq!(
            Grid::from_vec(2, 3, vec![0u8; 5]),
            Err(Error::SizeMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let grid: Grid<u8> = Grid::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(2, 2, 0i32).unwrap();
        grid.set(1, 0, 7).unwrap();
        assert_eq!(grid.get(1, 0), Some(&7));
        assert_eq!(grid.get(2, 0), None);
        assert!(grid.set(0, 2, 1).is_err());
        *grid.get_mut(0, 1).unwrap() = 3;
        assert_eq!(grid.data(), &[0, 3, 7, 0]);
    }

    #[test]
    fn test_offset_bounds() {
        let grid = Grid::new(3, 3, ()).unwrap();
        let corner = Cell::new(0, 0);
        assert_eq!(grid.offset(corner, -1, 0), None);
        assert_eq!(grid.offset(corner, 1, 1), Some(Cell::new(1, 1)));
        assert_eq!(grid.offset(Cell::new(2, 2), 1, 0), None);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(2, 2, ()).unwrap();
        let cells: Vec<_> = grid.cells().map(<(usize, usize)>::from).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(3, 12).to_string(), "(3,12)");
    }
}
