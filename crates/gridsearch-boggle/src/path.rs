//! Matched word paths

use gridsearch_core::{Cell, ConnectivityType};
use std::fmt;

/// The cells a word occupies on the board, first letter first.
///
/// The search records cells while unwinding, last letter first, and
/// reverses them once the path is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordPath {
    cells: Vec<Cell>,
}

impl WordPath {
    /// Build a path from cells recorded while unwinding (last letter first).
    pub(crate) fn from_trail(mut trail: Vec<Cell>) -> Self {
        trail.reverse();
        Self { cells: trail }
    }

    /// Number of cells (equals the word length for a found path)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no path was found
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in start-to-end order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cell of the first letter
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Cell of the last letter
    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether the cells are distinct and each consecutive pair is
    /// 8-connected.
    pub fn is_simple_path(&self) -> bool {
        let steps_ok = self.cells.windows(2).all(|w| {
            ConnectivityType::EightWay.are_neighbors(w[0].into(), w[1].into())
        });
        let distinct = self
            .cells
            .iter()
            .enumerate()
            .all(|(i, c)| !self.cells[..i].contains(c));
        steps_ok && distinct
    }
}

impl From<WordPath> for Vec<Cell> {
    fn from(path: WordPath) -> Self {
        path.cells
    }
}

impl IntoIterator for WordPath {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordPath {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Concatenated `(row,col)` pairs, e.g. `(0,0)(0,1)(0,2)`; empty when no
/// path was found.
impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
