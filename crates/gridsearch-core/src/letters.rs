//! Letter grids
//!
//! A [`LetterGrid`] is a `Grid<char>`. Boards are usually written as text,
//! one row per line, so the constructors here accept that form.

use crate::error::Result;
use crate::grid::Grid;
use std::fmt;

/// A grid of letters, addressed by `(row, col)`
pub type LetterGrid = Grid<char>;

impl Grid<char> {
    /// Build a letter grid from one string per row.
    ///
    /// Every character of each string is a cell, spaces included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`](crate::Error::RaggedRows) if the rows
    /// have different character counts.
    pub fn from_strs<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    /// Parse a board written as text.
    ///
    /// Blank lines are skipped and whitespace inside a line is ignored, so
    /// both `"CAT"` and `"C A T"` describe the same row.
    pub fn parse(text: &str) -> Result<Self> {
        Grid::from_rows(
            text.lines()
                .map(|line| {
                    line.chars()
                        .filter(|c| !c.is_whitespace())
                        .collect::<Vec<_>>()
                })
                .filter(|row| !row.is_empty())
                .collect(),
        )
    }

    /// Letter at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col).copied()
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_strs() {
        let grid = LetterGrid::from_strs(&["CAT", "XXX"]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.letter(0, 1), Some('A'));
        assert_eq!(grid.letter(0, 3), None);
    }

    #[test]
    fn test_parse_ignores_spacing() {
        let grid = LetterGrid::parse("\n C A T \n\nD O G\n").unwrap();
        assert_eq!(grid, LetterGrid::from_strs(&["CAT", "DOG"]).unwrap());
    }

    #[test]
    fn test_parse_ragged() {
        assert!(matches!(
            LetterGrid::parse("AB\nC"),
            Err(Error::RaggedRows { row: 1, .. })
        ));
    }

    #[test]
    fn test_display() {
        let grid = LetterGrid::from_strs(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "AB\nCD\n");
    }
}
