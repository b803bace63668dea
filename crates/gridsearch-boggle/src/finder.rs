//! Word path search
//!
//! A word is found when its letters trace a simple path (no cell used
//! twice) through 8-connected neighbors. Start cells are tried in
//! row-major order and neighbors in the fixed order of
//! [`EIGHT_WAY_OFFSETS`], so the path reported is the first one reached
//! in that order, not necessarily the shortest.

use crate::options::{PalindromePolicy, WordSearchOptions};
use crate::path::WordPath;
use gridsearch_core::{Cell, EIGHT_WAY_OFFSETS, LetterGrid, VisitedMask};

/// Finds words on a borrowed letter board.
#[derive(Debug, Clone)]
pub struct WordPathFinder<'a> {
    grid: &'a LetterGrid,
    options: WordSearchOptions,
}

impl<'a> WordPathFinder<'a> {
    /// Create a finder with default options.
    pub fn new(grid: &'a LetterGrid) -> Self {
        Self::with_options(grid, WordSearchOptions::default())
    }

    /// Create a finder with the given options.
    pub fn with_options(grid: &'a LetterGrid, options: WordSearchOptions) -> Self {
        Self { grid, options }
    }

    /// The board being searched
    pub fn grid(&self) -> &'a LetterGrid {
        self.grid
    }

    pub fn options(&self) -> &WordSearchOptions {
        &self.options
    }

    /// Whether `word` can be traced on the board.
    ///
    /// An empty word is never found. Matching is exact and case-sensitive.
    pub fn find_word(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// The path of the first match of `word`, first letter first.
    ///
    /// Empty if the word is not on the board.
    pub fn find_word_path(&self, word: &str) -> WordPath {
        self.search(word).unwrap_or_default()
    }

    /// Count the occurrences of `word` on the board.
    ///
    /// For a word that is not a palindrome, each start cell counts at most
    /// once, and cells used by a path already counted stay claimed for the
    /// rest of the scan.
    ///
    /// A palindrome (compared with spaces removed) counts every path from
    /// every start cell, so under the default
    /// [`PalindromePolicy::CountFromEachEnd`] a single placement is counted
    /// once from each end.
    pub fn frequency(&self, word: &str) -> usize {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return 0;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("frequency", word);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut search = Search::new(self.grid, &letters);
        let count = if is_palindrome(word) {
            let paths: usize = self
                .grid
                .cells()
                .map(|cell| search.count_paths_from(cell, 0))
                .sum();
            match self.options.palindrome_policy {
                PalindromePolicy::CountFromEachEnd => paths,
                // Every placement longer than one letter is found from both ends
                PalindromePolicy::CountOnce if letters.len() > 1 => paths / 2,
                PalindromePolicy::CountOnce => paths,
            }
        } else {
            // The mask is shared by the whole scan and successful paths stay marked
            let mut count = 0;
            for cell in self.grid.cells() {
                if self.grid.letter(cell.row, cell.col) == Some(letters[0])
                    && search.matches_from(Some(cell), 0)
                {
                    count += 1;
                }
            }
            count
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(count, "frequency done");

        count
    }

    fn search(&self, word: &str) -> Option<WordPath> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("find_word", word);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut search = Search::new(self.grid, &letters);
        for cell in self.grid.cells() {
            if self.grid.letter(cell.row, cell.col) != Some(first) {
                continue;
            }
            search.trail.clear();
            if search.matches_from(Some(cell), 0) {
                #[cfg(feature = "tracing")]
                tracing::trace!(row = cell.row, col = cell.col, "found");
                return Some(WordPath::from_trail(search.trail));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("not found");
        None
    }
}

/// State of one top-level search call.
struct Search<'g, 'w> {
    grid: &'g LetterGrid,
    letters: &'w [char],
    visited: VisitedMask,
    /// Cells of the successful path, pushed while unwinding
    trail: Vec<Cell>,
}

impl<'g, 'w> Search<'g, 'w> {
    fn new(grid: &'g LetterGrid, letters: &'w [char]) -> Self {
        Self {
            grid,
            letters,
            visited: VisitedMask::new(grid.rows(), grid.cols()),
            trail: Vec::with_capacity(letters.len()),
        }
    }

    /// Try to match `letters[index..]` starting at `cell`.
    ///
    /// `None` is a step off the board. Once every letter has matched the
    /// step that follows succeeds wherever it lands. On success the path
    /// cells stay marked and are appended to `trail` last letter first.
    fn matches_from(&mut self, cell: Option<Cell>, index: usize) -> bool {
        if index == self.letters.len() {
            return true;
        }
        let Some(cell) = cell else {
            return false;
        };
        if self.grid.letter(cell.row, cell.col) != Some(self.letters[index])
            || self.visited.is_set(cell.row, cell.col)
        {
            return false;
        }

        self.visited.set(cell.row, cell.col);
        for &(drow, dcol) in &EIGHT_WAY_OFFSETS {
            let next = self.grid.offset(cell, drow, dcol);
            if self.matches_from(next, index + 1) {
                self.trail.push(cell);
                return true;
            }
        }
        self.visited.clear(cell.row, cell.col);
        false
    }

    /// Number of simple paths spelling `letters[index..]` that start at `cell`.
    fn count_paths_from(&mut self, cell: Cell, index: usize) -> usize {
        if self.visited.is_set(cell.row, cell.col)
            || self.grid.letter(cell.row, cell.col) != Some(self.letters[index])
        {
            return 0;
        }
        if index + 1 == self.letters.len() {
            return 1;
        }

        self.visited.set(cell.row, cell.col);
        let mut count = 0;
        for &(drow, dcol) in &EIGHT_WAY_OFFSETS {
            if let Some(next) = self.grid.offset(cell, drow, dcol) {
                count += self.count_paths_from(next, index + 1);
            }
        }
        self.visited.clear(cell.row, cell.col);
        count
    }
}

/// Whether `word` reads the same backwards once spaces are removed.
pub fn is_palindrome(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|&c| c != ' ').collect();
    letters.iter().eq(letters.iter().rev())
}
