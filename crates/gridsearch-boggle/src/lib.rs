//! gridsearch-boggle - Word path search over letter grids
//!
//! Finds words traced through 8-connected neighbors of a [`LetterGrid`]
//! without reusing a cell, reports the path of the first match, and
//! counts occurrences.
//!
//! # Example
//!
//! ```
//! use gridsearch_boggle::WordPathFinder;
//! use gridsearch_core::LetterGrid;
//!
//! let board = LetterGrid::from_strs(&["CAT", "XXX"]).unwrap();
//! let finder = WordPathFinder::new(&board);
//!
//! assert!(finder.find_word("CAT"));
//! assert_eq!(finder.find_word_path("CAT").to_string(), "(0,0)(0,1)(0,2)");
//! assert_eq!(finder.frequency("CAT"), 1);
//! ```
//!
//! # Palindromes
//!
//! `frequency` counts a palindrome from each of its ends, so one
//! placement of `"ABA"` counts twice. Use
//! [`PalindromePolicy::CountOnce`] to count placements instead.

pub mod finder;
pub mod options;
pub mod path;

// Re-export core types
pub use gridsearch_core;

pub use finder::{WordPathFinder, is_palindrome};
pub use options::{PalindromePolicy, WordSearchOptions};
pub use path::WordPath;
