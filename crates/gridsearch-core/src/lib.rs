//! gridsearch-core - Basic data structures for grid searches
//!
//! This crate provides the collaborators the search crates operate on:
//!
//! - [`Grid`] / [`Cell`] - Dense row-major 2-D storage and coordinates
//! - [`LetterGrid`] - A `Grid<char>` board for word search
//! - [`PixelImage`] / [`Rgb`] - RGB image addressed by `(x, y)`
//! - [`VisitedMask`] - Per-search visited marks
//! - [`ConnectivityType`] - 4-way / 8-way neighbor tables
//!
//! # Example
//!
//! ```
//! use gridsearch_core::{LetterGrid, PixelImage, Rgb};
//!
//! let board = LetterGrid::from_strs(&["CAT", "XXX"]).unwrap();
//! assert_eq!(board.letter(0, 0), Some('C'));
//!
//! let mut pix = PixelImage::new(3, 3).unwrap();
//! pix.set_pixel(1, 1, Rgb::BLACK).unwrap();
//! assert!(pix.is_black(1, 1));
//! ```

pub mod connectivity;
pub mod error;
pub mod grid;
pub mod image;
pub mod letters;
pub mod visited;

pub use connectivity::{ConnectivityType, EIGHT_WAY_OFFSETS, FOUR_WAY_OFFSETS};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use image::{ASCII_GRAY, PixelImage, Rgb};
pub use letters::LetterGrid;
pub use visited::VisitedMask;
