//! gridsearch - Depth-first search over 2D grids
//!
//! Two searches over two kinds of grid:
//!
//! - Word paths on a letter board, Boggle style ([`boggle`])
//! - Connected blocks of black pixels in an image ([`region`])
//!
//! plus the shared grid types and image file I/O ([`io`]).
//!
//! # Example
//!
//! ```
//! use gridsearch::boggle::WordPathFinder;
//! use gridsearch::region::RegionAnalyzer;
//! use gridsearch::{LetterGrid, PixelImage};
//!
//! let board = LetterGrid::from_strs(&["CAT", "XOD"]).unwrap();
//! assert!(WordPathFinder::new(&board).find_word("COD"));
//!
//! let mut pix = PixelImage::from_ascii(&["#..#", "#..."]).unwrap();
//! assert_eq!(RegionAnalyzer::new(&mut pix).count_connected_blocks(), 2);
//! ```

// Re-export core types (grids, cells, images)
pub use gridsearch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gridsearch_boggle as boggle;
pub use gridsearch_io as io;
pub use gridsearch_region as region;
