//! gridsearch-region - Black block analysis for binary images
//!
//! This crate counts and erases connected blocks of pure black pixels in a
//! [`PixelImage`](gridsearch_core::PixelImage):
//!
//! - **Counting** - [`RegionAnalyzer::count_connected_blocks`]
//! - **Deleting** - [`RegionAnalyzer::delete`] erases the block under a pixel
//! - **Cropping** - [`RegionAnalyzer::crop`] erases blocks outside a rectangle
//!
//! # Examples
//!
//! ```
//! use gridsearch_core::PixelImage;
//! use gridsearch_region::RegionAnalyzer;
//!
//! let mut pix = PixelImage::from_ascii(&[
//!     "##..#",
//!     "#...#",
//!     ".....",
//! ])
//! .unwrap();
//!
//! let mut analyzer = RegionAnalyzer::new(&mut pix);
//! assert_eq!(analyzer.count_connected_blocks(), 2);
//!
//! analyzer.delete(0, 0);
//! assert_eq!(analyzer.count_connected_blocks(), 1);
//! ```

pub mod analyzer;
pub mod fill;
pub mod options;

// Re-export core types
pub use gridsearch_core;

pub use analyzer::RegionAnalyzer;
pub use fill::{erase_component, mark_block};
pub use options::{CropMode, RegionOptions};
