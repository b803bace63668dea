//! gridsearch-test - Regression test framework for gridsearch
//!
//! Provides the shared pieces of the `tests/*_reg.rs` suites:
//!
//! - [`RegParams`] - a named run that records every failed check
//! - fixture loading from `tests/data/` at the workspace root
//! - reproducible random boards and images ([`TestRng`])
//! - reference algorithms to cross-check results against
//!
//! # Usage
//!
//! ```ignore
//! use gridsearch_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("blocks");
//! rp.compare_values(3.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print intermediate images

mod error;
mod params;
pub mod random;
pub mod reference;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use random::{TestRng, random_binary_image, random_letter_grid};
pub use reference::{count_blocks_union_find, word_exists_exhaustive};

use gridsearch_core::{LetterGrid, PixelImage};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "blocks.png")
pub fn load_test_image(name: &str) -> TestResult<PixelImage> {
    let path = test_data_path(name);
    gridsearch_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Load a letter board from the grid data directory
///
/// # Arguments
///
/// * `name` - Board filename (e.g., "boggle.txt")
pub fn load_test_grid(name: &str) -> TestResult<LetterGrid> {
    let path = grid_data_path(name);
    let text = std::fs::read_to_string(&path)?;
    LetterGrid::parse(&text).map_err(|e| TestError::GridLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // gridsearch-test is at crates/gridsearch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test image file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to a test board file
pub fn grid_data_path(name: &str) -> String {
    format!("{}/tests/data/grids/{}", workspace_root(), name)
}
