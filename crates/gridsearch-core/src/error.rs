//! Error types for gridsearch-core
//!
//! Construction and mutation of the grid collaborators can fail; the
//! search algorithms built on top of them never do. Each variant carries
//! enough context to report the offending call.

use thiserror::Error;

/// gridsearch-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid grid or image dimensions
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Cell or pixel coordinate out of bounds
    #[error("index out of bounds: ({row}, {col}) in {rows}x{cols}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Backing buffer does not match the requested dimensions
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Row lengths differ when building a grid from rows
    #[error("ragged rows: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for gridsearch-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_produced() {
        use crate::{Grid, PixelImage};

        let errors = [
            Grid::new(usize::MAX, 2, 0u8).unwrap_err(),
            Grid::new(1, 1, 0u8).unwrap().set(1, 0, 1).unwrap_err(),
            PixelImage::from_vec(2, 2, Vec::new()).unwrap_err(),
            Grid::from_rows(vec![vec![1u8, 2], vec![3]]).unwrap_err(),
        ];
        for err in &errors {
            // Exhaustive, so a variant no constructor returns cannot be added silently
            let name = match err {
                Error::InvalidDimension { .. } => "dimension",
                Error::IndexOutOfBounds { .. } => "bounds",
                Error::SizeMismatch { .. } => "size",
                Error::RaggedRows { .. } => "ragged",
            };
            assert!(!name.is_empty());
        }
        assert_eq!(
            errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
            vec![
                format!("invalid dimensions: {}x2", usize::MAX),
                "index out of bounds: (1, 0) in 1x1".to_string(),
                "size mismatch: expected 4, got 0".to_string(),
                "ragged rows: row 1 has 1 cells, expected 2".to_string(),
            ]
        );
    }
}
