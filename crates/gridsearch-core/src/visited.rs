//! Visited mask for depth-first traversals

/// Boolean mask with the dimensions of the grid being searched.
///
/// A mask is created per top-level search call and never shared between
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    rows: usize,
    cols: usize,
    bits: Vec<bool>,
}

impl VisitedMask {
    /// Create an all-clear mask.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![false; rows.saturating_mul(cols)],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Whether `(row, col)` is marked. Out-of-range cells read as unmarked.
    #[inline]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.bits[i])
    }

    /// Mark `(row, col)`. Out-of-range cells are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.bits[i] = true;
        }
    }

    /// Unmark `(row, col)`. Out-of-range cells are ignored.
    #[inline]
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.bits[i] = false;
        }
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clear() {
        let mut mask = VisitedMask::new(2, 3);
        assert!(!mask.is_set(1, 2));
        mask.set(1, 2);
        assert!(mask.is_set(1, 2));
        assert_eq!(mask.count(), 1);
        mask.clear(1, 2);
        assert!(!mask.is_set(1, 2));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut mask = VisitedMask::new(2, 2);
        mask.set(5, 5);
        assert!(!mask.is_set(5, 5));
        assert_eq!(mask.count(), 0);
    }
}
