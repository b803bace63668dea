//! Reproducible random fixtures

use gridsearch_core::{LetterGrid, PixelImage, Rgb};

/// Simple linear congruential generator for reproducible randomness
#[derive(Debug, Clone)]
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX LCG constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        // High bits have the longest period
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `0..bound`; `bound` must be non-zero
    pub fn below(&mut self, bound: usize) -> usize {
        ((self.next_u64() >> 33) % bound as u64) as usize
    }
}

/// Random binary image where each pixel is black with probability `density`.
pub fn random_binary_image(rng: &mut TestRng, width: u32, height: u32, density: f64) -> PixelImage {
    let data = (0..width as usize * height as usize)
        .map(|_| {
            if rng.next_f64() < density {
                Rgb::BLACK
            } else {
                Rgb::WHITE
            }
        })
        .collect();
    PixelImage::from_vec(width, height, data).expect("buffer sized from dimensions")
}

/// Random letter grid drawn from `alphabet`.
pub fn random_letter_grid(rng: &mut TestRng, rows: usize, cols: usize, alphabet: &str) -> LetterGrid {
    let letters: Vec<char> = alphabet.chars().collect();
    let data = (0..rows * cols)
        .map(|_| letters[rng.below(letters.len())])
        .collect();
    LetterGrid::from_vec(rows, cols, data).expect("buffer sized from dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        let a = random_binary_image(&mut TestRng::new(7), 8, 8, 0.5);
        let b = random_binary_image(&mut TestRng::new(7), 8, 8, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_extremes() {
        let mut rng = TestRng::new(1);
        assert_eq!(random_binary_image(&mut rng, 5, 5, 1.0).count_black(), 25);
        assert_eq!(random_binary_image(&mut rng, 5, 5, 0.0).count_black(), 0);
    }

    #[test]
    fn test_letter_grid_alphabet() {
        let grid = random_letter_grid(&mut TestRng::new(3), 4, 5, "AB");
        assert_eq!((grid.rows(), grid.cols()), (4, 5));
        assert!(grid.data().iter().all(|&c| c == 'A' || c == 'B'));
    }
}
