//! PixelImage - RGB image addressed by `(x, y)`
//!
//! The region analysis treats images as binary: a pixel is black iff it is
//! exactly [`Rgb::BLACK`] and white iff it is exactly [`Rgb::WHITE`].
//! Anything else is neither.
//!
//! # Coordinates
//!
//! `x` runs over `0..width` (columns), `y` over `0..height` (rows). The
//! pixels are stored in a row-major [`Grid`] of `height` rows.

use crate::error::{Error, Result};
use crate::grid::Grid;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray level `v` on all three channels.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Rgb::BLACK
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Rgb::WHITE
    }
}

/// Gray used by [`PixelImage::from_ascii`] for characters other than `#`/`.`.
pub const ASCII_GRAY: Rgb = Rgb::gray(128);

/// RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    pixels: Grid<Rgb>,
}

impl PixelImage {
    /// Create a white image.
    ///
    /// Zero width or height is allowed and gives an image with no pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_fill(width, height, Rgb::WHITE)
    }

    /// Create an image filled with `color`.
    pub fn new_fill(width: u32, height: u32, color: Rgb) -> Result<Self> {
        Ok(Self {
            pixels: Grid::new(height as usize, width as usize, color)?,
        })
    }

    /// Wrap row-major pixel data (`height` rows of `width` pixels).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        Ok(Self {
            pixels: Grid::from_vec(height as usize, width as usize, data)?,
        })
    }

    /// Build an image from ASCII art, one string per row.
    ///
    /// `#` is black, `.` is white and any other character is
    /// [`ASCII_GRAY`].
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows: Vec<Vec<Rgb>> = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|c| match c {
                        '#' => Rgb::BLACK,
                        '.' => Rgb::WHITE,
                        _ => ASCII_GRAY,
                    })
                    .collect()
            })
            .collect();
        let pixels = Grid::from_rows(rows)?;
        check_dimension(pixels.cols(), pixels.rows())?;
        Ok(Self { pixels })
    }

    /// Render as ASCII art: `#` black, `.` white, `+` anything else.
    pub fn to_ascii(&self) -> Vec<String> {
        self.pixels
            .iter_rows()
            .map(|row| {
                row.iter()
                    .map(|p| {
                        if p.is_black() {
                            '#'
                        } else if p.is_white() {
                            '.'
                        } else {
                            '+'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.pixels.cols() as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.rows() as u32
    }

    /// Row-major pixel data
    pub fn data(&self) -> &[Rgb] {
        self.pixels.data()
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixels.get(y as usize, x as usize).copied()
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        self.pixels.set(y as usize, x as usize, color)
    }

    /// Whether the pixel at `(x, y)` is pure black. False out of bounds.
    #[inline]
    pub fn is_black(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).is_some_and(Rgb::is_black)
    }

    /// Whether the pixel at `(x, y)` is pure white. False out of bounds.
    #[inline]
    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).is_some_and(Rgb::is_white)
    }

    /// Number of pure black pixels
    pub fn count_black(&self) -> usize {
        self.pixels.data().iter().filter(|p| p.is_black()).count()
    }
}

fn check_dimension(width: usize, height: usize) -> Result<()> {
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return Err(Error::InvalidDimension {
            rows: height,
            cols: width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_white() {
        let pix = PixelImage::new(4, 3).unwrap();
        assert_eq!(pix.width(), 4);
        assert_eq!(pix.height(), 3);
        assert!(pix.data().iter().all(|p| p.is_white()));
        assert_eq!(pix.count_black(), 0);
    }

    #[test]
    fn test_zero_width() {
        let pix = PixelImage::new(0, 5).unwrap();
        assert_eq!(pix.width(), 0);
        assert_eq!(pix.get_pixel(0, 0), None);
    }

    #[test]
    fn test_xy_addressing() {
        let mut pix = PixelImage::new(3, 2).unwrap();
        pix.set_pixel(2, 1, Rgb::BLACK).unwrap();
        assert!(pix.is_black(2, 1));
        assert!(!pix.is_black(1, 2));
        assert_eq!(pix.to_ascii(), vec!["...", "..#"]);
        assert!(pix.set_pixel(3, 0, Rgb::BLACK).is_err());
    }

    #[test]
    fn test_ascii_gray() {
        let pix = PixelImage::from_ascii(&["#x."]).unwrap();
        assert_eq!(pix.get_pixel(1, 0), Some(ASCII_GRAY));
        assert!(!pix.is_black(1, 0));
        assert!(!pix.is_white(1, 0));
        assert_eq!(pix.to_ascii(), vec!["#+."]);
    }

    #[test]
    fn test_from_vec_mismatch() {
        let err = PixelImage::from_vec(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
