//! Black block analysis
//!
//! A block is a maximal set of pure black pixels connected under the
//! configured connectivity (8-way by default). Pixels that are neither
//! pure black nor pure white separate blocks when counting, but erasure
//! only stops at white, so it whitens them too.

use crate::fill::{erase_component, mark_block};
use crate::options::{CropMode, RegionOptions};
use gridsearch_core::{PixelImage, VisitedMask};

/// Counts and erases black blocks of a mutably borrowed image.
#[derive(Debug)]
pub struct RegionAnalyzer<'a> {
    pix: &'a mut PixelImage,
    options: RegionOptions,
}

impl<'a> RegionAnalyzer<'a> {
    /// Create an analyzer with default options (8-way connectivity).
    pub fn new(pix: &'a mut PixelImage) -> Self {
        Self::with_options(pix, RegionOptions::default())
    }

    /// Create an analyzer with the given options.
    pub fn with_options(pix: &'a mut PixelImage, options: RegionOptions) -> Self {
        Self { pix, options }
    }

    /// The image in its current state
    pub fn image(&self) -> &PixelImage {
        &*self.pix
    }

    pub fn options(&self) -> &RegionOptions {
        &self.options
    }

    /// Count the black blocks in the image.
    ///
    /// Uses a fresh visited mask; the image is not modified. Returns 0 for
    /// an image with zero width.
    pub fn count_connected_blocks(&self) -> usize {
        let (width, height) = (self.pix.width(), self.pix.height());
        if width == 0 {
            return 0;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("count_connected_blocks", width, height);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut visited = VisitedMask::new(height as usize, width as usize);
        let mut count = 0;
        for x in 0..width {
            for y in 0..height {
                if mark_block(&*self.pix, &mut visited, x, y, self.options.connectivity) > 0 {
                    count += 1;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(count, "blocks counted");

        count
    }

    /// Erase the block containing `(x, y)`.
    ///
    /// Out-of-bounds or white seeds leave the image unchanged. Otherwise
    /// every pixel reachable from the seed without crossing white is
    /// turned white. Returns the image.
    pub fn delete(&mut self, x: u32, y: u32) -> &PixelImage {
        self.erase_block(x, y);
        &*self.pix
    }

    /// Erase the block containing `(x, y)` and return how many pixels
    /// changed.
    pub fn erase_block(&mut self, x: u32, y: u32) -> usize {
        let erased = erase_component(&mut *self.pix, x, y, self.options.connectivity);

        #[cfg(feature = "tracing")]
        tracing::trace!(x, y, erased, "erase_block");

        erased
    }

    /// Erase the black blocks lying outside a crop rectangle.
    ///
    /// Every black pixel in the outside region selected by
    /// [`RegionOptions::crop_mode`] has its whole block erased, as by
    /// [`delete`](Self::delete); a block that reaches into the rectangle
    /// is erased there too. Returns `None` for an image with zero width,
    /// otherwise the image.
    pub fn crop(
        &mut self,
        x_start: u32,
        x_end: u32,
        y_start: u32,
        y_end: u32,
    ) -> Option<&PixelImage> {
        let (width, height) = (self.pix.width(), self.pix.height());
        if width == 0 {
            return None;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("crop", x_start, x_end, y_start, y_end);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match self.options.crop_mode {
            CropMode::CornerRegions => {
                for x in 0..y_start.min(width) {
                    for y in 0..x_start.min(height) {
                        self.erase_if_black(x, y);
                    }
                }
                for x in y_end.saturating_add(1)..width {
                    for y in x_end.saturating_add(1)..height {
                        self.erase_if_black(x, y);
                    }
                }
            }
            CropMode::Complement => {
                for x in 0..width {
                    for y in 0..height {
                        let inside =
                            (x_start..=x_end).contains(&x) && (y_start..=y_end).contains(&y);
                        if !inside {
                            self.erase_if_black(x, y);
                        }
                    }
                }
            }
        }

        Some(&*self.pix)
    }

    fn erase_if_black(&mut self, x: u32, y: u32) {
        if self.pix.is_black(x, y) {
            self.erase_block(x, y);
        }
    }
}
