//! gridsearch-io - Image I/O for gridsearch
//!
//! Decodes and encodes [`PixelImage`]s. Supported formats are selected
//! with cargo features:
//!
//! - `png-format` (default) - PNG via the `png` crate
//! - `pnm` (default) - PBM bitmaps (P1/P4)
//!
//! # Example
//!
//! ```
//! use gridsearch_core::PixelImage;
//! use gridsearch_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let pix = PixelImage::from_ascii(&["#.", ".#"]).unwrap();
//! let bytes = write_image_mem(&pix, ImageFormat::Pbm).unwrap();
//! assert_eq!(read_image_mem(&bytes).unwrap(), pix);
//! ```

mod error;
mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use gridsearch_core::PixelImage;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Read an image from a file, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelImage> {
    let data = fs::read(path)?;
    read_image_mem(&data)
}

/// Decode an image held in memory, detecting the format from its contents.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelImage> {
    match detect_format_from_bytes(data) {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pbm => pnm::read_pbm(Cursor::new(data)),
        format => Err(IoError::UnsupportedFormat(format!(
            "cannot decode {:?} (unrecognized or feature not enabled)",
            format
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    pix: &PixelImage,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let data = write_image_mem(pix, format)?;
    fs::write(path, data)?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &PixelImage, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, &mut buffer)?,
        #[cfg(feature = "pnm")]
        ImageFormat::Pbm => pnm::write_pbm(pix, &mut buffer)?,
        format => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot encode {:?} (unknown or feature not enabled)",
                format
            )));
        }
    }
    Ok(buffer)
}
