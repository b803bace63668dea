//! PBM (portable bitmap) format support
//!
//! Reads P1 (plain) and P4 (raw) bitmaps and writes P4. A set bit is a
//! black pixel, a clear bit a white one, so bitmaps map exactly onto the
//! black/white model of the region analysis.

use crate::{IoError, IoResult};
use gridsearch_core::{PixelImage, Rgb};
use std::io::{Read, Write};

/// Read a PBM image (P1 or P4) from a reader.
pub fn read_pbm<R: Read>(mut reader: R) -> IoResult<PixelImage> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut header = HeaderParser::new(&bytes);
    let magic = header.token()?;
    let width = header.number()?;
    let height = header.number()?;

    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| too_large(width, height))?;

    let mut pixels = Vec::new();
    match magic {
        b"P1" => {
            // Plain bitmaps may run digits together, so read one char at a time
            let body: Vec<u8> = header
                .rest()
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            if body.len() < count {
                return Err(IoError::InvalidData("truncated P1 data".to_string()));
            }
            pixels.reserve_exact(count);
            for &bit in &body[..count] {
                pixels.push(match bit {
                    b'1' => Rgb::BLACK,
                    b'0' => Rgb::WHITE,
                    other => {
                        return Err(IoError::InvalidData(format!(
                            "unexpected byte {:#04x} in P1 data",
                            other
                        )));
                    }
                });
            }
        }
        b"P4" => {
            // Exactly one whitespace byte separates the header from raster data
            let body = header.rest().get(1..).unwrap_or(&[]);
            let bytes_per_row = (width as usize).div_ceil(8);
            let body_len = bytes_per_row
                .checked_mul(height as usize)
                .ok_or_else(|| too_large(width, height))?;
            if body.len() < body_len {
                return Err(IoError::InvalidData("truncated P4 data".to_string()));
            }
            pixels.reserve_exact(count);
            for y in 0..height as usize {
                let row = &body[y * bytes_per_row..(y + 1) * bytes_per_row];
                for x in 0..width as usize {
                    let bit = (row[x / 8] >> (7 - x % 8)) & 1;
                    pixels.push(if bit == 1 { Rgb::BLACK } else { Rgb::WHITE });
                }
            }
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "not a PBM bitmap: {:?}",
                String::from_utf8_lossy(magic)
            )));
        }
    }

    Ok(PixelImage::from_vec(width, height, pixels)?)
}

fn too_large(width: u32, height: u32) -> IoError {
    IoError::InvalidData(format!("PBM dimensions {}x{} too large", width, height))
}

/// Write a `PixelImage` as a raw (P4) PBM.
///
/// Black pixels become set bits; every other color is written as white.
pub fn write_pbm<W: Write>(pix: &PixelImage, mut writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();
    write!(writer, "P4\n{} {}\n", width, height)?;

    let bytes_per_row = (width as usize).div_ceil(8);
    let mut row = vec![0u8; bytes_per_row];
    for y in 0..height {
        row.fill(0);
        for x in 0..width {
            if pix.is_black(x, y) {
                row[x as usize / 8] |= 1 << (7 - x % 8);
            }
        }
        writer.write_all(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Tokenizer for the whitespace/comment separated PNM header.
struct HeaderParser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderParser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while self.data.get(self.pos).is_some_and(|&c| c != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_separators();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("truncated PBM header".to_string()));
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "bad PBM header field {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    /// Bytes after the last token read
    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}
