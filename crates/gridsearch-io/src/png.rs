//! PNG image format support

use crate::{IoError, IoResult};
use gridsearch_core::{PixelImage, Rgb};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Grayscale, gray+alpha, RGB, RGBA and palette images at any bit depth
/// are converted to RGB. Alpha is dropped; 16-bit samples keep their high
/// byte.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let width = reader.info().width;
    let height = reader.info().height;
    let (color_type, bit_depth) = reader.output_color_type();
    let palette: Option<Vec<u8>> = reader.info().palette.as_ref().map(|p| p.to_vec());

    if color_type == ColorType::Indexed && palette.is_none() {
        return Err(IoError::InvalidData(
            "indexed PNG without a palette".to_string(),
        ));
    }

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let bits = bit_depth as usize;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width as usize {
            let pixel = match color_type {
                ColorType::Grayscale => Rgb::gray(scale_to_u8(sample(row, x, bits), bits)),
                ColorType::GrayscaleAlpha => Rgb::gray(byte_sample(row, x * 2, bit_depth)),
                ColorType::Rgb => Rgb::new(
                    byte_sample(row, x * 3, bit_depth),
                    byte_sample(row, x * 3 + 1, bit_depth),
                    byte_sample(row, x * 3 + 2, bit_depth),
                ),
                ColorType::Rgba => Rgb::new(
                    byte_sample(row, x * 4, bit_depth),
                    byte_sample(row, x * 4 + 1, bit_depth),
                    byte_sample(row, x * 4 + 2, bit_depth),
                ),
                ColorType::Indexed => {
                    let index = sample(row, x, bits) as usize;
                    let entry = palette
                        .as_deref()
                        .and_then(|p| p.get(index * 3..index * 3 + 3))
                        .ok_or_else(|| {
                            IoError::InvalidData(format!("palette index {} out of range", index))
                        })?;
                    Rgb::new(entry[0], entry[1], entry[2])
                }
            };
            pixels.push(pixel);
        }
    }

    Ok(PixelImage::from_vec(width, height, pixels)?)
}

/// Sample `x` of a packed row at `bits` per sample (1, 2, 4, 8 or 16).
fn sample(row: &[u8], x: usize, bits: usize) -> u16 {
    match bits {
        16 => ((row[x * 2] as u16) << 8) | row[x * 2 + 1] as u16,
        8 => row[x] as u16,
        _ => {
            let per_byte = 8 / bits;
            let byte = row[x / per_byte];
            let shift = 8 - bits * (x % per_byte + 1);
            ((byte >> shift) as u16) & ((1 << bits) - 1)
        }
    }
}

/// Scale a grayscale sample to the 0..=255 range.
fn scale_to_u8(value: u16, bits: usize) -> u8 {
    match bits {
        16 => (value >> 8) as u8,
        8 => value as u8,
        _ => (value as u32 * 255 / ((1u32 << bits) - 1)) as u8,
    }
}

/// Channel `i` of an 8- or 16-bit interleaved row, as a byte.
fn byte_sample(row: &[u8], i: usize, bit_depth: BitDepth) -> u8 {
    if bit_depth == BitDepth::Sixteen {
        row[i * 2]
    } else {
        row[i]
    }
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(pix: &PixelImage, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();
    if width == 0 || height == 0 {
        return Err(IoError::EncodeError(format!(
            "PNG cannot encode an empty {}x{} image",
            width, height
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(pix.data().len() * 3);
    for p in pix.data() {
        data.extend_from_slice(&[p.r, p.g, p.b]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
