//! Flood fill over pixel images
//!
//! Both fills use an explicit stack instead of recursion, so the size of a
//! block is not limited by the call stack. The set of pixels reached is
//! the same as a recursive depth-first fill.

use gridsearch_core::{ConnectivityType, PixelImage, Rgb, VisitedMask};

/// Step from `(x, y)` by `(dx, dy)`, staying inside a `width` x `height` image.
#[inline]
fn step(x: u32, y: u32, dx: isize, dy: isize, width: u32, height: u32) -> Option<(u32, u32)> {
    let nx = x.checked_add_signed(dx as i32)?;
    let ny = y.checked_add_signed(dy as i32)?;
    (nx < width && ny < height).then_some((nx, ny))
}

/// Mark every black pixel connected to the black pixel `(x, y)`.
///
/// The image is not modified. Pixels already marked in `visited` are
/// treated as claimed and not entered. Returns the number of pixels
/// newly marked; 0 if the seed is not an unmarked black pixel.
pub fn mark_block(
    pix: &PixelImage,
    visited: &mut VisitedMask,
    x: u32,
    y: u32,
    connectivity: ConnectivityType,
) -> usize {
    if !pix.is_black(x, y) || visited.is_set(y as usize, x as usize) {
        return 0;
    }

    let (width, height) = (pix.width(), pix.height());
    let mut marked = 0;
    let mut stack = vec![(x, y)];
    visited.set(y as usize, x as usize);

    while let Some((x, y)) = stack.pop() {
        marked += 1;
        for &(dx, dy) in connectivity.offsets() {
            if let Some((nx, ny)) = step(x, y, dx, dy, width, height)
                && pix.is_black(nx, ny)
                && !visited.is_set(ny as usize, nx as usize)
            {
                visited.set(ny as usize, nx as usize);
                stack.push((nx, ny));
            }
        }
    }

    marked
}

/// Turn every pixel connected to `(x, y)` white.
///
/// The fill stops only at white pixels and the image border: black
/// pixels and pixels of any other color are whitened and passed through.
/// Returns the number of pixels changed; 0 if the seed is out of bounds
/// or already white.
pub fn erase_component(
    pix: &mut PixelImage,
    x: u32,
    y: u32,
    connectivity: ConnectivityType,
) -> usize {
    if !is_erasable(pix, x, y) {
        return 0;
    }

    let (width, height) = (pix.width(), pix.height());
    let mut erased = 0;
    let mut stack = vec![(x, y)];

    while let Some((x, y)) = stack.pop() {
        // A pixel can be pushed by several neighbors before it is erased
        if !is_erasable(pix, x, y) {
            continue;
        }
        if pix.set_pixel(x, y, Rgb::WHITE).is_err() {
            continue;
        }
        erased += 1;
        for &(dx, dy) in connectivity.offsets() {
            if let Some((nx, ny)) = step(x, y, dx, dy, width, height)
                && is_erasable(pix, nx, ny)
            {
                stack.push((nx, ny));
            }
        }
    }

    erased
}

#[inline]
fn is_erasable(pix: &PixelImage, x: u32, y: u32) -> bool {
    pix.get_pixel(x, y).is_some_and(|p| !p.is_white())
}
