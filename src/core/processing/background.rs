use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::layout::Cell;
use crate::core::processing::padding::ensure_non_empty;
use crate::error::Result;

/// Channel value above which a pixel counts as background white
pub const DEFAULT_THRESHOLD: u8 = 240;

const CLEARED: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Make every pixel whose R, G and B all exceed `threshold` transparent white.
/// Returns the number of cleared pixels.
pub fn clear_background_in_place(img: &mut RgbaImage, threshold: u8) -> Result<usize> {
    ensure_non_empty(img)?;
    let mut cleared = 0usize;
    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > threshold && g > threshold && b > threshold {
            *pixel = CLEARED;
            cleared += 1;
        }
    }
    debug!(
        "Background cleared: threshold={}, pixels={}/{}",
        threshold,
        cleared,
        img.width() as usize * img.height() as usize
    );
    Ok(cleared)
}

pub fn clear_background(img: &RgbaImage, threshold: u8) -> Result<RgbaImage> {
    let mut out = img.clone();
    clear_background_in_place(&mut out, threshold)?;
    Ok(out)
}

/// Tight box around every pixel with non-zero alpha, or None if there is none.
pub fn opaque_bounds(img: &RgbaImage) -> Option<Cell> {
    let mut bounds: Option<Cell> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => Cell::new(x, y, x + 1, y + 1),
            Some(b) => Cell::new(
                b.left.min(x),
                b.top.min(y),
                b.right.max(x + 1),
                b.bottom.max(y + 1),
            ),
        });
    }
    bounds
}

/// Crop away fully transparent borders. A fully transparent image keeps its extent.
pub fn trim_transparent(img: &RgbaImage) -> Result<RgbaImage> {
    ensure_non_empty(img)?;
    match opaque_bounds(img) {
        Some(b) => {
            debug!(
                "Trimming {}x{} to ({}, {})-({}, {})",
                img.width(),
                img.height(),
                b.left,
                b.top,
                b.right,
                b.bottom
            );
            Ok(imageops::crop_imm(img, b.left, b.top, b.width(), b.height()).to_image())
        }
        None => Ok(img.clone()),
    }
}
