use image::{RgbaImage, imageops};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::NormalizationPolicy;

const CHANNELS: usize = 4;

pub(crate) fn ensure_non_empty(img: &RgbaImage) -> Result<()> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage { width, height });
    }
    Ok(())
}

/// Square an image using `policy`; square inputs come back as an unchanged copy.
pub fn make_square(img: &RgbaImage, policy: NormalizationPolicy) -> Result<RgbaImage> {
    ensure_non_empty(img)?;
    if img.width() == img.height() {
        return Ok(img.clone());
    }
    match policy {
        NormalizationPolicy::Crop => crop_to_square(img),
        NormalizationPolicy::Pad => pad_to_square(img),
    }
}

/// Center-crop to the shorter side. Odd leftovers go to the right/bottom.
pub fn crop_to_square(img: &RgbaImage) -> Result<RgbaImage> {
    ensure_non_empty(img)?;
    let (cols, rows) = img.dimensions();
    let min_dim = cols.min(rows);
    let left = (cols - min_dim) / 2;
    let top = (rows - min_dim) / 2;

    debug!(
        "Cropping to square: cols={}, rows={}, left={}, top={}, size={}",
        cols, rows, left, top, min_dim
    );

    Ok(imageops::crop_imm(img, left, top, min_dim, min_dim).to_image())
}

/// Center on a fully transparent canvas sized to the longer side.
pub fn pad_to_square(img: &RgbaImage) -> Result<RgbaImage> {
    ensure_non_empty(img)?;
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    let max_dim = cols.max(rows);
    let pad_cols = (max_dim - cols) / 2;
    let pad_rows = (max_dim - rows) / 2;

    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}, size={}",
        cols, rows, pad_cols, pad_rows, max_dim
    );

    let src = img.as_raw();
    let row_bytes = cols * CHANNELS;
    let mut padded = vec![0u8; max_dim * max_dim * CHANNELS];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * row_bytes;
        let dst_offset = ((row + pad_rows) * max_dim + pad_cols) * CHANNELS;
        padded[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }

    RgbaImage::from_raw(max_dim as u32, max_dim as u32, padded)
        .ok_or_else(|| Error::Processing("padded buffer does not match canvas size".to_string()))
}
