use std::path::Path;

use image::{ImageError, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Read and decode a sheet into RGBA8. A missing file and an undecodable one
/// both surface as `Error::ImageLoad`.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|e| Error::image_load(path, ImageError::IoError(e)))?;
    let img = decode_sheet(&bytes, path)?;
    info!("Loaded {:?}: {}x{}", path, img.width(), img.height());
    Ok(img)
}

/// Decode an in-memory image, guessing the container from its magic bytes.
/// `origin` is only used for error reporting.
pub fn decode_sheet(bytes: &[u8], origin: &Path) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::image_load(origin, e))?;
    Ok(img.into_rgba8())
}
