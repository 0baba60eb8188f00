use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

use crate::error::{Error, Result};

/// Write an RGBA PNG, creating missing parent directories.
pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    encode_into(writer, img).map_err(|source| Error::ImageWrite {
        path: output.to_path_buf(),
        source,
    })
}

/// Encode to PNG bytes in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_into(&mut buf, img).map_err(|e| Error::Processing(format!("PNG encode: {e}")))?;
    Ok(buf)
}

fn encode_into<W: std::io::Write>(
    writer: W,
    img: &RgbaImage,
) -> std::result::Result<(), ImageError> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn encoded_png_keeps_alpha() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(1, 1, Rgba([10, 20, 30, 40]));
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let back = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(back, img);
    }
}
