//! Image exporters
//!
//! Writes images as 8-bit RGBA PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::RgbaImage;

/// Export an image to an 8-bit RGBA PNG file
pub fn export_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), String> {
    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    encode_png(image, BufWriter::new(file))
}

/// Encode an image as PNG into any writer
pub(crate) fn encode_png<W: Write>(image: &RgbaImage, writer: W) -> Result<(), String> {
    if image.is_empty() {
        return Err("Cannot export an empty image".to_string());
    }

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    writer
        .write_image_data(image.as_bytes())
        .map_err(|e| format!("Failed to write PNG image: {}", e))?;
    writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG file: {}", e))?;

    log::debug!("Exported {}x{} PNG", image.width(), image.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_image;
    use crate::models::Rgba8;

    #[test]
    fn test_export_then_decode_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut image = RgbaImage::filled(5, 3, Rgba8::new(10, 20, 30, 40));
        image.set(4, 2, Rgba8::opaque(255, 0, 128));

        export_png(&image, &path).unwrap();
        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = export_png(&RgbaImage::filled(1, 1, Rgba8::BLACK), path).unwrap_err();
        assert!(err.contains("Failed to create PNG file"));
    }
}
