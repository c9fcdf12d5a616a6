//! PNG decoder

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use crate::models::{Rgba8, RgbaImage};

/// Decode a PNG file into 8-bit RGBA
pub fn decode_png<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    decode_png_reader(BufReader::new(file))
}

/// Decode PNG data from any seekable reader
pub(crate) fn decode_png_reader<R: BufRead + Seek>(reader: R) -> Result<RgbaImage, String> {
    let mut decoder = png::Decoder::new(reader);
    // Palette and low bit depths expand to 8 bits, 16-bit samples drop their low byte
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;
    let bytes = &buf[..frame_info.buffer_size()];

    let (width, height) = (frame_info.width, frame_info.height);
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != png::BitDepth::Eight {
        return Err(format!(
            "Unsupported PNG bit depth after expansion: {:?}",
            bit_depth
        ));
    }

    let pixels = match color_type {
        png::ColorType::Grayscale => expand(bytes, 1, |c| Rgba8::gray(c[0])),
        png::ColorType::GrayscaleAlpha => expand(bytes, 2, |c| Rgba8::new(c[0], c[0], c[0], c[1])),
        png::ColorType::Rgb => expand(bytes, 3, |c| Rgba8::opaque(c[0], c[1], c[2])),
        png::ColorType::Rgba => expand(bytes, 4, |c| Rgba8::new(c[0], c[1], c[2], c[3])),
        png::ColorType::Indexed => {
            return Err("Indexed PNG was not expanded to RGB".to_string());
        }
    };

    RgbaImage::from_pixels(width, height, pixels)
        .map_err(|e| format!("PNG buffer size mismatch: {}", e))
}

fn expand(bytes: &[u8], channels: usize, to_pixel: impl Fn(&[u8]) -> Rgba8) -> Vec<Rgba8> {
    let mut pixels = Vec::with_capacity(bytes.len() / channels);
    pixels.extend(bytes.chunks_exact(channels).map(to_pixel));
    pixels
}
