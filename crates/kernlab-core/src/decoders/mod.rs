//! Image decoders
//!
//! PNG is the only supported container; every color type is normalised to
//! 8-bit RGBA on the way in.

mod png;


use std::path::Path;

use crate::models::RgbaImage;

pub use self::png::decode_png;

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => decode_png(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}
