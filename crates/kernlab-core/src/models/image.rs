//! Row-major RGBA image buffer

use super::Rgba8;
use crate::error::KernelError;

/// 8-bit RGBA image stored row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl RgbaImage {
    /// Image filled with a single pixel value
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Wrap an existing pixel buffer, checking that it matches the dimensions
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self, KernelError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(KernelError::DimensionMismatch {
                what: "image pixels",
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap a buffer whose length is width * height by construction
    pub(crate) fn from_generated(width: u32, height: u32, pixels: Vec<Rgba8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build from interleaved RGBA bytes
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, KernelError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(KernelError::DimensionMismatch {
                what: "RGBA bytes",
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at (x, y); panics when out of bounds
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, pixel: Rgba8) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgba8> {
        self.pixels
    }

    /// Interleaved RGBA bytes, borrowed without copying
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_checks_length() {
        let result = RgbaImage::from_pixels(2, 2, vec![Rgba8::BLACK; 3]);
        assert!(matches!(
            result,
            Err(KernelError::DimensionMismatch {
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_get_set_row_major() {
        let mut image = RgbaImage::filled(3, 2, Rgba8::BLACK);
        image.set(2, 1, Rgba8::gray(42));
        assert_eq!(image.pixels()[5], Rgba8::gray(42));
        assert_eq!(image.get(2, 1), Rgba8::gray(42));
    }

    #[test]
    fn test_bytes_round_trip() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let image = RgbaImage::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(image.get(1, 0), Rgba8::new(5, 6, 7, 8));
        assert_eq!(image.as_bytes(), &bytes);
    }
}
