//! Horizontal mirror kernel

use crate::dispatch::{self, CoordKernel};
use crate::models::{Rgba8, RgbaImage};

/// Reads the source pixel mirrored around the vertical center line
pub struct Mirror<'a> {
    source: &'a RgbaImage,
}

impl<'a> Mirror<'a> {
    pub fn new(source: &'a RgbaImage) -> Self {
        Self { source }
    }
}

impl CoordKernel for Mirror<'_> {
    fn at(&self, x: u32, y: u32) -> Rgba8 {
        self.source.get(self.source.width() - x - 1, y)
    }
}

/// Mirror `image` left to right
pub fn mirror(image: &RgbaImage) -> RgbaImage {
    dispatch::generate(image.width(), image.height(), &Mirror::new(image))
}
