//! Alpha blend kernel

use crate::dispatch::PixelKernel;
use crate::models::Rgba8;

/// Premultiply every component by `alpha / 256` and set alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBlend {
    alpha: u8,
}

impl AlphaBlend {
    pub fn new(alpha: u8) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    fn channel(&self, v: u8) -> u8 {
        ((v as u32 * self.alpha as u32) >> 8) as u8
    }
}

impl PixelKernel for AlphaBlend {
    fn apply(&self, input: Rgba8) -> Rgba8 {
        Rgba8::new(
            self.channel(input.r),
            self.channel(input.g),
            self.channel(input.b),
            self.alpha,
        )
    }
}
