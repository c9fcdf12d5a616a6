//! Data models for kernlab
//!
//! Pixel and image buffer types shared by every kernel. An [`RgbaImage`] plays
//! the role of a 2D allocation: a row-major grid of [`Rgba8`] pixels that
//! kernels read from and write into.

mod image;

pub use image::RgbaImage;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Maximum value of an 8-bit channel
pub const CHANNEL_MAX: u8 = 255;

/// 8-bit RGBA pixel
///
/// Laid out as four consecutive bytes so pixel buffers can be viewed as raw
/// byte slices for encoding.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, CHANNEL_MAX);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel from RGB components
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, CHANNEL_MAX)
    }

    /// Gray pixel with the same value on all color channels
    pub const fn gray(value: u8) -> Self {
        Self::opaque(value, value, value)
    }

    /// Color channels as an array, alpha excluded
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Color channels promoted to f32
    pub fn rgb_f32(&self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}
