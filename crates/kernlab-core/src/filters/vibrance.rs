//! Vibrance kernel
//!
//! Saturation boost weighted by how red-dominant a pixel already is: pixels
//! whose red exceeds green and blue get the full boost, others less.

use crate::dispatch::PixelKernel;
use crate::error::KernelError;
use crate::models::Rgba8;

const LUMA_R: f32 = 0.2999;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vibrance {
    vib: f32,
}

impl Vibrance {
    /// `value` is a percentage; 0 leaves pixels unchanged
    pub fn new(value: f32) -> Result<Self, KernelError> {
        if !value.is_finite() {
            return Err(KernelError::invalid("vibrance", "value must be finite"));
        }
        Ok(Self { vib: value / 100.0 })
    }
}

impl PixelKernel for Vibrance {
    fn apply(&self, input: Rgba8) -> Rgba8 {
        let r = input.r as i32;
        let g = input.g as i32;
        let b = input.b as i32;

        let red = (r - g.max(b)) as f32 * (1.0 / 256.0);
        let s = self.vib / (1.0 + (-red * 3.0).exp()) + 1.0;
        let ms = 1.0 - s;
        let rt = LUMA_R * ms;
        let gt = LUMA_G * ms;
        let bt = LUMA_B * ms;

        let (rf, gf, bf) = (r as f32, g as f32, b as f32);
        let rc = rf * (rt + s) + gf * gt + bf * bt;
        let gc = rf * rt + gf * (gt + s) + bf * bt;
        let bc = rf * rt + gf * gt + bf * (bt + s);

        Rgba8::opaque(
            (rc as i32).clamp(0, 255) as u8,
            (gc as i32).clamp(0, 255) as u8,
            (bc as i32).clamp(0, 255) as u8,
        )
    }
}
