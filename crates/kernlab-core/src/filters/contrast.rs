//! Brightness/contrast kernel

use crate::dispatch::PixelKernel;
use crate::error::KernelError;
use crate::models::Rgba8;

/// Largest accepted `|value|`; beyond it `2^(value / 100)` saturates every channel
pub const CONTRAST_LIMIT: f32 = 400.0;

/// Contrast stretch around mid-gray
///
/// `out = in * m + c` with `m = 2^(value / 100)` and `c = 127 - 127 m`, so
/// intensity 127 is a fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast {
    multiplier: f32,
    offset: f32,
}

impl Contrast {
    pub fn new(value: f32) -> Result<Self, KernelError> {
        if !value.is_finite() {
            return Err(KernelError::invalid("contrast", "value must be finite"));
        }
        if value.abs() > CONTRAST_LIMIT {
            return Err(KernelError::invalid(
                "contrast",
                format!(
                    "value {} outside [-{}, {}]",
                    value, CONTRAST_LIMIT, CONTRAST_LIMIT
                ),
            ));
        }
        let multiplier = 2f32.powf(value / 100.0);
        Ok(Self {
            multiplier,
            offset: 127.0 - multiplier * 127.0,
        })
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    fn channel(&self, v: u8) -> u8 {
        (v as f32 * self.multiplier + self.offset).clamp(0.0, 255.0) as u8
    }
}

impl PixelKernel for Contrast {
    fn apply(&self, input: Rgba8) -> Rgba8 {
        Rgba8::opaque(
            self.channel(input.r),
            self.channel(input.g),
            self.channel(input.b),
        )
    }
}
