//! Exposure kernel

use crate::dispatch::PixelKernel;
use crate::error::KernelError;
use crate::models::Rgba8;

/// Linear exposure gain: `out = in * 255 / (255 - value)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exposure {
    gain: f32,
}

impl Exposure {
    /// `value` must be finite and below 255
    pub fn new(value: f32) -> Result<Self, KernelError> {
        if !value.is_finite() || value >= 255.0 {
            return Err(KernelError::invalid(
                "exposure",
                format!("value must be below 255, got {}", value),
            ));
        }
        Ok(Self {
            gain: 255.0 / (255.0 - value),
        })
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    fn channel(&self, v: u8) -> u8 {
        ((v as f32 * self.gain) as i32).clamp(0, 255) as u8
    }
}

impl PixelKernel for Exposure {
    fn apply(&self, input: Rgba8) -> Rgba8 {
        Rgba8::opaque(
            self.channel(input.r),
            self.channel(input.g),
            self.channel(input.b),
        )
    }
}
