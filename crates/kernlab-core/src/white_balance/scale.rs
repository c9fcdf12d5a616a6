//! Scale factors and per-pixel correction

use serde::Serialize;

use super::estimate::WhitePointEstimate;
use crate::dispatch::PixelKernel;
use crate::models::{Rgba8, CHANNEL_MAX};

/// Per-channel multipliers applied by the white balance kernel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleFactors {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ScaleFactors {
    /// Multipliers that leave every pixel unchanged
    pub const IDENTITY: ScaleFactors = ScaleFactors {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel towards the midpoint of the estimate's extremes
    ///
    /// `avg = (min + max) / 2` over the three channels, computed in floating
    /// point; each factor is `avg / channel`.
    pub fn from_estimate(estimate: &WhitePointEstimate) -> Self {
        let [r, g, b] = estimate.to_array();
        let minimum = r.min(g).min(b);
        let maximum = r.max(g).max(b);
        let avg = (minimum as f32 + maximum as f32) / 2.0;

        Self {
            r: avg / r as f32,
            g: avg / g as f32,
            b: avg / b as f32,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Correct one pixel: scale, clamp to 255, truncate, force opaque alpha
    pub fn correct(&self, input: Rgba8) -> Rgba8 {
        let [r, g, b] = input.rgb_f32();
        Rgba8::opaque(
            scale_channel(r, self.r),
            scale_channel(g, self.g),
            scale_channel(b, self.b),
        )
    }
}

impl PixelKernel for ScaleFactors {
    fn apply(&self, input: Rgba8) -> Rgba8 {
        self.correct(input)
    }
}

fn scale_channel(value: f32, factor: f32) -> u8 {
    (value * factor).min(CHANNEL_MAX as f32) as u8
}
