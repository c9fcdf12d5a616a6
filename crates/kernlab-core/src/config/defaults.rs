//! Default kernel parameter values and their sanitization.

use serde::Deserialize;

use crate::filters::CONTRAST_LIMIT;
use crate::fractal::{MandelbrotParams, Precision};
use crate::harness::MAX_INDEXED_DIM;

/// Default filter parameters used when the CLI gets no `--value`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    /// Contrast strength; 0 is identity, 100 doubles around mid-gray
    pub contrast: f32,
    /// Exposure offset, must stay below 255
    pub exposure: f32,
    /// Vibrance strength in percent
    pub vibrance: f32,
    /// Alpha used by the premultiply blend
    pub alpha: u8,
}

impl FilterDefaults {
    pub(crate) fn sanitize(&mut self) {
        if !self.contrast.is_finite() {
            self.contrast = Self::default().contrast;
        }
        self.contrast = self.contrast.clamp(-CONTRAST_LIMIT, CONTRAST_LIMIT);
        if !self.exposure.is_finite() {
            self.exposure = Self::default().exposure;
        }
        self.exposure = self.exposure.clamp(-255.0, 254.0);
        if !self.vibrance.is_finite() {
            self.vibrance = Self::default().vibrance;
        }
        self.vibrance = self.vibrance.clamp(-100.0, 400.0);
    }
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            contrast: 50.0,
            exposure: 50.0,
            vibrance: 50.0,
            alpha: 128,
        }
    }
}

/// Default fractal viewport.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MandelbrotDefaults {
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub precision: Precision,
}

impl MandelbrotDefaults {
    pub(crate) fn sanitize(&mut self) {
        self.max_iterations = self.max_iterations.max(3);
        self.width = self.width.clamp(1, 16_384);
        self.height = self.height.clamp(1, 16_384);
    }

    /// Full parameter set with the default complex-plane bounds
    pub fn to_params(&self) -> MandelbrotParams {
        MandelbrotParams {
            max_iterations: self.max_iterations,
            width: self.width,
            height: self.height,
            ..MandelbrotParams::default()
        }
    }
}

impl Default for MandelbrotDefaults {
    fn default() -> Self {
        let params = MandelbrotParams::default();
        Self {
            max_iterations: params.max_iterations,
            width: params.width,
            height: params.height,
            precision: Precision::Single,
        }
    }
}

/// Default harness size, at most [`MAX_INDEXED_DIM`] elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessDefaults {
    pub dim: usize,
}

impl HarnessDefaults {
    pub(crate) fn sanitize(&mut self) {
        self.dim = self.dim.clamp(1, MAX_INDEXED_DIM);
    }
}

impl Default for HarnessDefaults {
    fn default() -> Self {
        Self { dim: 60_000 }
    }
}
