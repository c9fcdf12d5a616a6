//! Auto white balance
//!
//! Two-phase correction for 8-bit RGBA images:
//! 1. Analyze: histogram -> [`WhitePointEstimate`] -> [`ScaleFactors`]
//!    (single-threaded, once per pass)
//! 2. Apply: the scale factors are shared read-only by a per-pixel kernel
//!    dispatched over the whole image
//!
//! # Modules
//! - `histogram`: per-channel 256-bucket histograms and image scanning
//! - `estimate`: percentile-band white point estimation
//! - `scale`: scale factor derivation and the per-pixel corrector

mod estimate;
mod histogram;
mod scale;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::dispatch;
use crate::models::RgbaImage;

pub use estimate::{estimate_white_point, WhitePointEstimate};
pub use histogram::{
    ChannelExtent, Histogram, HistogramSummary, FIRST_USED_BIN, HISTOGRAM_BINS, LAST_USED_BIN,
};
pub use scale::ScaleFactors;

/// State prepared by the analysis phase of one correction pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhiteBalancePass {
    pub estimate: WhitePointEstimate,
    pub scale: ScaleFactors,
}

impl WhiteBalancePass {
    /// Estimate the white point and derive scale factors from a histogram
    pub fn analyze(histogram: &Histogram) -> Self {
        let estimate = estimate_white_point(histogram);
        let scale = ScaleFactors::from_estimate(&estimate);
        log::debug!(
            "White balance estimate {:?} -> scale [{:.4}, {:.4}, {:.4}]",
            estimate.to_array(),
            scale.r,
            scale.g,
            scale.b
        );
        Self { estimate, scale }
    }

    /// Correct every pixel of `image` in place
    pub fn apply(&self, image: &mut RgbaImage) {
        dispatch::map_in_place(image, &self.scale);
    }
}

/// Scan `image`, analyze its histogram and correct it in place
///
/// Returns the pass that was applied.
pub fn auto_white_balance(image: &mut RgbaImage) -> WhiteBalancePass {
    let histogram = Histogram::from_image(image);
    let pass = WhiteBalancePass::analyze(&histogram);
    pass.apply(image);
    pass
}
