//! Per-pixel image filters
//!
//! Each filter is prepared once from its user-facing parameter (the "prepare"
//! step) into an immutable kernel value, then dispatched over every pixel.
//!
//! # Modules
//! - `contrast`: brightness/contrast around mid-gray
//! - `exposure`: linear exposure gain
//! - `vibrance`: red-weighted saturation boost
//! - `mirror`: left-right mirror (coordinate kernel)
//! - `blend`: alpha premultiply

mod blend;
mod contrast;
mod exposure;
mod mirror;
mod vibrance;

#[cfg(test)]
mod tests;

pub use blend::AlphaBlend;
pub use contrast::{Contrast, CONTRAST_LIMIT};
pub use exposure::Exposure;
pub use mirror::{mirror, Mirror};
pub use vibrance::Vibrance;

use crate::dispatch;
use crate::models::RgbaImage;

/// A prepared filter ready to run over an image
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Contrast(Contrast),
    Exposure(Exposure),
    Vibrance(Vibrance),
    AlphaBlend(AlphaBlend),
    Mirror,
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Contrast(_) => "contrast",
            Filter::Exposure(_) => "exposure",
            Filter::Vibrance(_) => "vibrance",
            Filter::AlphaBlend(_) => "alpha",
            Filter::Mirror => "mirror",
        }
    }

    /// Run the filter over `input`, producing a new image
    pub fn run(&self, input: &RgbaImage) -> RgbaImage {
        log::debug!(
            "Running {} over {}x{} image",
            self.name(),
            input.width(),
            input.height()
        );
        match self {
            Filter::Contrast(k) => dispatch::map_image(input, k),
            Filter::Exposure(k) => dispatch::map_image(input, k),
            Filter::Vibrance(k) => dispatch::map_image(input, k),
            Filter::AlphaBlend(k) => dispatch::map_image(input, k),
            Filter::Mirror => mirror(input),
        }
    }
}
