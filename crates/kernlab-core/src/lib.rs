//! Kernlab Core Library
//!
//! Data-parallel image kernels: histogram-driven auto white balance, per-pixel
//! filters, a Mandelbrot renderer and a self-checking multi-input harness.

pub mod config;
pub mod decoders;
pub mod dispatch;
pub mod error;
pub mod exporters;
pub mod filters;
pub mod fractal;
pub mod harness;
pub mod models;
pub mod white_balance;

// Re-export commonly used types
pub use error::KernelError;
pub use filters::Filter;
pub use fractal::{render_mandelbrot, MandelbrotParams, Precision};
pub use harness::{MultiInputHarness, TestOutcome};
pub use models::{Rgba8, RgbaImage};
pub use white_balance::{
    auto_white_balance, estimate_white_point, Histogram, ScaleFactors, WhiteBalancePass,
    WhitePointEstimate,
};
