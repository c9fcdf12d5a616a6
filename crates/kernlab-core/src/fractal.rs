//! Mandelbrot renderer
//!
//! Coordinate kernel: each output pixel maps to a point of the complex plane
//! and is colored by how many iterations it takes to escape. Points that never
//! escape are opaque black; escaping points ramp red -> green -> blue across
//! the three thirds of the iteration budget.

use serde::{Deserialize, Serialize};

use crate::dispatch::{self, CoordKernel};
use crate::error::KernelError;
use crate::models::{Rgba8, RgbaImage};

/// Floating point width used for the iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    #[default]
    Single,
    Double,
}

/// Viewport and iteration budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MandelbrotParams {
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub lower_bound_x: f32,
    pub lower_bound_y: f32,
    pub scale_factor: f32,
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            width: 1024,
            height: 1024,
            lower_bound_x: -2.0,
            lower_bound_y: -2.0,
            scale_factor: 4.0,
        }
    }
}

impl MandelbrotParams {
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.width == 0 || self.height == 0 {
            return Err(KernelError::invalid(
                "mandelbrot",
                format!("image size must be non-zero, got {}x{}", self.width, self.height),
            ));
        }
        if self.max_iterations < 3 {
            return Err(KernelError::invalid(
                "mandelbrot",
                "max_iterations must be at least 3",
            ));
        }
        Ok(())
    }

    fn point(&self, x: u32, y: u32) -> (f32, f32) {
        (
            self.lower_bound_x + (x as f32 / self.width as f32) * self.scale_factor,
            self.lower_bound_y + (y as f32 / self.height as f32) * self.scale_factor,
        )
    }

    /// Map an iteration count to a color
    ///
    /// The ramp is evaluated at the same width as the iteration, with the
    /// third of the budget always computed in single precision.
    fn color(&self, iter: u32, precision: Precision) -> Rgba8 {
        let max = self.max_iterations;
        if iter >= max {
            return Rgba8::BLACK;
        }
        let section = if iter <= max / 3 {
            0
        } else if iter <= (max / 3) * 2 {
            1
        } else {
            2
        };
        let mi3 = max as f32 / 3.0;
        let (up, down) = match precision {
            Precision::Single => ramp_f32(iter, mi3, section),
            Precision::Double => ramp_f64(iter, mi3 as f64, section),
        };
        match section {
            0 => Rgba8::opaque(up, 0, 0),
            1 => Rgba8::opaque(down, up, 0),
            _ => Rgba8::opaque(0, down, up),
        }
    }
}

/// Rising and falling channel values within one third of the budget
fn ramp_f32(iter: u32, mi3: f32, section: u32) -> (u8, u8) {
    let up = 255.0 * ((iter as f32 - mi3 * section as f32) / mi3);
    (up as u8, (255.0 - up) as u8)
}

fn ramp_f64(iter: u32, mi3: f64, section: u32) -> (u8, u8) {
    let up = 255.0 * ((iter as f64 - mi3 * section as f64) / mi3);
    (up as u8, (255.0 - up) as u8)
}

/// Escape-time iteration count in single precision
fn iterate_f32(px: f32, py: f32, max: u32) -> u32 {
    let (mut tx, mut ty) = (0.0f32, 0.0f32);
    let (mut tx2, mut ty2) = (0.0f32, 0.0f32);
    let mut iter = 0;
    while tx2 + ty2 < 4.0 && iter < max {
        let xtemp = tx2 - ty2 + px;
        ty = 2.0 * tx * ty + py;
        tx = xtemp;
        iter += 1;
        tx2 = tx * tx;
        ty2 = ty * ty;
    }
    iter
}

/// Escape-time iteration count in double precision
fn iterate_f64(px: f64, py: f64, max: u32) -> u32 {
    let (mut tx, mut ty) = (0.0f64, 0.0f64);
    let (mut tx2, mut ty2) = (0.0f64, 0.0f64);
    let mut iter = 0;
    while tx2 + ty2 < 4.0 && iter < max {
        let xtemp = tx2 - ty2 + px;
        ty = 2.0 * tx * ty + py;
        tx = xtemp;
        iter += 1;
        tx2 = tx * tx;
        ty2 = ty * ty;
    }
    iter
}

/// Mandelbrot coordinate kernel
#[derive(Debug, Clone, Copy)]
pub struct Mandelbrot {
    params: MandelbrotParams,
    precision: Precision,
}

impl Mandelbrot {
    pub fn new(params: MandelbrotParams, precision: Precision) -> Result<Self, KernelError> {
        params.validate()?;
        Ok(Self { params, precision })
    }

    /// Iteration count for output pixel (x, y)
    pub fn iterations(&self, x: u32, y: u32) -> u32 {
        let (px, py) = self.params.point(x, y);
        match self.precision {
            Precision::Single => iterate_f32(px, py, self.params.max_iterations),
            Precision::Double => iterate_f64(px as f64, py as f64, self.params.max_iterations),
        }
    }
}

impl CoordKernel for Mandelbrot {
    fn at(&self, x: u32, y: u32) -> Rgba8 {
        self.params.color(self.iterations(x, y), self.precision)
    }
}

/// Render the full viewport
pub fn render_mandelbrot(
    params: MandelbrotParams,
    precision: Precision,
) -> Result<RgbaImage, KernelError> {
    let kernel = Mandelbrot::new(params, precision)?;
    log::debug!(
        "Rendering {}x{} mandelbrot ({:?}, {} iterations)",
        params.width,
        params.height,
        precision,
        params.max_iterations
    );
    Ok(dispatch::generate(params.width, params.height, &kernel))
}
