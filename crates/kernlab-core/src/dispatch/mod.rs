//! Kernel dispatch
//!
//! A kernel is a pure function evaluated once per output element. This module
//! is the parallel-map side of that contract: it owns iteration and threading,
//! kernels only see one element (and optionally its coordinates) at a time.
//!
//! Two kernel shapes exist:
//! - [`PixelKernel`]: maps an input pixel to an output pixel
//! - [`CoordKernel`]: produces the output pixel at (x, y), possibly reading
//!   other pixels of a source image
//!
//! All dispatch functions return after every invocation completed.

mod parallel;

pub use parallel::{parallel_fold_reduce, parallel_for_each_mut, parallel_map_indexed};

use crate::models::{Rgba8, RgbaImage};

/// Minimum number of elements to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Per-pixel kernel over a single input pixel
pub trait PixelKernel: Sync {
    fn apply(&self, input: Rgba8) -> Rgba8;
}

/// Per-pixel kernel addressed by output coordinates
pub trait CoordKernel: Sync {
    fn at(&self, x: u32, y: u32) -> Rgba8;
}

impl<F> PixelKernel for F
where
    F: Fn(Rgba8) -> Rgba8 + Sync,
{
    fn apply(&self, input: Rgba8) -> Rgba8 {
        self(input)
    }
}

/// Run a pixel kernel over every pixel of `image`, writing results in place
pub fn map_in_place<K: PixelKernel + ?Sized>(image: &mut RgbaImage, kernel: &K) {
    parallel_for_each_mut(image.pixels_mut(), |pixel| {
        *pixel = kernel.apply(*pixel);
    });
}

/// Run a pixel kernel over `input`, producing a new image
pub fn map_image<K: PixelKernel + ?Sized>(input: &RgbaImage, kernel: &K) -> RgbaImage {
    let mut output = input.clone();
    map_in_place(&mut output, kernel);
    output
}

/// Evaluate a coordinate kernel for every (x, y) of a `width` x `height` output
pub fn generate<K: CoordKernel + ?Sized>(width: u32, height: u32, kernel: &K) -> RgbaImage {
    let w = width as usize;
    let pixels = parallel_map_indexed(w * height as usize, |i| {
        kernel.at((i % w) as u32, (i / w) as u32)
    });
    RgbaImage::from_generated(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Checker;

    impl CoordKernel for Checker {
        fn at(&self, x: u32, y: u32) -> Rgba8 {
            if (x + y) % 2 == 0 {
                Rgba8::gray(255)
            } else {
                Rgba8::BLACK
            }
        }
    }

    #[test]
    fn test_map_in_place_with_closure() {
        let mut image = RgbaImage::filled(4, 4, Rgba8::new(10, 20, 30, 0));
        map_in_place(&mut image, &|p: Rgba8| Rgba8::opaque(p.b, p.g, p.r));
        assert!(image.pixels().iter().all(|&p| p == Rgba8::opaque(30, 20, 10)));
    }

    #[test]
    fn test_map_image_leaves_input_untouched() {
        let input = RgbaImage::filled(2, 2, Rgba8::gray(5));
        let output = map_image(&input, &|_: Rgba8| Rgba8::BLACK);
        assert_eq!(input.get(0, 0), Rgba8::gray(5));
        assert_eq!(output.get(1, 1), Rgba8::BLACK);
    }

    #[test]
    fn test_generate_uses_row_major_coordinates() {
        let image = generate(3, 2, &Checker);
        assert_eq!(image.get(0, 0), Rgba8::gray(255));
        assert_eq!(image.get(1, 0), Rgba8::BLACK);
        assert_eq!(image.get(0, 1), Rgba8::BLACK);
        assert_eq!(image.get(2, 1), Rgba8::BLACK);
        assert_eq!(image.get(1, 1), Rgba8::gray(255));
    }

    #[test]
    fn test_generate_large_parallel_path() {
        let image = generate(300, 200, &Checker);
        assert_eq!(image.len(), 60_000);
        assert_eq!(image.get(299, 199), Rgba8::gray(255));
        assert_eq!(image.get(298, 199), Rgba8::BLACK);
    }
}
