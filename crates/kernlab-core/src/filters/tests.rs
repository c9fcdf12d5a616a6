//! Tests for per-pixel filters

use super::*;
use crate::dispatch::PixelKernel;
use crate::models::Rgba8;

#[test]
fn test_contrast_zero_is_identity() {
    let k = Contrast::new(0.0).unwrap();
    assert_eq!(k.multiplier(), 1.0);
    assert_eq!(k.offset(), 0.0);
    assert_eq!(k.apply(Rgba8::new(10, 127, 250, 0)), Rgba8::opaque(10, 127, 250));
}

#[test]
fn test_contrast_doubles_around_midpoint() {
    // value 100 -> m = 2, c = -127
    let k = Contrast::new(100.0).unwrap();
    assert_eq!(k.apply(Rgba8::opaque(150, 100, 200)), Rgba8::opaque(173, 73, 255));
    assert_eq!(k.apply(Rgba8::opaque(10, 60, 191)), Rgba8::opaque(0, 0, 255));
}

#[test]
fn test_contrast_rejects_nan() {
    assert!(Contrast::new(f32::NAN).is_err());
}

#[test]
fn test_contrast_rejects_out_of_range() {
    assert!(Contrast::new(CONTRAST_LIMIT).is_ok());
    assert!(Contrast::new(-CONTRAST_LIMIT).is_ok());

    let err = Contrast::new(1.0e6).unwrap_err();
    assert!(matches!(
        err,
        crate::error::KernelError::InvalidParameter {
            kernel: "contrast",
            ..
        }
    ));
    assert!(Contrast::new(-401.0).is_err());
}

#[test]
fn test_exposure_gain() {
    let k = Exposure::new(127.5).unwrap();
    assert!((k.gain() - 2.0).abs() < 1e-6);
    assert_eq!(k.apply(Rgba8::new(10, 100, 200, 0)), Rgba8::opaque(20, 200, 255));
}

#[test]
fn test_exposure_rejects_full_scale() {
    let err = Exposure::new(255.0).unwrap_err();
    assert!(err.to_string().contains("exposure"));
    assert!(Exposure::new(300.0).is_err());
    assert!(Exposure::new(-100.0).is_ok());
}

#[test]
fn test_vibrance_zero_is_identity() {
    let k = Vibrance::new(0.0).unwrap();
    for px in [
        Rgba8::opaque(0, 0, 0),
        Rgba8::opaque(200, 30, 40),
        Rgba8::opaque(12, 250, 99),
    ] {
        let out = k.apply(px);
        // S = 1 exactly, so the mix matrix is the identity up to float rounding
        for (a, b) in out.rgb().iter().zip(px.rgb().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{:?} -> {:?}", px, out);
        }
        assert_eq!(out.a, 255);
    }
}

#[test]
fn test_vibrance_keeps_gray_and_saturates_color() {
    let k = Vibrance::new(100.0).unwrap();

    let gray = k.apply(Rgba8::opaque(100, 100, 100));
    for v in gray.rgb() {
        assert!((v as i32 - 100).abs() <= 1);
    }

    let red = k.apply(Rgba8::opaque(200, 50, 50));
    assert!(red.r > 200, "red should be pushed up: {:?}", red);
    assert!(red.g < 50, "green should be pushed down: {:?}", red);
}

#[test]
fn test_alpha_blend_premultiplies() {
    let k = AlphaBlend::new(128);
    assert_eq!(k.apply(Rgba8::new(255, 100, 1, 255)), Rgba8::new(127, 50, 0, 128));
    assert_eq!(AlphaBlend::new(0).apply(Rgba8::gray(255)), Rgba8::new(0, 0, 0, 0));
}

#[test]
fn test_mirror_reverses_rows() {
    let mut image = RgbaImage::filled(3, 2, Rgba8::BLACK);
    for x in 0..3 {
        for y in 0..2 {
            image.set(x, y, Rgba8::opaque(x as u8, y as u8, 0));
        }
    }

    let mirrored = mirror(&image);

    for x in 0..3 {
        for y in 0..2 {
            assert_eq!(mirrored.get(x, y), image.get(2 - x, y));
        }
    }
    assert_eq!(mirror(&mirrored), image);
}

#[test]
fn test_filter_run_dispatches() {
    let image = RgbaImage::filled(4, 4, Rgba8::new(100, 100, 100, 9));

    let out = Filter::AlphaBlend(AlphaBlend::new(255)).run(&image);
    assert_eq!(out.get(0, 0), Rgba8::new(99, 99, 99, 255));

    let out = Filter::Mirror.run(&image);
    assert_eq!(out, image);
    assert_eq!(Filter::Mirror.name(), "mirror");
}
