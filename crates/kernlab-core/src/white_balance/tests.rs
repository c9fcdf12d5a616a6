//! Tests for auto white balance

use super::*;
use crate::models::Rgba8;

/// Histogram with `count` samples at every intensity in `lo..=hi`, per channel
fn uniform_histogram(ranges: [(u8, u8); 3], count: u32) -> Histogram {
    let mut hist = Histogram::default();
    for (c, &(lo, hi)) in ranges.iter().enumerate() {
        for i in lo..=hi {
            hist.add(c, i, count);
        }
    }
    hist
}

#[test]
fn test_all_zero_histogram_falls_back_to_white() {
    let estimate = estimate_white_point(&Histogram::default());
    assert_eq!(estimate, WhitePointEstimate::FALLBACK);
    assert_eq!(estimate.to_array(), [255, 255, 255]);
}

#[test]
fn test_spread_histogram_uses_percentile_band() {
    // 2540 samples per channel: band is where the mass from the top lies in (127, 508),
    // i.e. intensities 242 down to 205, mean 223.5 -> 223
    let hist = uniform_histogram([(1, 254); 3], 10);
    let estimate = estimate_white_point(&hist);

    assert_eq!(estimate.to_array(), [223, 223, 223]);
    assert!(!estimate.is_fallback());
}

#[test]
fn test_band_thresholds_are_strict() {
    let mut hist = Histogram::default();
    for c in 0..3 {
        hist.add(c, 254, 5); // running mass 5, not > 100/20
        hist.add(c, 253, 10); // running mass 15, inside the band
        hist.add(c, 252, 5); // running mass 20, not < 100/5
        hist.add(c, 100, 80);
    }

    let estimate = estimate_white_point(&hist);

    assert_eq!(estimate.to_array(), [253, 253, 253]);
}

#[test]
fn test_estimate_stays_inside_used_range_when_bands_exist() {
    let shapes: [[(u8, u8); 3]; 4] = [
        [(1, 254), (1, 254), (1, 254)],
        [(1, 200), (30, 254), (60, 120)],
        [(1, 40), (1, 40), (1, 40)],
        [(200, 254), (150, 250), (100, 254)],
    ];

    for ranges in shapes {
        let estimate = estimate_white_point(&uniform_histogram(ranges, 7));
        assert!(!estimate.is_fallback(), "ranges {:?} hit the fallback", ranges);
        for v in estimate.to_array() {
            assert!((1..=254).contains(&v), "estimate {} outside [1, 254]", v);
        }
    }
}

#[test]
fn test_single_empty_band_forces_global_fallback() {
    // Red has all its mass in one bucket, so its band can never be entered,
    // while green and blue alone would give a valid estimate
    let hist = uniform_histogram([(1, 254); 3], 10);
    let mut red = [0u32; HISTOGRAM_BINS];
    red[180] = 2540;
    let green = column(&hist, 1);
    let blue = column(&hist, 2);

    let estimate = estimate_white_point(&Histogram::from_channels(&red, &green, &blue));

    assert_eq!(estimate, WhitePointEstimate::FALLBACK);
}

fn column(hist: &Histogram, channel: usize) -> [u32; HISTOGRAM_BINS] {
    let mut out = [0u32; HISTOGRAM_BINS];
    for (i, record) in hist.bins().iter().enumerate() {
        out[i] = record[channel];
    }
    out
}

#[test]
fn test_extreme_buckets_are_ignored() {
    let mut hist = uniform_histogram([(1, 254); 3], 10);
    for c in 0..3 {
        hist.add(c, 255, 1_000_000);
        hist.add(c, 0, 1_000_000);
    }

    assert_eq!(estimate_white_point(&hist).to_array(), [223, 223, 223]);
}

#[test]
fn test_white_point_estimate_rejects_zero() {
    assert!(WhitePointEstimate::new(0, 10, 10).is_none());
    assert!(WhitePointEstimate::new(10, 0, 10).is_none());
    assert!(WhitePointEstimate::new(10, 10, 0).is_none());
    assert_eq!(
        WhitePointEstimate::new(1, 2, 3).map(|e| e.to_array()),
        Some([1, 2, 3])
    );
}

#[test]
fn test_scale_factors_from_color_cast() {
    // Red band: intensities 190..=162, mean 176. Green/blue: 223.
    let hist = uniform_histogram([(1, 200), (1, 254), (1, 254)], 10);
    let pass = WhiteBalancePass::analyze(&hist);

    assert_eq!(pass.estimate.to_array(), [176, 223, 223]);

    let avg = (176.0 + 223.0) / 2.0;
    assert!((pass.scale.r - avg / 176.0).abs() < 1e-6);
    assert!((pass.scale.g - avg / 223.0).abs() < 1e-6);
    assert!((pass.scale.b - avg / 223.0).abs() < 1e-6);
    assert!(pass.scale.r > 1.0, "red should be boosted");
    assert!(pass.scale.g < 1.0, "green should be reduced");
}

#[test]
fn test_fallback_scale_is_identity() {
    let scale = ScaleFactors::from_estimate(&WhitePointEstimate::FALLBACK);
    assert_eq!(scale, ScaleFactors::IDENTITY);
}

#[test]
fn test_correct_clamps_at_255() {
    let scale = ScaleFactors::new(1.5, 1.0, 1.0);
    let out = scale.correct(Rgba8::new(250, 100, 0, 7));
    assert_eq!(out, Rgba8::new(255, 100, 0, 255));
}

#[test]
fn test_correct_truncates_and_forces_alpha() {
    let scale = ScaleFactors::new(0.5, 0.5, 0.5);
    let out = scale.correct(Rgba8::new(101, 3, 255, 0));
    assert_eq!(out, Rgba8::new(50, 1, 127, 255));
}

#[test]
fn test_neutral_gray_image_is_unchanged() {
    let mut image = RgbaImage::filled(16, 16, Rgba8::gray(128));
    let original = image.clone();

    let pass = auto_white_balance(&mut image);

    assert_eq!(pass.scale, ScaleFactors::IDENTITY);
    assert_eq!(image, original);
}

#[test]
fn test_correction_is_not_idempotent() {
    let scale = ScaleFactors::new(1.2, 1.0, 0.8);
    let once = scale.correct(Rgba8::opaque(100, 100, 100));
    let twice = scale.correct(once);

    assert_eq!(once, Rgba8::opaque(120, 100, 80));
    assert_ne!(once, twice);
}

#[test]
fn test_apply_parallel_matches_per_pixel_kernel() {
    let mut image = RgbaImage::filled(300, 200, Rgba8::BLACK);
    for (i, px) in image.pixels_mut().iter_mut().enumerate() {
        *px = Rgba8::new((i % 251) as u8, (i % 199) as u8, (i % 97) as u8, 3);
    }
    let original = image.clone();
    let pass = WhiteBalancePass {
        estimate: WhitePointEstimate::FALLBACK,
        scale: ScaleFactors::new(1.1, 0.9, 1.3),
    };

    pass.apply(&mut image);

    for (before, after) in original.pixels().iter().zip(image.pixels()) {
        assert_eq!(pass.scale.correct(*before), *after);
    }
}

#[test]
fn test_auto_white_balance_warms_blue_cast_image() {
    // Bright pixels have much more blue than red
    let mut image = RgbaImage::filled(20, 20, Rgba8::BLACK);
    for (i, px) in image.pixels_mut().iter_mut().enumerate() {
        let v = (i % 200) as u8 + 20;
        *px = Rgba8::opaque((v as u32 * 3 / 4) as u8, v, v);
    }

    let pass = auto_white_balance(&mut image);

    assert!(!pass.estimate.is_fallback());
    assert!(pass.estimate.r() < pass.estimate.b());
    assert!(pass.scale.r > 1.0);
    assert!(pass.scale.b < 1.0);
}
