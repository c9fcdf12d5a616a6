//! Robust white-point estimation
//!
//! The white point of each channel is the count-weighted mean intensity of a
//! band of bright pixels: counting mass down from the top of the histogram,
//! the buckets reached between 5% and 20% of the channel total
//! ("percentile-by-mass" band). A handful of clipped or noisy pixels at the
//! very top cannot dictate the correction.

use serde::Serialize;

use super::histogram::{Histogram, FIRST_USED_BIN, LAST_USED_BIN};

/// Lower edge of the band: mass above it must exceed `sum / 20`
const BAND_LOW_DIVISOR: u64 = 20;

/// Upper edge of the band: mass above it must stay under `sum / 5`
const BAND_HIGH_DIVISOR: u64 = 5;

/// Estimated neutral-white intensity per channel
///
/// Channels are never zero, so scale factors derived from an estimate are
/// always finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WhitePointEstimate {
    r: u8,
    g: u8,
    b: u8,
}

impl WhitePointEstimate {
    /// Full white, used when the histogram does not yield a band in every channel
    pub const FALLBACK: WhitePointEstimate = WhitePointEstimate {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Returns `None` if any channel is zero
    pub fn new(r: u8, g: u8, b: u8) -> Option<Self> {
        if r == 0 || g == 0 || b == 0 {
            return None;
        }
        Some(Self { r, g, b })
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

/// Band accumulator for one channel
#[derive(Debug, Clone, Copy, Default)]
struct BandStats {
    running: u64,
    count: u64,
    weighted: u64,
}

impl BandStats {
    fn accumulate(&mut self, count: u32, intensity: usize, sum: u64) {
        self.running += count as u64;
        if self.running > sum / BAND_LOW_DIVISOR && self.running < sum / BAND_HIGH_DIVISOR {
            self.count += count as u64;
            self.weighted += count as u64 * intensity as u64;
        }
    }

    /// Floor of the weighted mean; `None` for an empty band
    fn mean(&self) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        // Intensities are <= 254, so the mean fits in a u8
        Some((self.weighted / self.count) as u8)
    }
}

/// Estimate the white point of an image from its histogram
///
/// Scans intensities from 254 down to 1, accumulating each channel's mass.
/// Buckets reached while the accumulated mass lies strictly between 1/20 and
/// 1/5 of the channel total form the band. If any channel's band is empty the
/// whole estimate falls back to [`WhitePointEstimate::FALLBACK`]; channels are
/// never trusted individually.
pub fn estimate_white_point(histogram: &Histogram) -> WhitePointEstimate {
    let summary = histogram.summary();
    let sums = [
        summary.channels[0].sum,
        summary.channels[1].sum,
        summary.channels[2].sum,
    ];

    let mut bands = [BandStats::default(); 3];
    for i in (FIRST_USED_BIN..=LAST_USED_BIN).rev() {
        let record = histogram.bin(i);
        for c in 0..3 {
            bands[c].accumulate(record[c], i, sums[c]);
        }
    }

    match (bands[0].mean(), bands[1].mean(), bands[2].mean()) {
        (Some(r), Some(g), Some(b)) => {
            // Band buckets start at intensity 1, so no mean can be zero
            WhitePointEstimate::new(r, g, b).unwrap_or(WhitePointEstimate::FALLBACK)
        }
        _ => {
            log::debug!(
                "White point band empty in at least one channel (sums {:?}); using full white",
                sums
            );
            WhitePointEstimate::FALLBACK
        }
    }
}
