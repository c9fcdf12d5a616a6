//! Per-channel intensity histograms
//!
//! A [`Histogram`] holds one `[r, g, b]` count record per 8-bit intensity. The
//! white-point estimator only looks at intensities 1..=254; the two extreme
//! buckets are kept so the scanner stays a plain count of every pixel.

use serde::Serialize;

use crate::dispatch::parallel_fold_reduce;
use crate::models::{Rgba8, RgbaImage};

/// Number of buckets per channel
pub const HISTOGRAM_BINS: usize = 256;

/// First intensity that takes part in white-point estimation
pub const FIRST_USED_BIN: usize = 1;

/// Last intensity that takes part in white-point estimation
pub const LAST_USED_BIN: usize = 254;

/// Per-channel 256-bucket intensity histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [[u32; 3]; HISTOGRAM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            bins: [[0; 3]; HISTOGRAM_BINS],
        }
    }
}

impl Histogram {
    /// Histogram from precomputed `[r, g, b]` records
    pub fn from_bins(bins: [[u32; 3]; HISTOGRAM_BINS]) -> Self {
        Self { bins }
    }

    /// Histogram from three separate channel histograms
    pub fn from_channels(
        red: &[u32; HISTOGRAM_BINS],
        green: &[u32; HISTOGRAM_BINS],
        blue: &[u32; HISTOGRAM_BINS],
    ) -> Self {
        let mut hist = Self::default();
        for i in 0..HISTOGRAM_BINS {
            hist.bins[i] = [red[i], green[i], blue[i]];
        }
        hist
    }

    /// Count pixels of an image, one bucket per channel value
    ///
    /// Alpha is ignored. Large images are scanned in parallel and the partial
    /// histograms merged.
    pub fn from_image(image: &RgbaImage) -> Self {
        parallel_fold_reduce(
            image.pixels(),
            Histogram::default,
            |mut hist, pixel| {
                hist.add_pixel(*pixel);
                hist
            },
            Histogram::merge,
        )
    }

    /// Count record `[r, g, b]` at `intensity`
    pub fn bin(&self, intensity: usize) -> [u32; 3] {
        self.bins[intensity]
    }

    pub fn bins(&self) -> &[[u32; 3]; HISTOGRAM_BINS] {
        &self.bins
    }

    pub fn add_pixel(&mut self, pixel: Rgba8) {
        self.bins[pixel.r as usize][0] += 1;
        self.bins[pixel.g as usize][1] += 1;
        self.bins[pixel.b as usize][2] += 1;
    }

    /// Add `count` samples of `intensity` to a single channel (0 = r, 1 = g, 2 = b)
    pub fn add(&mut self, channel: usize, intensity: u8, count: u32) {
        self.bins[intensity as usize][channel] += count;
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.bins.iter_mut().zip(other.bins.iter()) {
            mine[0] += theirs[0];
            mine[1] += theirs[1];
            mine[2] += theirs[2];
        }
        self
    }

    /// Total samples per channel over every bucket
    pub fn totals(&self) -> [u64; 3] {
        let mut totals = [0u64; 3];
        for record in self.bins.iter() {
            for c in 0..3 {
                totals[c] += record[c] as u64;
            }
        }
        totals
    }

    /// Sums and extents over the buckets used for white-point estimation
    pub fn summary(&self) -> HistogramSummary {
        let mut summary = HistogramSummary::default();
        for i in FIRST_USED_BIN..=LAST_USED_BIN {
            let record = self.bins[i];
            for c in 0..3 {
                let count = record[c];
                let channel = &mut summary.channels[c];
                channel.sum += count as u64;
                if count > 0 {
                    if channel.min.is_none() {
                        channel.min = Some(i as u8);
                    }
                    channel.max = Some(i as u8);
                }
            }
        }
        summary
    }
}

/// Mass and non-empty range of one channel over intensities 1..=254
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChannelExtent {
    pub sum: u64,
    /// Lowest non-empty intensity, `None` when the channel is empty
    pub min: Option<u8>,
    /// Highest non-empty intensity, `None` when the channel is empty
    pub max: Option<u8>,
}

/// Per-channel extents, in r, g, b order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistogramSummary {
    pub channels: [ChannelExtent; 3],
}
