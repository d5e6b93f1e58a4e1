//! Quantized RGB color histogram used for similarity comparison.

/// Bins per channel for the similarity histogram
pub const HISTOGRAM_CHANNEL_BINS: usize = 16;

/// Total bin count (16 x 16 x 16)
pub const HISTOGRAM_BINS: usize =
    HISTOGRAM_CHANNEL_BINS * HISTOGRAM_CHANNEL_BINS * HISTOGRAM_CHANNEL_BINS;

/// 3-D frequency table over quantized RGB space.
///
/// Each channel is quantized by integer division into 16 equal-width buckets,
/// so the bin index is `(r/16)*256 + (g/16)*16 + (b/16)`. The sum of all
/// counts always equals the pixel count of the source image.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    bins: Box<[u32; HISTOGRAM_BINS]>,
}

impl ColorHistogram {
    /// New histogram with all bins empty
    pub fn new() -> Self {
        Self {
            bins: Box::new([0u32; HISTOGRAM_BINS]),
        }
    }

    /// Count one RGB pixel
    pub fn record(&mut self, r: u8, g: u8, b: u8) {
        // 256 channel values over 16 buckets -> 16 values per bucket
        const BUCKET_WIDTH: usize = 256 / HISTOGRAM_CHANNEL_BINS;
        let r_bin = r as usize / BUCKET_WIDTH;
        let g_bin = g as usize / BUCKET_WIDTH;
        let b_bin = b as usize / BUCKET_WIDTH;
        let index = r_bin * HISTOGRAM_CHANNEL_BINS * HISTOGRAM_CHANNEL_BINS
            + g_bin * HISTOGRAM_CHANNEL_BINS
            + b_bin;
        self.bins[index] += 1;
    }

    /// Raw bin counts
    pub fn bins(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Total number of recorded pixels
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }
}

impl Default for ColorHistogram {
    fn default() -> Self {
        Self::new()
    }
}
