//! Color profiling: histogram, skin-tone heuristic, and color variety.

use std::collections::HashSet;

use crate::decoders::DecodedImage;
use crate::models::ColorHistogram;

/// Bins per channel for the coarse color-variety quantization (32 values per
/// bucket, at most 8^3 = 512 distinct buckets).
const VARIETY_BUCKET_WIDTH: u8 = 32;

/// Result of the single color-profiling pass over the RGBA buffer.
#[derive(Debug, Clone)]
pub struct ColorProfile {
    /// 16x16x16 histogram used for similarity comparison
    pub histogram: ColorHistogram,

    /// Percentage of pixels matching the skin-tone rule, 0-100
    pub skin_tone_percent: f64,

    /// Number of distinct coarse RGB buckets present, a texture/complexity
    /// proxy
    pub color_variety: usize,
}

/// Scan the full-resolution RGBA buffer once, producing the similarity
/// histogram, the skin-tone percentage, and the color variety together.
pub fn profile_colors(image: &DecodedImage) -> ColorProfile {
    let mut histogram = ColorHistogram::new();
    let mut skin_count = 0usize;
    let mut buckets: HashSet<(u8, u8, u8)> = HashSet::new();

    for rgba in image.data.chunks_exact(4) {
        let (r, g, b) = (rgba[0], rgba[1], rgba[2]);

        histogram.record(r, g, b);

        if is_skin_tone(r, g, b) {
            skin_count += 1;
        }

        buckets.insert((
            r / VARIETY_BUCKET_WIDTH,
            g / VARIETY_BUCKET_WIDTH,
            b / VARIETY_BUCKET_WIDTH,
        ));
    }

    let pixel_count = image.pixel_count();
    let skin_tone_percent = if pixel_count > 0 {
        skin_count as f64 / pixel_count as f64 * 100.0
    } else {
        0.0
    };

    ColorProfile {
        histogram,
        skin_tone_percent,
        color_variety: buckets.len(),
    }
}

/// Fixed RGB-relationship rule approximating human-skin pixels.
fn is_skin_tone(r: u8, g: u8, b: u8) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    r > 95
        && g > 40
        && b > 20
        && r > g
        && r > b
        && max - min > 15
        && (r as i16 - g as i16).abs() > 15
}
