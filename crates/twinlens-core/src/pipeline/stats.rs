//! Pixel statistics over the grayscale buffer.

use super::grayscale::GrayscaleBuffer;

/// Contrast below this value flags an image as hard to analyze.
/// Calibrated heuristic; the classifier depends on it staying fixed.
pub const LOW_CONTRAST_THRESHOLD: f64 = 10.0;

/// Brightness and contrast of one image.
#[derive(Debug, Clone, Copy)]
pub struct PixelStats {
    /// Mean intensity, rounded to 2 decimals for reporting
    pub brightness: f64,

    /// Population standard deviation, rounded to 2 decimals for reporting
    pub contrast: f64,

    /// Decided from the unrounded standard deviation, so rounding can never
    /// flip the flag at the threshold
    pub is_low_contrast: bool,
}

/// Compute mean intensity and population standard deviation.
///
/// The variance divisor is the pixel count (population variance, not the
/// sample estimator). A single-pixel or flat image yields zero contrast.
pub fn compute_pixel_stats(gray: &GrayscaleBuffer) -> PixelStats {
    let count = gray.data.len();
    if count == 0 {
        return PixelStats {
            brightness: 0.0,
            contrast: 0.0,
            is_low_contrast: true,
        };
    }

    let sum: u64 = gray.data.iter().map(|&v| v as u64).sum();
    let mean = sum as f64 / count as f64;

    let variance_sum: f64 = gray
        .data
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    let std_dev = (variance_sum / count as f64).sqrt();

    PixelStats {
        brightness: round2(mean),
        contrast: round2(std_dev),
        is_low_contrast: std_dev < LOW_CONTRAST_THRESHOLD,
    }
}

/// Round to two decimal digits for reporting.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
