//! Histogram-intersection similarity between two images.

use crate::models::ColorHistogram;

/// Compute the normalized histogram-intersection score, an integer 0-100.
///
/// `intersection = sum(min(h1[i], h2[i]))`, normalized by the smaller total
/// pixel count. Symmetric by construction. A zero-pixel histogram on either
/// side yields 0; a histogram compared against itself yields 100.
pub fn histogram_similarity(h1: &ColorHistogram, h2: &ColorHistogram) -> u8 {
    let mut intersection = 0u64;
    for (&a, &b) in h1.bins().iter().zip(h2.bins().iter()) {
        intersection += a.min(b) as u64;
    }

    let total1 = h1.total();
    let total2 = h2.total();
    if total1 == 0 || total2 == 0 {
        return 0;
    }

    let score = intersection as f64 / total1.min(total2) as f64;
    (score * 100.0).round() as u8
}
