//! Image analysis pipeline
//!
//! Per-image pipeline stages plus the two-image orchestration.
//!
//! This module is organized into submodules:
//! - `grayscale`: RGBA to intensity conversion
//! - `stats`: brightness/contrast statistics over the grayscale buffer
//! - `edges`: 3x3 Sobel gradient and edge density
//! - `color`: similarity histogram, skin-tone heuristic, color variety
//! - `classify`: ordered rule evaluation producing the subject label
//!
//! Each stage takes an input buffer and returns a new owned output buffer;
//! nothing is shared between the two images being compared except read-only
//! access during the final similarity step.

mod classify;
mod color;
mod edges;
mod grayscale;
mod stats;


// Re-export public items from submodules
pub use classify::classify;
pub use color::{profile_colors, ColorProfile};
pub use edges::{detect_edges, EdgeAnalysis, GradientBuffer, EDGE_THRESHOLD};
pub use grayscale::{to_grayscale, GrayscaleBuffer};
pub use stats::{compute_pixel_stats, PixelStats, LOW_CONTRAST_THRESHOLD};

use crate::decoders::{decode_image, DecodeError};
use crate::exporters;
use crate::models::{AnalysisResult, AnalyzedImage, ColorHistogram, Metrics};
use crate::similarity::histogram_similarity;
use crate::summary::compose_summary;
use crate::verbose_println;

/// One image's full analysis, including the comparison histogram that never
/// leaves the crate.
struct ImageAnalysis {
    analyzed: AnalyzedImage,
    histogram: ColorHistogram,
}

/// Run the per-image pipeline: decode/normalize, grayscale, statistics,
/// edge detection, color profiling, classification, preview encoding.
fn analyze_bytes(bytes: &[u8]) -> Result<ImageAnalysis, DecodeError> {
    let image = decode_image(bytes)?;

    let gray = to_grayscale(&image);
    let stats = compute_pixel_stats(&gray);
    let edges = detect_edges(&gray);
    let profile = profile_colors(&image);

    let classification = classify(
        edges.edge_density,
        stats.contrast,
        profile.skin_tone_percent,
        profile.color_variety,
    );

    verbose_println!(
        "[twinlens] {}x{}: brightness {:.2}, contrast {:.2}, edge density {:.2}%, \
         skin {:.2}%, variety {} -> {}",
        image.width,
        image.height,
        stats.brightness,
        stats.contrast,
        edges.edge_density,
        profile.skin_tone_percent,
        profile.color_variety,
        classification
    );

    // Preview encoding writes to in-memory buffers; a failure here means the
    // derived buffers are malformed, which decoding rules out.
    let grayscale_png =
        exporters::encode_grayscale_png(&gray).map_err(DecodeError::InvalidImage)?;
    let edges_png =
        exporters::encode_gradient_png(&edges.gradient).map_err(DecodeError::InvalidImage)?;

    Ok(ImageAnalysis {
        analyzed: AnalyzedImage {
            grayscale_png,
            edges_png,
            metrics: Metrics {
                brightness: stats.brightness,
                contrast: stats.contrast,
                edge_density: edges.edge_density,
                is_low_contrast: stats.is_low_contrast,
            },
            classification,
        },
        histogram: profile.histogram,
    })
}

/// Analyze a single image: metrics, classification, and previews.
pub fn analyze_image(bytes: &[u8]) -> Result<AnalyzedImage, DecodeError> {
    analyze_bytes(bytes).map(|analysis| analysis.analyzed)
}

/// Analyze two images and compare them.
///
/// The two per-image pipelines are independent and run concurrently; both
/// must complete before the similarity score and summary are produced. A
/// decode failure on either side aborts the whole comparison.
pub fn analyze_pair(bytes1: &[u8], bytes2: &[u8]) -> Result<AnalysisResult, DecodeError> {
    let (result1, result2) = rayon::join(|| analyze_bytes(bytes1), || analyze_bytes(bytes2));
    let analysis1 = result1?;
    let analysis2 = result2?;

    let similarity_score = histogram_similarity(&analysis1.histogram, &analysis2.histogram);
    let summary = compose_summary(
        analysis1.analyzed.classification,
        analysis2.analyzed.classification,
        similarity_score,
        analysis1.analyzed.metrics.is_low_contrast,
        analysis2.analyzed.metrics.is_low_contrast,
    );

    Ok(AnalysisResult {
        image1: analysis1.analyzed,
        image2: analysis2.analyzed,
        similarity_score,
        summary,
    })
}
