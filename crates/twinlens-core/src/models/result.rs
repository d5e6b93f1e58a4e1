//! Analysis output types handed to the presentation layer.

use serde::Serialize;

use super::{Classification, Metrics};

/// Everything the pipeline derives from a single image.
///
/// The color histogram is deliberately absent: it is an internal comparison
/// artifact, not a presentation concern.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedImage {
    /// Grayscale preview, PNG-encoded
    #[serde(skip)]
    pub grayscale_png: Vec<u8>,

    /// Edge-map preview, PNG-encoded
    #[serde(skip)]
    pub edges_png: Vec<u8>,

    /// Brightness, contrast, and edge density
    pub metrics: Metrics,

    /// Rule-based subject label
    pub classification: Classification,
}

/// Combined result of comparing two images.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub image1: AnalyzedImage,
    pub image2: AnalyzedImage,

    /// Normalized histogram-intersection score, 0-100
    pub similarity_score: u8,

    /// Deterministic natural-language report
    pub summary: String,
}
