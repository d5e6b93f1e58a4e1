//! Data models for Twinlens
//!
//! Core data structures for per-image metrics, subject classification,
//! color histograms, and the combined comparison result.

mod histogram;
mod metrics;
mod result;

// Re-export all public types to keep a flat public API
pub use histogram::{ColorHistogram, HISTOGRAM_BINS, HISTOGRAM_CHANNEL_BINS};
pub use metrics::{Classification, Metrics};
pub use result::{AnalysisResult, AnalyzedImage};
