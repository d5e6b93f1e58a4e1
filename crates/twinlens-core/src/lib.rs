//! Twinlens Core Library
//!
//! Core functionality for deterministic, fully local comparative analysis of
//! two raster images: per-image visual metrics, rule-based subject
//! classification, and a histogram-intersection similarity score, rendered
//! into a natural-language summary.
//!
//! Everything is computed from pixel data with fixed formulas; there is no
//! network access and no learned model.

pub mod config;
pub mod decoders;
pub mod exporters;
pub mod models;
pub mod pipeline;
pub mod similarity;
pub mod summary;

// Re-export commonly used types
pub use decoders::{decode_image, DecodeError, DecodedImage};
pub use models::{AnalysisResult, AnalyzedImage, Classification, ColorHistogram, Metrics};
pub use pipeline::{analyze_image, analyze_pair};
