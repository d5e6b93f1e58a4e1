//! Per-image visual metrics and the subject classification label.

use std::fmt;

use serde::Serialize;

/// Numeric metrics derived from one image's pixel data.
///
/// `brightness`, `contrast`, and `edge_density` are rounded to two decimals
/// for reporting; `is_low_contrast` is decided from the unrounded standard
/// deviation so rounding can never flip the flag.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metrics {
    /// Mean grayscale intensity, 0-255
    pub brightness: f64,

    /// Population standard deviation of grayscale intensity
    pub contrast: f64,

    /// Percentage of pixels whose Sobel gradient magnitude exceeds the edge
    /// threshold, 0-100
    pub edge_density: f64,

    /// True when contrast falls below the fixed low-contrast threshold
    pub is_low_contrast: bool,
}

/// Rule-based subject classification for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    HumanPortrait,
    ManMadeObject,
    Animal,
    LandscapeScenery,
    GeneralSubjectAbstract,
}

impl Classification {
    /// Human-readable label used in reports and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Classification::HumanPortrait => "Human Portrait",
            Classification::ManMadeObject => "Man-made Object",
            Classification::Animal => "Animal",
            Classification::LandscapeScenery => "Landscape / Scenery",
            Classification::GeneralSubjectAbstract => "General Subject / Abstract",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
