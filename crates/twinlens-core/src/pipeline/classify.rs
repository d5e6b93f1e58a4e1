//! Rule-based subject classification.

use crate::models::Classification;

/// Assign a subject label from the derived metrics.
///
/// Ordered rule evaluation; the first matching rule wins, so earlier rules
/// shadow later ones (a high skin-tone image is a portrait even when its
/// edge and contrast figures would also satisfy the man-made-object rule).
/// The fallback makes this a total function over any metric combination.
pub fn classify(
    edge_density: f64,
    contrast: f64,
    skin_tone_percent: f64,
    color_variety: usize,
) -> Classification {
    if skin_tone_percent > 10.0 {
        return Classification::HumanPortrait;
    }

    if edge_density > 15.0 && contrast > 50.0 && color_variety < 100 {
        return Classification::ManMadeObject;
    }

    if edge_density > 8.0 && contrast > 30.0 && color_variety > 150 {
        return Classification::Animal;
    }

    if edge_density < 10.0 && color_variety > 200 {
        return Classification::LandscapeScenery;
    }

    Classification::GeneralSubjectAbstract
}
