//! Natural-language summary of a two-image comparison.
//!
//! Fixed templates over the two classifications, the similarity score, and
//! the low-contrast flags; identical inputs always produce identical text.

use crate::models::Classification;

/// Score above which two same-category images are treated as depicting the
/// very same subject.
const NEAR_IDENTICAL_SCORE: u8 = 85;

/// Score above which two same-category images are treated as strongly
/// similar.
const STRONG_SIMILARITY_SCORE: u8 = 60;

/// Compose the comparison report.
pub fn compose_summary(
    class1: Classification,
    class2: Classification,
    similarity_score: u8,
    low_contrast1: bool,
    low_contrast2: bool,
) -> String {
    let mut summary = String::new();

    if low_contrast1 || low_contrast2 {
        summary.push_str(
            "[ANALYZABILITY WARNING] One or both images have very low contrast, \
             which can make feature extraction difficult and may affect the accuracy \
             of the similarity score.\n\n",
        );
    }

    if class1 == class2 {
        summary.push_str(&format!(
            "Both images appear to be of the same category: '{}'.\n\n",
            class1
        ));
        if similarity_score > NEAR_IDENTICAL_SCORE {
            summary.push_str(&format!(
                "Their exceptionally high similarity score of {}% suggests they depict \
                 the very same subject or nearly identical scenes. For example, if they \
                 are 'Man-made Objects', they are likely the same type of object \
                 (e.g., both scissors or both cars).",
                similarity_score
            ));
        } else if similarity_score > STRONG_SIMILARITY_SCORE {
            summary.push_str(&format!(
                "The strong similarity score of {}% indicates they share many visual \
                 characteristics, such as color palette and structure, as expected for \
                 two '{}' images.",
                similarity_score, class1
            ));
        } else {
            summary.push_str(&format!(
                "Despite being in the same category, the lower similarity score of {}% \
                 suggests significant differences in lighting, angle, or specific \
                 subject matter.",
                similarity_score
            ));
        }
    } else {
        summary.push_str(&format!(
            "The images depict different subjects. Image 1 is classified as a '{}', \
             while Image 2 is categorized as a '{}'.\n\nThis fundamental difference in \
             subject matter is the primary reason for their moderate-to-low similarity \
             score of {}%.",
            class1, class2, similarity_score
        ));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification::*;

    #[test]
    fn test_low_contrast_warning_prepended() {
        let with_warning = compose_summary(Animal, Animal, 70, true, false);
        assert!(with_warning.starts_with("[ANALYZABILITY WARNING]"));

        let without = compose_summary(Animal, Animal, 70, false, false);
        assert!(!without.contains("[ANALYZABILITY WARNING]"));
    }

    #[test]
    fn test_same_category_score_branches() {
        let near_identical = compose_summary(HumanPortrait, HumanPortrait, 90, false, false);
        assert!(near_identical.contains("exceptionally high similarity score of 90%"));

        let strong = compose_summary(HumanPortrait, HumanPortrait, 70, false, false);
        assert!(strong.contains("strong similarity score of 70%"));

        let weak = compose_summary(HumanPortrait, HumanPortrait, 30, false, false);
        assert!(weak.contains("lower similarity score of 30%"));
    }

    #[test]
    fn test_branch_boundaries_are_exclusive() {
        // 85 and 60 fall into the next branch down
        let at_85 = compose_summary(Animal, Animal, 85, false, false);
        assert!(at_85.contains("strong similarity score of 85%"));

        let at_60 = compose_summary(Animal, Animal, 60, false, false);
        assert!(at_60.contains("lower similarity score of 60%"));
    }

    #[test]
    fn test_different_categories_named_in_order() {
        let summary = compose_summary(ManMadeObject, LandscapeScenery, 20, false, false);
        assert!(summary.contains("Image 1 is classified as a 'Man-made Object'"));
        assert!(summary.contains("Image 2 is categorized as a 'Landscape / Scenery'"));
        assert!(summary.contains("similarity score of 20%"));
    }

    #[test]
    fn test_determinism() {
        let a = compose_summary(Animal, GeneralSubjectAbstract, 42, true, true);
        let b = compose_summary(Animal, GeneralSubjectAbstract, 42, true, true);
        assert_eq!(a, b);
    }
}
