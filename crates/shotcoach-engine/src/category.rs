//! Instruction category classification.
//!
//! An ordered table of (category, keyword pattern) pairs evaluated
//! first-match-wins, so the precedence contract stays auditable in isolation
//! from the sentence-splitting code.

use regex::Regex;
use std::sync::LazyLock;

use shotcoach_models::InstructionCategory;

/// Keyword rules in precedence order. Word boundaries keep e.g. "bright"
/// from hitting the positioning keyword "right".
static CATEGORY_RULES: LazyLock<Vec<(InstructionCategory, Regex)>> = LazyLock::new(|| {
    vec![
        (
            InstructionCategory::Positioning,
            Regex::new(r"(?i)\b(move|step|position|closer|further|left|right|up|down|angle)\b")
                .unwrap(),
        ),
        (
            InstructionCategory::Lighting,
            Regex::new(r"(?i)\b(light|lighting|bright|dark|shadow|exposure|flash)\b").unwrap(),
        ),
        (
            InstructionCategory::Composition,
            Regex::new(r"(?i)\b(frame|crop|rule of thirds|golden ratio|center|composition)\b")
                .unwrap(),
        ),
        (
            InstructionCategory::Settings,
            Regex::new(r"(?i)\b(focus|zoom|aperture|shutter|iso|settings)\b").unwrap(),
        ),
        (
            InstructionCategory::Timing,
            Regex::new(r"(?i)\b(wait|timing|moment|when|ready)\b").unwrap(),
        ),
    ]
});

/// Classify an instruction sentence into its category.
///
/// The first rule whose pattern matches wins; `Composition` is the default
/// when nothing matches.
pub fn classify_category(text: &str) -> InstructionCategory {
    for (category, pattern) in CATEGORY_RULES.iter() {
        if pattern.is_match(text) {
            return *category;
        }
    }
    InstructionCategory::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_matches() {
        assert_eq!(
            classify_category("Move closer to the subject"),
            InstructionCategory::Positioning
        );
        assert_eq!(
            classify_category("Reduce the harsh shadow on the face"),
            InstructionCategory::Lighting
        );
        assert_eq!(
            classify_category("Try the rule of thirds here"),
            InstructionCategory::Composition
        );
        assert_eq!(
            classify_category("Lock focus on the eyes"),
            InstructionCategory::Settings
        );
        assert_eq!(
            classify_category("Wait for the wave to crest"),
            InstructionCategory::Timing
        );
    }

    #[test]
    fn test_precedence_positioning_beats_lighting() {
        // Both a positioning and a lighting keyword present
        assert_eq!(
            classify_category("Move closer and add more light."),
            InstructionCategory::Positioning
        );
    }

    #[test]
    fn test_default_when_no_keyword() {
        assert_eq!(
            classify_category("A lovely photograph overall"),
            InstructionCategory::Composition
        );
    }

    #[test]
    fn test_word_boundaries() {
        // "bright" must not match the positioning keyword "right"
        assert_eq!(
            classify_category("Make the scene a bit more bright"),
            InstructionCategory::Lighting
        );
    }
}
