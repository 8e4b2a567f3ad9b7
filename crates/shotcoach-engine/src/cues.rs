//! Visual cue classification.
//!
//! Maps the current priority instruction's text to overlay cues. Up to three
//! independent cues can fire per sentence, emitted in the order lighting,
//! movement, angle. All checks are plain substring tests on the lower-cased
//! text, matching the behavior the overlay renderer was built against
//! (including the angle/movement reuse of "up"/"down" noted in DESIGN.md).

use shotcoach_models::{LightHorizontal, LightVertical, VisualCue};

/// Verbs that mark a lighting sentence as a placement suggestion.
const LIGHT_PLACEMENT_WORDS: &[&str] = &["add", "place", "source", "position", "introduce"];

/// Classify an instruction sentence into overlay cues.
pub fn classify_cues(text: &str) -> Vec<VisualCue> {
    let lower = text.to_lowercase();
    let mut cues = Vec::new();

    if let Some(cue) = lighting_cue(&lower) {
        cues.push(cue);
    }
    if let Some(cue) = movement_cue(&lower) {
        cues.push(cue);
    }
    if let Some(cue) = angle_cue(&lower) {
        cues.push(cue);
    }

    cues
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Lighting cue: a light/sun mention combined with a placement verb.
fn lighting_cue(lower: &str) -> Option<VisualCue> {
    let mentions_light = lower.contains("light") || lower.contains("sun");
    if !mentions_light || !contains_any(lower, LIGHT_PLACEMENT_WORDS) {
        return None;
    }

    let vertical = if contains_any(lower, &["top", "upper", "high"]) {
        LightVertical::Top
    } else if contains_any(lower, &["bottom", "lower", "low"]) {
        LightVertical::Bottom
    } else {
        LightVertical::Mid
    };

    let horizontal = if lower.contains("left") {
        LightHorizontal::Left
    } else if lower.contains("right") {
        LightHorizontal::Right
    } else {
        LightHorizontal::Center
    };

    Some(VisualCue::Light {
        vertical,
        horizontal,
    })
}

/// Movement cue: mutually exclusive, first match in the chain wins.
fn movement_cue(lower: &str) -> Option<VisualCue> {
    if lower.contains("left") {
        Some(VisualCue::MoveLeft)
    } else if lower.contains("right") {
        Some(VisualCue::MoveRight)
    } else if lower.contains("up") || lower.contains("higher") {
        Some(VisualCue::MoveUp)
    } else if lower.contains("down") || lower.contains("lower") {
        Some(VisualCue::MoveDown)
    } else if lower.contains("closer") || lower.contains("forward") {
        Some(VisualCue::MoveForward)
    } else if lower.contains("back") || lower.contains("further") || lower.contains("away") {
        Some(VisualCue::MoveBack)
    } else if lower.contains("rotate") && lower.contains("clockwise") {
        Some(VisualCue::RotateCw)
    } else if lower.contains("rotate") {
        Some(VisualCue::RotateCcw)
    } else {
        None
    }
}

/// Angle cue: only fires when the sentence talks about angle or tilt.
fn angle_cue(lower: &str) -> Option<VisualCue> {
    if !lower.contains("angle") && !lower.contains("tilt") {
        return None;
    }

    if contains_any(lower, &["high", "above", "down"]) {
        Some(VisualCue::AngleHigh)
    } else if contains_any(lower, &["low", "below", "up"]) {
        Some(VisualCue::AngleLow)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_placement_cue() {
        let cues = classify_cues("Move the light source to the top left");
        assert!(cues.contains(&VisualCue::Light {
            vertical: LightVertical::Top,
            horizontal: LightHorizontal::Left,
        }));
    }

    #[test]
    fn test_light_without_placement_verb() {
        // "light" alone is not a placement suggestion
        let cues = classify_cues("The lighting is a bit flat");
        assert!(!cues.iter().any(|c| c.is_lighting()));
    }

    #[test]
    fn test_light_defaults_to_mid_center() {
        let cues = classify_cues("Introduce a soft light on the subject");
        assert!(cues.contains(&VisualCue::Light {
            vertical: LightVertical::Mid,
            horizontal: LightHorizontal::Center,
        }));
    }

    #[test]
    fn test_movement_chain_order() {
        assert_eq!(classify_cues("Pan right a touch"), vec![VisualCue::MoveRight]);
        assert_eq!(
            classify_cues("Bring the camera higher"),
            vec![VisualCue::MoveUp]
        );
        assert_eq!(
            classify_cues("Come forward toward the subject"),
            vec![VisualCue::MoveForward]
        );
        assert_eq!(
            classify_cues("Rotate the phone clockwise"),
            vec![VisualCue::RotateCw]
        );
        assert_eq!(classify_cues("Rotate the phone a touch"), vec![VisualCue::RotateCcw]);
    }

    #[test]
    fn test_back_wins_over_rotate() {
        // "back" sits earlier in the chain than the rotate branches
        let cues = classify_cues("Step back and rotate clockwise");
        assert_eq!(cues, vec![VisualCue::MoveBack]);
    }

    #[test]
    fn test_angle_cue() {
        assert_eq!(
            classify_cues("Shoot from a high angle"),
            vec![VisualCue::AngleHigh]
        );
        assert_eq!(
            classify_cues("Try a low angle shot"),
            vec![VisualCue::AngleLow]
        );
        // No directional word: no angle cue
        assert!(classify_cues("Mind the angle of the wall").is_empty());
    }

    #[test]
    fn test_angle_and_movement_overlap_preserved() {
        // "up" feeds both the movement chain and the angle else-branch
        let cues = classify_cues("Tilt the camera up a little");
        assert_eq!(cues, vec![VisualCue::MoveUp, VisualCue::AngleLow]);
    }

    #[test]
    fn test_lighting_and_movement_combine() {
        let cues = classify_cues("Add light from the right side");
        assert_eq!(
            cues,
            vec![
                VisualCue::Light {
                    vertical: LightVertical::Mid,
                    horizontal: LightHorizontal::Right,
                },
                VisualCue::MoveRight,
            ]
        );
    }

    #[test]
    fn test_no_cues() {
        assert!(classify_cues("Hold steady and compose your shot.").is_empty());
    }
}
