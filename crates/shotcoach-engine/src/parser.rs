//! Feedback instruction parsing.
//!
//! Turns the raw coaching text from the vision-language model into an
//! ordered, prioritized instruction batch. The parser is total: malformed or
//! empty input degrades to a single fallback instruction, never an error.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use shotcoach_models::{
    ArrowDirection, Feedback, GridPattern, Instruction, InstructionCategory, InstructionPriority,
    VisualAid,
};

use crate::category::classify_category;
use crate::config::EngineConfig;

/// Instruction shown when the shot is already good enough.
pub const PERFECT_SHOT_TEXT: &str = "PERFECT SHOT! Take the picture now!";

/// Instruction shown when nothing usable could be parsed.
pub const FALLBACK_TEXT: &str = "Hold steady and compose your shot.";

/// Leading "Feedback:" label some model responses carry.
static FEEDBACK_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*feedback:\s*").unwrap());

/// Sentence boundary: period or exclamation mark followed by whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!]\s+").unwrap());

/// Arrow directions in check order; first hit wins.
const ARROW_KEYWORDS: &[(&str, ArrowDirection)] = &[
    ("left", ArrowDirection::Left),
    ("right", ArrowDirection::Right),
    ("up", ArrowDirection::Up),
    ("higher", ArrowDirection::Up),
    ("down", ArrowDirection::Down),
    ("lower", ArrowDirection::Down),
];

/// Parse raw model feedback into a structured batch.
pub fn parse_instructions(config: &EngineConfig, raw_feedback: &str, score: i32) -> Feedback {
    if score >= config.perfect_score_threshold
        || raw_feedback.to_lowercase().contains("perfect shot")
    {
        debug!(score, "perfect shot, skipping instruction parsing");
        let instruction = Instruction::new(1, 1, PERFECT_SHOT_TEXT, InstructionCategory::Timing);
        return Feedback::new(score, vec![instruction], true);
    }

    let candidates = split_candidates(config, raw_feedback);

    if candidates.is_empty() {
        debug!("no usable candidates, returning fallback instruction");
        let instruction = Instruction::new(1, 1, FALLBACK_TEXT, InstructionCategory::Composition)
            .with_priority(InstructionPriority::Medium);
        return Feedback::new(score, vec![instruction], false);
    }

    let total = candidates.len() as u32;
    let instructions = candidates
        .into_iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let text = polish_text(&candidate);
            let category = classify_category(&text);
            let mut instruction = Instruction::new(idx as u32 + 1, total, text, category);
            if let Some(aid) = visual_aid_for(&instruction.text, category) {
                instruction = instruction.with_visual_aid(aid);
            }
            instruction
        })
        .collect::<Vec<_>>();

    debug!(score, count = instructions.len(), "parsed instruction batch");
    Feedback::new(score, instructions, false)
}

/// Split raw text into surviving instruction candidates, in original order.
fn split_candidates(config: &EngineConfig, raw_feedback: &str) -> Vec<String> {
    let body = FEEDBACK_LABEL.replace(raw_feedback, "");

    SENTENCE_BOUNDARY
        .split(&body)
        .map(str::trim)
        .filter(|candidate| candidate.len() >= config.min_candidate_len)
        .filter(|candidate| !candidate.to_lowercase().starts_with("score:"))
        .take(config.max_instructions)
        .map(str::to_string)
        .collect()
}

/// Capitalize the first letter and append terminal punctuation if missing.
fn polish_text(candidate: &str) -> String {
    let mut chars = candidate.chars();
    let mut text = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

/// Visual aid for an instruction sentence: a directional arrow when the text
/// names a direction, else a thirds grid for compositional-guide phrases.
fn visual_aid_for(text: &str, category: InstructionCategory) -> Option<VisualAid> {
    let lower = text.to_lowercase();

    for (keyword, direction) in ARROW_KEYWORDS {
        if lower.contains(keyword) {
            return Some(VisualAid::Arrow {
                direction: *direction,
            });
        }
    }

    if category == InstructionCategory::Composition
        && (lower.contains("rule of thirds") || lower.contains("golden ratio"))
    {
        return Some(VisualAid::Grid {
            pattern: GridPattern::Thirds,
        });
    }

    None
}
