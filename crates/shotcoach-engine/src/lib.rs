//! Feedback instruction engine for ShotCoach.
//!
//! Consumes raw coaching text from the vision-language model plus a numeric
//! quality score and produces a structured [`Feedback`] batch, then maps the
//! top instruction to symbolic overlay cues for the viewfinder renderer.
//!
//! The engine is stateless per call; [`CoachEngine`] only carries its
//! configuration. The one shared-state type is [`InspirationSlot`], the
//! cross-screen reference-image handoff.

pub mod category;
pub mod config;
pub mod cues;
pub mod error;
pub mod inspiration;
pub mod parser;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use inspiration::{InspirationImage, InspirationSlot};
pub use parser::{FALLBACK_TEXT, PERFECT_SHOT_TEXT};

use shotcoach_models::{ActiveCueSet, Feedback, Instruction, VisualCue};

/// The feedback instruction engine.
#[derive(Debug, Clone, Default)]
pub struct CoachEngine {
    config: EngineConfig,
}

impl CoachEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine configured from `SHOTCOACH_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse raw model feedback into a structured batch.
    ///
    /// Never fails: a perfect shot short-circuits to a single timing
    /// instruction, and unusable input degrades to the fallback instruction.
    pub fn parse_instructions(&self, raw_feedback: &str, score: i32) -> Feedback {
        parser::parse_instructions(&self.config, raw_feedback, score)
    }

    /// The instruction to surface first: first `high`, else first `medium`,
    /// else the first in the batch.
    ///
    /// Engine-produced feedback always holds at least one instruction; an
    /// empty batch is programmer misuse and reported as
    /// [`EngineError::InvalidState`].
    pub fn priority_instruction<'a>(&self, feedback: &'a Feedback) -> EngineResult<&'a Instruction> {
        feedback
            .priority_instruction()
            .ok_or_else(|| EngineError::invalid_state("feedback has no instructions"))
    }

    /// The instruction after `current_step` (0-based), if any.
    pub fn next_instruction<'a>(
        &self,
        feedback: &'a Feedback,
        current_step: usize,
    ) -> Option<&'a Instruction> {
        feedback.next_instruction(current_step)
    }

    /// Classify an instruction sentence into overlay cues.
    pub fn classify_cues(&self, instruction_text: &str) -> Vec<VisualCue> {
        cues::classify_cues(instruction_text)
    }

    /// Overlay cues for a feedback batch: the priority instruction's cues,
    /// wrapped with the configured display lifetime.
    pub fn active_cues(&self, feedback: &Feedback) -> EngineResult<ActiveCueSet> {
        let top = self.priority_instruction(feedback)?;
        let cues = cues::classify_cues(&top.text);
        Ok(ActiveCueSet::new(cues).with_ttl_secs(self.config.cue_ttl_secs))
    }
}
