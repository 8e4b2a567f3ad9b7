//! Feedback batch models.
//!
//! A `Feedback` is the full structured result of one analysis cycle: the
//! caller-supplied score, the ordered instruction batch, and the
//! perfect-shot flag. It is created fresh per cycle, never mutated, and
//! replaced wholesale by the next cycle.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::instruction::{Instruction, InstructionPriority};

/// Structured result of one analysis cycle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Feedback {
    /// Quality score as supplied by the analysis model (nominal 0-100,
    /// not clamped here)
    pub score: i32,

    /// Instruction batch, insertion order == priority order
    pub instructions: Vec<Instruction>,

    /// True when the shot is good enough to take immediately
    pub perfect_shot: bool,

    /// When this batch was parsed
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    /// Create a new feedback batch stamped with the current time.
    pub fn new(score: i32, instructions: Vec<Instruction>, perfect_shot: bool) -> Self {
        Self {
            score,
            instructions,
            perfect_shot,
            timestamp: Utc::now(),
        }
    }

    /// The instruction to surface first: the first `high`, else the first
    /// `medium`, else the first in the batch. `None` only for an empty batch,
    /// which the engine never produces.
    pub fn priority_instruction(&self) -> Option<&Instruction> {
        self.instructions
            .iter()
            .find(|i| i.priority == InstructionPriority::High)
            .or_else(|| {
                self.instructions
                    .iter()
                    .find(|i| i.priority == InstructionPriority::Medium)
            })
            .or_else(|| self.instructions.first())
    }

    /// Pure 0-based lookup of the instruction after `current_step`.
    pub fn next_instruction(&self, current_step: usize) -> Option<&Instruction> {
        self.instructions.get(current_step)
    }

    /// Number of instructions in the batch.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True when the batch holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
