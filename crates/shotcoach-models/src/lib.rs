//! Shared data models for the ShotCoach feedback engine.
//!
//! This crate provides Serde-serializable types for:
//! - Coaching instructions and their categories/priorities
//! - Visual aids attached to instructions (arrows, grids)
//! - Feedback batches produced per analysis cycle
//! - Visual overlay cues and their on-screen lifetime

pub mod feedback;
pub mod instruction;
pub mod visual_cue;

// Re-export common types
pub use feedback::Feedback;
pub use instruction::{
    ArrowDirection, CategoryParseError, GridPattern, Instruction, InstructionCategory,
    InstructionPriority, VisualAid,
};
pub use visual_cue::{ActiveCueSet, LightHorizontal, LightVertical, VisualCue};
