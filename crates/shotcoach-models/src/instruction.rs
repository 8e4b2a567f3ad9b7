//! Coaching instruction models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Category of a coaching instruction.
///
/// Categories are mutually exclusive and chosen by keyword precedence in the
/// engine; `Composition` is the default when no keyword group matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum InstructionCategory {
    /// Camera or subject placement (move, step, angle, closer/further)
    Positioning,
    /// Light sources, exposure, shadows
    Lighting,
    /// Framing, cropping, compositional guides
    #[default]
    Composition,
    /// Camera settings (focus, zoom, aperture, shutter, ISO)
    Settings,
    /// When to take the shot
    Timing,
}

impl InstructionCategory {
    /// All categories in engine precedence order.
    pub const ALL: &'static [InstructionCategory] = &[
        InstructionCategory::Positioning,
        InstructionCategory::Lighting,
        InstructionCategory::Composition,
        InstructionCategory::Settings,
        InstructionCategory::Timing,
    ];

    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionCategory::Positioning => "positioning",
            InstructionCategory::Lighting => "lighting",
            InstructionCategory::Composition => "composition",
            InstructionCategory::Settings => "settings",
            InstructionCategory::Timing => "timing",
        }
    }
}

impl fmt::Display for InstructionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstructionCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positioning" => Ok(InstructionCategory::Positioning),
            "lighting" => Ok(InstructionCategory::Lighting),
            "composition" => Ok(InstructionCategory::Composition),
            "settings" => Ok(InstructionCategory::Settings),
            "timing" => Ok(InstructionCategory::Timing),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown instruction category: {0}")]
pub struct CategoryParseError(String);

/// Importance rank of an instruction, assigned purely by batch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InstructionPriority {
    High,
    Medium,
    Low,
}

impl InstructionPriority {
    /// Priority for a 1-based batch position: 1st = high, 2nd = medium,
    /// 3rd and later = low.
    pub fn for_step(step: u32) -> Self {
        match step {
            1 => InstructionPriority::High,
            2 => InstructionPriority::Medium,
            _ => InstructionPriority::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionPriority::High => "high",
            InstructionPriority::Medium => "medium",
            InstructionPriority::Low => "low",
        }
    }
}

impl fmt::Display for InstructionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction for an arrow visual aid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowDirection::Left => "left",
            ArrowDirection::Right => "right",
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
        }
    }
}

/// Grid pattern for a grid visual aid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum GridPattern {
    /// Rule-of-thirds guide lines
    #[default]
    Thirds,
}

/// Visual aid attached to an instruction.
///
/// The engine only ever produces `Arrow` and `Grid`; `Overlay` and
/// `Highlight` are reserved for renderer-injected aids and carry an opaque
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualAid {
    /// Directional arrow
    Arrow { direction: ArrowDirection },

    /// Compositional guide grid
    Grid { pattern: GridPattern },

    /// Reserved: free-form overlay payload
    Overlay { data: serde_json::Value },

    /// Reserved: region highlight payload
    Highlight { data: serde_json::Value },
}

/// One actionable coaching tip derived from free-text AI feedback.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Instruction {
    /// Opaque unique identifier (unique within one feedback batch)
    pub id: Uuid,

    /// 1-based position within the batch
    pub step: u32,

    /// Size of the batch this instruction belongs to
    pub total_steps: u32,

    /// Imperative sentence, capitalized and terminated with punctuation
    pub text: String,

    /// Instruction category
    pub category: InstructionCategory,

    /// Importance rank
    pub priority: InstructionPriority,

    /// Optional visual aid for the overlay renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_aid: Option<VisualAid>,
}

impl Instruction {
    /// Create a new instruction with a fresh id and position-derived priority.
    pub fn new(
        step: u32,
        total_steps: u32,
        text: impl Into<String>,
        category: InstructionCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            step,
            total_steps,
            text: text.into(),
            category,
            priority: InstructionPriority::for_step(step),
            visual_aid: None,
        }
    }

    /// Attach a visual aid.
    pub fn with_visual_aid(mut self, aid: VisualAid) -> Self {
        self.visual_aid = Some(aid);
        self
    }

    /// Override the position-derived priority.
    pub fn with_priority(mut self, priority: InstructionPriority) -> Self {
        self.priority = priority;
        self
    }
}
