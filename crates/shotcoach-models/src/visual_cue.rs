//! Visual overlay cue models.
//!
//! Cues are symbolic tags derived from the current priority instruction's
//! text. The renderer maps each tag to an icon/animation and a screen
//! position; `ActiveCueSet` tracks how long a batch of cues stays on screen.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a cue batch stays on screen (seconds).
pub const DEFAULT_CUE_TTL_SECS: u64 = 5;

/// Vertical placement of a suggested light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LightVertical {
    Top,
    Bottom,
    Mid,
}

impl LightVertical {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightVertical::Top => "top",
            LightVertical::Bottom => "bottom",
            LightVertical::Mid => "mid",
        }
    }
}

/// Horizontal placement of a suggested light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LightHorizontal {
    Left,
    Right,
    Center,
}

impl LightHorizontal {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightHorizontal::Left => "left",
            LightHorizontal::Right => "right",
            LightHorizontal::Center => "center",
        }
    }
}

/// Symbolic overlay cue driving a directional/lighting animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "cue", rename_all = "snake_case")]
pub enum VisualCue {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveForward,
    MoveBack,
    RotateCw,
    RotateCcw,
    AngleHigh,
    AngleLow,
    Light {
        vertical: LightVertical,
        horizontal: LightHorizontal,
    },
}

impl VisualCue {
    /// Returns the cue as its renderer tag, e.g. `move_left` or
    /// `light_top_right`.
    pub fn as_tag(&self) -> String {
        match self {
            VisualCue::MoveLeft => "move_left".to_string(),
            VisualCue::MoveRight => "move_right".to_string(),
            VisualCue::MoveUp => "move_up".to_string(),
            VisualCue::MoveDown => "move_down".to_string(),
            VisualCue::MoveForward => "move_forward".to_string(),
            VisualCue::MoveBack => "move_back".to_string(),
            VisualCue::RotateCw => "rotate_cw".to_string(),
            VisualCue::RotateCcw => "rotate_ccw".to_string(),
            VisualCue::AngleHigh => "angle_high".to_string(),
            VisualCue::AngleLow => "angle_low".to_string(),
            VisualCue::Light {
                vertical,
                horizontal,
            } => format!("light_{}_{}", vertical.as_str(), horizontal.as_str()),
        }
    }

    /// True for movement cues (arrows).
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            VisualCue::MoveLeft
                | VisualCue::MoveRight
                | VisualCue::MoveUp
                | VisualCue::MoveDown
                | VisualCue::MoveForward
                | VisualCue::MoveBack
                | VisualCue::RotateCw
                | VisualCue::RotateCcw
        )
    }

    /// True for lighting cues.
    pub fn is_lighting(&self) -> bool {
        matches!(self, VisualCue::Light { .. })
    }
}

impl fmt::Display for VisualCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Cues currently shown on the viewfinder, with their display lifetime.
///
/// Expiry is a pure timestamp comparison; the presentation layer polls
/// `active()` and clears the overlay once the TTL elapses. New feedback
/// replaces the whole set regardless of the previous set's age.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActiveCueSet {
    /// Cues in emission order (lighting, movement, angle)
    pub cues: Vec<VisualCue>,

    /// When the cues were issued
    pub issued_at: DateTime<Utc>,

    /// Display lifetime in seconds
    pub ttl_secs: u64,
}

impl ActiveCueSet {
    /// Create a cue set issued now with the default TTL.
    pub fn new(cues: Vec<VisualCue>) -> Self {
        Self {
            cues,
            issued_at: Utc::now(),
            ttl_secs: DEFAULT_CUE_TTL_SECS,
        }
    }

    /// Override the display lifetime.
    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Check if the display lifetime has elapsed.
    pub fn is_expired(&self) -> bool {
        let elapsed = Utc::now().signed_duration_since(self.issued_at);
        elapsed.num_seconds() >= self.ttl_secs as i64
    }

    /// Cues still eligible for display: the full set until expiry, then none.
    pub fn active(&self) -> &[VisualCue] {
        if self.is_expired() {
            &[]
        } else {
            &self.cues
        }
    }
}
