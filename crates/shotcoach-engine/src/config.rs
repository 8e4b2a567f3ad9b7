//! Engine configuration.

use serde::Deserialize;

/// Tunables for the feedback instruction engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score at or above which the shot is declared perfect
    pub perfect_score_threshold: i32,
    /// Maximum instructions kept per batch
    pub max_instructions: usize,
    /// Minimum trimmed candidate length kept by the parser
    pub min_candidate_len: usize,
    /// Display lifetime of a visual cue batch (seconds)
    pub cue_ttl_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            perfect_score_threshold: 90,
            max_instructions: 3,
            min_candidate_len: 6,
            cue_ttl_secs: 5,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            perfect_score_threshold: std::env::var("SHOTCOACH_PERFECT_SCORE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.perfect_score_threshold),
            max_instructions: std::env::var("SHOTCOACH_MAX_INSTRUCTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_instructions),
            min_candidate_len: std::env::var("SHOTCOACH_MIN_CANDIDATE_LEN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_candidate_len),
            cue_ttl_secs: std::env::var("SHOTCOACH_CUE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.cue_ttl_secs),
        }
    }
}
