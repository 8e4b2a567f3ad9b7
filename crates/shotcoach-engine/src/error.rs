//! Engine error types.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the feedback engine.
///
/// The parser itself is total (malformed input degrades to the fallback
/// instruction), so the only error here is a precondition violation on the
/// lookup operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl EngineError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
