//! Debate error taxonomy
//!
//! Both variants are fatal to the current run. Transcript navigation never
//! errors: out-of-range requests are clamped by the viewer.

use crate::core::Stance;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebateError {
    /// Rejected before any turn runs
    #[error("invalid debate config: {0}")]
    InvalidConfig(String),

    /// The generation call for a turn failed or produced nothing usable.
    /// The whole run is aborted and no partial transcript is returned.
    #[error("generation failed on turn {turn} ({stance}): {reason}")]
    GenerationFailure {
        turn: u32,
        stance: Stance,
        reason: String,
    },
}

impl DebateError {
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, DebateError::InvalidConfig(_))
    }

    /// Turn that failed, for generation failures
    pub fn failed_turn(&self) -> Option<u32> {
        match self {
            DebateError::GenerationFailure { turn, .. } => Some(*turn),
            DebateError::InvalidConfig(_) => None,
        }
    }
}
