//! # Debate Feature
//!
//! Two-persona debates: FOR opens, speakers strictly alternate, and the run
//! ends once the turn budget is spent.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with explicit turn state machine and transcript viewer

pub mod orchestrator;
pub mod state;
pub mod transcript;

pub use orchestrator::DebateController;
pub use state::{next_state, DebateConfig, DebateState, TurnState, MIN_TURNS};
pub use transcript::{Transcript, TranscriptViewer, Utterance};
