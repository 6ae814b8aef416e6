//! # Features Layer
//!
//! Debate control flow and the personas that take part.

pub mod debate;
pub mod personas;

pub use debate::{
    next_state, DebateConfig, DebateController, DebateState, Transcript, TranscriptViewer,
    TurnState, Utterance,
};
pub use personas::{Persona, PersonaManager, PersonaResponder, PromptBuilder};
