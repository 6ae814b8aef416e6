// Core layer - config, errors, stances and the generation client
pub mod core;

// Features layer - debate control flow and personas
pub mod features;

// TUI layer - terminal presentation (optional feature)
#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::core::{
    generator_from_config, Config, DebateError, OpenAiGenerator, Stance, TextGenerator,
    TimeoutGenerator,
};

pub use features::{
    // Debate
    DebateConfig, DebateController, DebateState, Transcript, TranscriptViewer, TurnState, Utterance,
    // Personas
    Persona, PersonaManager, PersonaResponder,
};

/// Wire a controller to the configured OpenAI-compatible endpoint
pub fn controller_from_config(config: &Config) -> DebateController {
    DebateController::new(PersonaResponder::new(
        PersonaManager::from_config(config),
        generator_from_config(config),
    ))
}
