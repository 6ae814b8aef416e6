//! # Debate Orchestrator
//!
//! Drives the FOR/AGAINST alternation to completion and assembles the transcript.

use log::{debug, error, info};

use super::{DebateConfig, DebateState, Transcript, Utterance};
use crate::core::DebateError;
use crate::features::personas::PersonaResponder;

/// Runs debates between the two personas of a responder
#[derive(Clone)]
pub struct DebateController {
    responder: PersonaResponder,
}

impl DebateController {
    pub fn new(responder: PersonaResponder) -> Self {
        Self { responder }
    }

    /// Validate raw input, then run. Invalid input never reaches the generator.
    pub async fn start(&self, topic: &str, max_turns: i64) -> Result<Transcript, DebateError> {
        let config = DebateConfig::new(topic, max_turns)?;
        self.run(&config).await
    }

    /// Run a complete debate: exactly `max_turns` utterances, FOR first.
    pub async fn run(&self, config: &DebateConfig) -> Result<Transcript, DebateError> {
        self.run_with_observer(config, |_| {}).await
    }

    /// Run a complete debate, calling `on_turn` after each generated turn.
    ///
    /// Observed utterances are progress only. If a later turn fails the run
    /// still returns an error and no transcript.
    pub async fn run_with_observer<F>(
        &self,
        config: &DebateConfig,
        mut on_turn: F,
    ) -> Result<Transcript, DebateError>
    where
        F: FnMut(&Utterance) + Send,
    {
        let mut state = DebateState::new(config);
        info!(
            "Starting debate {} on '{}' ({} turns)",
            state.id(),
            config.topic(),
            config.max_turns()
        );

        loop {
            match state.into_transcript() {
                Ok(transcript) => {
                    info!("Debate {} completed after {} turns", transcript.id(), transcript.len());
                    return Ok(transcript);
                }
                Err(unfinished) => {
                    state = self.take_turn(unfinished).await?;
                    if let Some(utterance) = state.transcript().last() {
                        on_turn(utterance);
                    }
                }
            }
        }
    }

    /// Generate the active speaker's turn and return the advanced state.
    ///
    /// Turns run strictly one after another since each prompt carries every
    /// prior turn. A finished state is returned as is.
    pub async fn take_turn(&self, state: DebateState) -> Result<DebateState, DebateError> {
        let Some(stance) = state.active_speaker() else {
            return Ok(state);
        };
        let turn = state.turn_count() + 1;
        let config = state.config();

        debug!("Turn {}/{}: {} responding", turn, config.max_turns(), stance);

        let content = self
            .responder
            .respond(stance, config.topic(), state.transcript())
            .await
            .map_err(|e| {
                error!("Failed to get AI response for turn {}: {:#}", turn, e);
                DebateError::GenerationFailure {
                    turn,
                    stance,
                    reason: format!("{e:#}"),
                }
            })?;

        if content.trim().is_empty() {
            error!("Empty AI response for turn {}", turn);
            return Err(DebateError::GenerationFailure {
                turn,
                stance,
                reason: "empty response".to_string(),
            });
        }

        Ok(state.record(content))
    }
}
