//! # Debate State Machine
//!
//! Validated debate input, the three-state turn alternator and the per-run
//! state it drives.

use uuid::Uuid;

use super::{Transcript, Utterance};
use crate::core::{DebateError, Stance};

/// Fewest turns that still give each side one argument
pub const MIN_TURNS: i64 = 2;

/// Immutable input for one debate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateConfig {
    topic: String,
    max_turns: u32,
}

impl DebateConfig {
    /// Validate a topic and turn budget. Odd budgets are accepted.
    pub fn new(topic: impl Into<String>, max_turns: i64) -> Result<Self, DebateError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(DebateError::InvalidConfig("topic must not be empty".to_string()));
        }
        if max_turns < MIN_TURNS {
            return Err(DebateError::InvalidConfig(format!(
                "max_turns must be at least {MIN_TURNS}, got {max_turns}"
            )));
        }
        let max_turns = u32::try_from(max_turns).map_err(|_| {
            DebateError::InvalidConfig(format!("max_turns {max_turns} is too large"))
        })?;

        Ok(Self { topic, max_turns })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    ForTurn,
    AgainstTurn,
    Done,
}

impl TurnState {
    /// FOR always opens
    pub const INITIAL: TurnState = TurnState::ForTurn;

    pub fn for_speaker(stance: Stance) -> Self {
        match stance {
            Stance::For => TurnState::ForTurn,
            Stance::Against => TurnState::AgainstTurn,
        }
    }

    /// Who speaks in this state, `None` once the debate is over
    pub fn speaker(self) -> Option<Stance> {
        match self {
            TurnState::ForTurn => Some(Stance::For),
            TurnState::AgainstTurn => Some(Stance::Against),
            TurnState::Done => None,
        }
    }

    pub fn is_done(self) -> bool {
        self == TurnState::Done
    }
}

/// Transition taken after the turn spoken in `current`, where `turn_count`
/// already includes that turn.
pub fn next_state(current: TurnState, turn_count: u32, max_turns: u32) -> TurnState {
    match current.speaker() {
        None => TurnState::Done,
        Some(_) if turn_count >= max_turns => TurnState::Done,
        Some(speaker) => TurnState::for_speaker(speaker.opponent()),
    }
}

/// State of one run. Created fresh per debate and consumed by each turn.
#[derive(Debug, Clone)]
pub struct DebateState {
    id: Uuid,
    config: DebateConfig,
    transcript: Vec<Utterance>,
    turn_count: u32,
    last_speaker: Option<Stance>,
    step: TurnState,
}

impl DebateState {
    pub fn new(config: &DebateConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config: config.clone(),
            transcript: Vec::new(),
            turn_count: 0,
            last_speaker: None,
            step: TurnState::INITIAL,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &DebateConfig {
        &self.config
    }

    pub fn transcript(&self) -> &[Utterance] {
        &self.transcript
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn last_speaker(&self) -> Option<Stance> {
        self.last_speaker
    }

    pub fn step(&self) -> TurnState {
        self.step
    }

    pub fn active_speaker(&self) -> Option<Stance> {
        self.step.speaker()
    }

    /// Append the active speaker's utterance and advance the state machine.
    ///
    /// A `Done` state is returned unchanged.
    pub fn record(mut self, content: String) -> Self {
        let Some(speaker) = self.step.speaker() else {
            return self;
        };

        self.turn_count += 1;
        self.transcript.push(Utterance::new(speaker, content, self.turn_count));
        self.last_speaker = Some(speaker);
        self.step = next_state(self.step, self.turn_count, self.config.max_turns());
        self
    }

    /// Commit the finished run. An unfinished state is handed back as `Err`.
    pub fn into_transcript(self) -> Result<Transcript, DebateState> {
        let complete = self.step.is_done()
            && self.transcript.len() == self.config.max_turns() as usize;
        if !complete {
            return Err(self);
        }

        Ok(Transcript {
            id: self.id,
            topic: self.config.topic,
            max_turns: self.config.max_turns,
            utterances: self.transcript,
        })
    }
}
