//! # Transcript
//!
//! Utterances, the finished transcript of a run, and clamped read-only
//! navigation over it for turn-by-turn display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Stance;

/// One persona's generated text for one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: Stance,
    pub content: String,
    /// 1-based
    pub turn: u32,
    pub generated_at: DateTime<Utc>,
}

impl Utterance {
    pub fn new(speaker: Stance, content: impl Into<String>, turn: u32) -> Self {
        Self {
            speaker,
            content: content.into(),
            turn,
            generated_at: Utc::now(),
        }
    }
}

/// Completed debate. Only produced by a run that finished every turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub(super) id: Uuid,
    pub(super) topic: String,
    pub(super) max_turns: u32,
    pub(super) utterances: Vec<Utterance>,
}

impl Transcript {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Turn-by-turn cursor over a completed transcript.
///
/// The cursor is 1-based and always clamped into `[1, len]`.
#[derive(Debug, Clone)]
pub struct TranscriptViewer {
    transcript: Transcript,
    current: usize,
}

impl TranscriptViewer {
    /// Starts on the first turn
    pub fn new(transcript: Transcript) -> Self {
        let current = usize::from(!transcript.is_empty());
        Self { transcript, current }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn go_to(&mut self, turn: usize) -> usize {
        self.current = if self.is_empty() { 0 } else { turn.clamp(1, self.len()) };
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current.saturating_add(1))
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn first(&mut self) -> usize {
        self.go_to(1)
    }

    pub fn last(&mut self) -> usize {
        self.go_to(self.len())
    }

    pub fn has_next(&self) -> bool {
        self.current < self.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn current_utterance(&self) -> Option<&Utterance> {
        self.current
            .checked_sub(1)
            .and_then(|idx| self.transcript.utterances.get(idx))
    }

    /// Turns `1..=current`
    pub fn visible(&self) -> &[Utterance] {
        &self.transcript.utterances[..self.current]
    }

    /// Fraction of the configured turn budget shown so far
    pub fn progress(&self) -> f64 {
        match self.transcript.max_turns {
            0 => 0.0,
            max => (self.current as f64 / max as f64).min(1.0),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.current >= self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::debate::{DebateConfig, DebateState};

    fn transcript(turns: u32) -> Transcript {
        let config = DebateConfig::new("Should AI replace teachers?", turns as i64).unwrap();
        let mut state = DebateState::new(&config);
        for turn in 1..=turns {
            state = state.record(format!("argument {turn}"));
        }
        state.into_transcript().unwrap()
    }

    #[test]
    fn test_viewer_starts_on_first_turn() {
        let viewer = TranscriptViewer::new(transcript(4));
        assert_eq!(viewer.current(), 1);
        assert_eq!(viewer.visible().len(), 1);
        assert_eq!(viewer.current_utterance().unwrap().speaker, Stance::For);
        assert!(!viewer.has_previous());
        assert!(viewer.has_next());
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut viewer = TranscriptViewer::new(transcript(2));
        assert_eq!(viewer.previous(), 1);
        assert_eq!(viewer.next(), 2);
        assert_eq!(viewer.next(), 2);
        assert!(viewer.is_complete());
        assert_eq!(viewer.go_to(0), 1);
        assert_eq!(viewer.go_to(99), 2);
    }

    #[test]
    fn test_visible_and_progress_follow_cursor() {
        let mut viewer = TranscriptViewer::new(transcript(6));
        viewer.go_to(3);
        let visible = viewer.visible();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible.last().unwrap().content, "argument 3");
        assert!((viewer.progress() - 0.5).abs() < f64::EPSILON);

        viewer.last();
        assert!((viewer.progress() - 1.0).abs() < f64::EPSILON);
        viewer.first();
        assert_eq!(viewer.current(), 1);
    }

    #[test]
    fn test_transcript_json_export() {
        let transcript = transcript(2);
        let json = transcript.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], transcript.id().to_string());
        assert_eq!(value["topic"], "Should AI replace teachers?");
        assert_eq!(value["max_turns"], 2);
        assert_eq!(value["utterances"][0]["speaker"], "FOR");
        assert_eq!(value["utterances"][1]["speaker"], "AGAINST");
        assert_eq!(value["utterances"][1]["turn"], 2);
    }
}
