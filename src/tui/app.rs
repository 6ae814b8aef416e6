//! # TUI Application Core
//!
//! Session state for the debate viewer: inputs, run status and the
//! transcript cursor.

use crate::core::{DebateError, Stance};
use crate::features::debate::{DebateConfig, Transcript, TranscriptViewer};

/// Turn budget bounds and step offered by the turn selector
pub const MIN_SELECTABLE_TURNS: i64 = 2;
pub const MAX_SELECTABLE_TURNS: i64 = 10;
pub const TURN_STEP: i64 = 2;

/// Snap a requested budget onto the selector's range and step, rounding down
fn selectable_turns(max_turns: i64) -> i64 {
    let clamped = max_turns.clamp(MIN_SELECTABLE_TURNS, MAX_SELECTABLE_TURNS);
    clamped - (clamped - MIN_SELECTABLE_TURNS) % TURN_STEP
}

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Debate,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Debate => "Debate",
            Screen::Help => "Help",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Screen::Debate => '1',
            Screen::Help => '?',
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Debate, Screen::Help]
    }
}

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Where the current debate run stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running { completed: u32, max_turns: u32 },
    Finished,
    Failed(String),
}

/// Main application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Input buffer for topic entry
    pub input_buffer: String,
    /// Topic for the next debate
    pub topic: String,
    /// Turn budget for the next debate
    pub max_turns: i64,
    /// Status of the current or last run
    pub run_status: RunStatus,
    /// Cursor over the last completed transcript
    pub viewer: Option<TranscriptViewer>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(topic: &str, max_turns: i64) -> Self {
        App {
            current_screen: Screen::Debate,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            topic: topic.to_string(),
            max_turns: selectable_turns(max_turns),
            run_status: RunStatus::Idle,
            viewer: None,
            error_message: None,
            status_message: None,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.run_status, RunStatus::Running { .. })
    }

    pub fn start_editing(&mut self) {
        if self.is_running() {
            return;
        }
        self.input_mode = InputMode::Editing;
        self.input_buffer = self.topic.clone();
    }

    pub fn submit_input(&mut self) {
        self.topic = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn increase_turns(&mut self) {
        if !self.is_running() {
            self.max_turns = (self.max_turns + TURN_STEP).min(MAX_SELECTABLE_TURNS);
        }
    }

    pub fn decrease_turns(&mut self) {
        if !self.is_running() {
            self.max_turns = (self.max_turns - TURN_STEP).max(MIN_SELECTABLE_TURNS);
        }
    }

    /// Validate the inputs and mark a run as started.
    ///
    /// Returns `None` while a run is already in progress or when the inputs
    /// are invalid (the error is shown in the status bar).
    pub fn begin_run(&mut self) -> Option<DebateConfig> {
        if self.is_running() {
            return None;
        }
        match DebateConfig::new(self.topic.clone(), self.max_turns) {
            Ok(config) => {
                self.run_status = RunStatus::Running {
                    completed: 0,
                    max_turns: config.max_turns(),
                };
                self.viewer = None;
                self.error_message = None;
                self.status_message = Some("Debate started".to_string());
                Some(config)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                None
            }
        }
    }

    pub fn on_turn_completed(&mut self, turn: u32, speaker: Stance) {
        if let RunStatus::Running { completed, .. } = &mut self.run_status {
            *completed = turn;
            self.status_message = Some(format!("{speaker} finished turn {turn}"));
        }
    }

    pub fn on_debate_finished(&mut self, result: Result<Transcript, DebateError>) {
        match result {
            Ok(transcript) => {
                self.viewer = Some(TranscriptViewer::new(transcript));
                self.run_status = RunStatus::Finished;
                self.error_message = None;
                self.status_message = Some("Debate ready".to_string());
            }
            Err(e) => {
                self.viewer = None;
                self.run_status = RunStatus::Failed(e.to_string());
                self.error_message = Some(e.to_string());
                self.status_message = None;
            }
        }
    }

    pub fn next_turn(&mut self) {
        if let Some(viewer) = &mut self.viewer {
            viewer.next();
        }
    }

    pub fn previous_turn(&mut self) {
        if let Some(viewer) = &mut self.viewer {
            viewer.previous();
        }
    }

    pub fn first_turn(&mut self) {
        if let Some(viewer) = &mut self.viewer {
            viewer.first();
        }
    }

    pub fn last_turn(&mut self) {
        if let Some(viewer) = &mut self.viewer {
            viewer.last();
        }
    }

    /// True once the last turn of a finished debate is on screen
    pub fn debate_completed(&self) -> bool {
        self.viewer.as_ref().is_some_and(TranscriptViewer::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::debate::DebateState;

    fn finished_transcript(turns: u32) -> Transcript {
        let config = DebateConfig::new("topic", turns as i64).unwrap();
        let mut state = DebateState::new(&config);
        for turn in 1..=turns {
            state = state.record(format!("argument {turn}"));
        }
        state.into_transcript().unwrap()
    }

    #[test]
    fn test_initial_turns_snap_to_selector_steps() {
        assert_eq!(App::new("topic", 3).max_turns, 2);
        assert_eq!(App::new("topic", 7).max_turns, 6);
        assert_eq!(App::new("topic", 1).max_turns, 2);
        assert_eq!(App::new("topic", 25).max_turns, 10);

        let mut app = App::new("topic", 5);
        assert_eq!(app.max_turns, 4);
        app.increase_turns();
        assert_eq!(app.max_turns, 6);
        app.decrease_turns();
        app.decrease_turns();
        assert_eq!(app.max_turns, 2);
    }

    #[test]
    fn test_turn_selector_steps_and_clamps() {
        let mut app = App::new("topic", 6);
        app.increase_turns();
        assert_eq!(app.max_turns, 8);
        app.increase_turns();
        app.increase_turns();
        assert_eq!(app.max_turns, 10);
        for _ in 0..10 {
            app.decrease_turns();
        }
        assert_eq!(app.max_turns, 2);
        assert_eq!(App::new("topic", 50).max_turns, 10);
    }

    #[test]
    fn test_topic_editing() {
        let mut app = App::new("old", 6);
        app.start_editing();
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.input_buffer, "old");
        app.backspace();
        app.backspace();
        app.backspace();
        for c in "  new topic ".chars() {
            app.push_char(c);
        }
        app.submit_input();
        assert_eq!(app.topic, "new topic");
        assert_eq!(app.input_mode, InputMode::Normal);

        app.start_editing();
        app.push_char('x');
        app.cancel_input();
        assert_eq!(app.topic, "new topic");
    }

    #[test]
    fn test_begin_run_rejects_empty_topic() {
        let mut app = App::new("", 6);
        assert!(app.begin_run().is_none());
        assert!(app.error_message.as_deref().unwrap().contains("topic"));
        assert_eq!(app.run_status, RunStatus::Idle);
    }

    #[test]
    fn test_run_lifecycle() {
        let mut app = App::new("topic", 2);
        let config = app.begin_run().unwrap();
        assert_eq!(config.max_turns(), 2);
        assert!(app.is_running());
        assert!(app.begin_run().is_none(), "second start is ignored while running");

        app.on_turn_completed(1, Stance::For);
        assert_eq!(app.run_status, RunStatus::Running { completed: 1, max_turns: 2 });

        app.on_debate_finished(Ok(finished_transcript(2)));
        assert_eq!(app.run_status, RunStatus::Finished);
        assert!(!app.debate_completed());
        app.next_turn();
        app.next_turn();
        assert!(app.debate_completed());
        app.previous_turn();
        assert_eq!(app.viewer.as_ref().unwrap().current(), 1);
    }

    #[test]
    fn test_failed_run_exposes_no_transcript() {
        let mut app = App::new("topic", 4);
        app.begin_run().unwrap();
        app.on_turn_completed(1, Stance::For);
        app.on_debate_finished(Err(DebateError::GenerationFailure {
            turn: 2,
            stance: Stance::Against,
            reason: "OpenAI API error: 500".to_string(),
        }));

        assert!(app.viewer.is_none());
        assert!(matches!(app.run_status, RunStatus::Failed(_)));
        assert!(app.error_message.as_deref().unwrap().contains("turn 2"));
        app.next_turn();
        assert!(!app.debate_completed());
    }

    #[test]
    fn test_new_run_discards_previous_transcript() {
        let mut app = App::new("topic", 2);
        app.begin_run().unwrap();
        app.on_debate_finished(Ok(finished_transcript(2)));
        assert!(app.viewer.is_some());

        app.begin_run().unwrap();
        assert!(app.viewer.is_none());
    }
}
