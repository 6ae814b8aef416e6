//! # TUI Event Handling
//!
//! Keyboard input, tick events and debate progress from the background run.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::core::{DebateError, Stance};
use crate::features::debate::Transcript;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for periodic updates
    Tick,
    /// A turn of the running debate was generated
    TurnCompleted { turn: u32, speaker: Stance },
    /// The running debate finished or failed
    DebateFinished(Result<Transcript, DebateError>),
}

/// Event handler that combines keyboard, tick and debate events
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn keyboard event handler
        let key_tx = tx.clone();
        std::thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if key_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if key_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else {
                    // Send tick on poll timeout
                    if key_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        (EventHandler { rx }, tx)
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Switch to screen
    SwitchScreen(crate::tui::Screen),
    /// Go back / Cancel
    Back,
    /// Start editing the topic
    StartInput,
    /// Submit text input
    SubmitInput,
    /// Cancel text input
    CancelInput,
    /// Character input
    Char(char),
    /// Backspace
    Backspace,
    /// Start a new debate
    StartDebate,
    /// Show the next turn
    NextTurn,
    /// Show the previous turn
    PreviousTurn,
    /// Jump to the first turn
    FirstTurn,
    /// Jump to the last turn
    LastTurn,
    /// Raise the turn budget
    MoreTurns,
    /// Lower the turn budget
    FewerTurns,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent, in_edit_mode: bool) -> KeyAction {
    if in_edit_mode {
        // In edit mode, handle text input
        match key.code {
            KeyCode::Esc => KeyAction::CancelInput,
            KeyCode::Enter => KeyAction::SubmitInput,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    } else {
        // Normal mode navigation
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            // Screen switching
            (KeyCode::Char('1'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Debate)
            }
            (KeyCode::Char('?'), _) => KeyAction::SwitchScreen(crate::tui::Screen::Help),
            (KeyCode::Esc, _) => KeyAction::Back,

            // Inputs
            (KeyCode::Char('e'), KeyModifiers::NONE) | (KeyCode::Char('i'), KeyModifiers::NONE) => {
                KeyAction::StartInput
            }
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => KeyAction::MoreTurns,
            (KeyCode::Char('-'), KeyModifiers::NONE) => KeyAction::FewerTurns,
            (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Enter, _) => KeyAction::StartDebate,

            // Turn navigation
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::NextTurn,
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::PreviousTurn,
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::FirstTurn,
            (KeyCode::End, _) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::LastTurn,

            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key_event(key(KeyCode::Right), false), KeyAction::NextTurn);
        assert_eq!(map_key_event(key(KeyCode::Char('h')), false), KeyAction::PreviousTurn);
        assert_eq!(map_key_event(key(KeyCode::Enter), false), KeyAction::StartDebate);
        assert_eq!(map_key_event(key(KeyCode::Char('-')), false), KeyAction::FewerTurns);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_edit_mode_captures_characters() {
        assert_eq!(map_key_event(key(KeyCode::Char('q')), true), KeyAction::Char('q'));
        assert_eq!(map_key_event(key(KeyCode::Enter), true), KeyAction::SubmitInput);
        assert_eq!(map_key_event(key(KeyCode::Esc), true), KeyAction::CancelInput);
    }
}
