//! # Debate TUI
//!
//! Terminal user interface for running and stepping through debates.
//!
//! Usage: `cargo run --features tui --bin debate-tui`

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenvy::dotenv;
use log::{debug, error, info};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use debate::tui::app::InputMode;
use debate::tui::event::{map_key_event, KeyAction};
use debate::tui::{App, Event, EventHandler, Screen};
use debate::{controller_from_config, Config, DebateController};

/// TUI refresh rate
const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    ).init();

    let config = Config::from_env()?;
    let controller = controller_from_config(&config);

    info!("Starting debate TUI with model {}", config.model);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config.default_topic, config.default_max_turns);

    // Create event handler
    let (mut events, event_tx) = EventHandler::new(TICK_RATE);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events, &event_tx, &controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("Debate TUI shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    event_tx: &UnboundedSender<Event>,
    controller: &DebateController,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            debate::tui::ui::render(frame, app);
        })?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = map_key_event(key, app.input_mode == InputMode::Editing);
                    handle_action(app, action, event_tx, controller);
                }
                Event::TurnCompleted { turn, speaker } => {
                    app.on_turn_completed(turn, speaker);
                }
                Event::DebateFinished(result) => {
                    if let Err(e) = &result {
                        error!("Debate failed: {e}");
                    }
                    app.on_debate_finished(result);
                }
                Event::Tick | Event::Resize(_, _) => {
                    // Terminal will redraw automatically
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(
    app: &mut App,
    action: KeyAction,
    event_tx: &UnboundedSender<Event>,
    controller: &DebateController,
) {
    match action {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::SwitchScreen(screen) => app.switch_screen(screen),
        KeyAction::Back => app.switch_screen(Screen::Debate),
        KeyAction::StartInput => app.start_editing(),
        KeyAction::SubmitInput => app.submit_input(),
        KeyAction::CancelInput => app.cancel_input(),
        KeyAction::Char(c) => app.push_char(c),
        KeyAction::Backspace => app.backspace(),
        KeyAction::MoreTurns => app.increase_turns(),
        KeyAction::FewerTurns => app.decrease_turns(),
        KeyAction::NextTurn => app.next_turn(),
        KeyAction::PreviousTurn => app.previous_turn(),
        KeyAction::FirstTurn => app.first_turn(),
        KeyAction::LastTurn => app.last_turn(),
        KeyAction::StartDebate => {
            let Some(config) = app.begin_run() else {
                return;
            };
            app.switch_screen(Screen::Debate);

            let controller = controller.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let turn_tx = tx.clone();
                let result = controller
                    .run_with_observer(&config, |utterance| {
                        let event = Event::TurnCompleted {
                            turn: utterance.turn,
                            speaker: utterance.speaker,
                        };
                        if turn_tx.send(event).is_err() {
                            debug!("Event loop closed, dropping progress for turn {}", utterance.turn);
                        }
                    })
                    .await;
                if tx.send(Event::DebateFinished(result)).is_err() {
                    debug!("Event loop closed before the debate finished");
                }
            });
        }
        KeyAction::None => {}
    }
}
