//! # TUI UI Components
//!
//! Ratatui-based UI rendering for each screen.

mod debate;
mod help;

pub use debate::render_debate;
pub use help::render_help;

use crate::tui::{App, Screen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

/// Main render function - dispatches to screen-specific renderers
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Tab bar
            Constraint::Min(0),     // Main content
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    // Render tab bar
    render_tabs(frame, app, chunks[0]);

    // Render current screen
    match app.current_screen {
        Screen::Debate => render_debate(frame, app, chunks[1]),
        Screen::Help => render_help(frame, app, chunks[1]),
    }

    // Render status bar
    render_status_bar(frame, app, chunks[2]);
}

/// Render the tab bar
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .map(|s| {
            let style = if *s == app.current_screen {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!("[{}] {}", s.key(), s.title())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" AI Debate "))
        .select(Screen::all().iter().position(|s| *s == app.current_screen).unwrap_or(0))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow));

    frame.render_widget(tabs, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let run_status = match &app.run_status {
        crate::tui::RunStatus::Idle => Span::styled("● Idle", Style::default().fg(Color::White)),
        crate::tui::RunStatus::Running { .. } => {
            Span::styled("● Debating", Style::default().fg(Color::Yellow))
        }
        crate::tui::RunStatus::Finished => Span::styled("● Ready", Style::default().fg(Color::Green)),
        crate::tui::RunStatus::Failed(_) => Span::styled("● Failed", Style::default().fg(Color::Red)),
    };

    let mode_status = match app.input_mode {
        crate::tui::app::InputMode::Normal => Span::raw(""),
        crate::tui::app::InputMode::Editing => {
            Span::styled(" [EDITING] ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        }
    };

    let help_hint = Span::styled(" q:Quit ?:Help ", Style::default().fg(Color::DarkGray));

    // Error or status message
    let message = if let Some(err) = &app.error_message {
        Span::styled(format!(" Error: {} ", err), Style::default().fg(Color::Red))
    } else if let Some(status) = &app.status_message {
        Span::styled(format!(" {} ", status), Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };

    let status_line = Line::from(vec![
        run_status,
        Span::raw(" | "),
        mode_status,
        message,
        Span::raw(" "),
        help_hint,
    ]);

    let paragraph = Paragraph::new(status_line)
        .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Helper to create a block with title
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_screen_shows_inputs() {
        let app = App::new("Should AI replace teachers?", 6);
        let text = screen_text(&app);
        assert!(text.contains("Should AI replace teachers?"));
        assert!(text.contains("Turns: 6"));
    }

    #[test]
    fn test_help_screen_renders() {
        let mut app = App::new("topic", 6);
        app.switch_screen(Screen::Help);
        assert!(screen_text(&app).contains("Keybindings"));
    }
}
