//! # Help UI
//!
//! Keybindings and usage help.

use crate::tui::App;
use crate::tui::ui::titled_block;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Render the help screen
pub fn render_help(frame: &mut Frame, _app: &App, area: Rect) {
    let keybindings = vec![
        ("General", vec![
            ("q", "Quit application"),
            ("Ctrl+c", "Force quit"),
            ("1", "Debate screen"),
            ("?", "Show this help"),
            ("Esc", "Go back / Cancel"),
        ]),
        ("Setup", vec![
            ("e / i", "Edit topic"),
            ("+ / -", "Change number of turns (2-10)"),
            ("s / Enter", "Start debate"),
        ]),
        ("Transcript", vec![
            ("l / Right", "Next turn"),
            ("h / Left", "Previous turn"),
            ("g / Home", "First turn"),
            ("G / End", "Last turn"),
        ]),
        ("Text Input", vec![
            ("Enter", "Submit input"),
            ("Esc", "Cancel input"),
            ("Backspace", "Delete character"),
        ]),
    ];

    let mut lines = vec![];

    for (section, bindings) in keybindings {
        lines.push(Line::from(vec![
            Span::styled(section, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(""));

        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<15}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ]));
        }

        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Keybindings"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}
