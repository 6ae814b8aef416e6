//! # Debate UI
//!
//! Topic and turn inputs, run progress, and the turn currently on display.

use crate::core::Stance;
use crate::tui::app::InputMode;
use crate::tui::ui::titled_block;
use crate::tui::{App, RunStatus};
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph, Wrap};

/// Render the debate screen
pub fn render_debate(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Inputs
            Constraint::Length(3),  // Progress
            Constraint::Min(0),     // Current turn
            Constraint::Length(3),  // Navigation / completion
        ])
        .split(area);

    render_inputs(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_current_turn(frame, app, chunks[2]);
    render_navigation(frame, app, chunks[3]);
}

fn stance_label(stance: Stance) -> Span<'static> {
    match stance {
        Stance::For => Span::styled(
            "🟢 FOR",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Stance::Against => Span::styled(
            "🔴 AGAINST",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let topic = if app.input_mode == InputMode::Editing {
        Line::from(vec![
            Span::raw("Topic: "),
            Span::styled(format!("{}_", app.input_buffer), Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::raw("Topic: "),
            Span::styled(app.topic.clone(), Style::default().fg(Color::White)),
        ])
    };

    let turns = Line::from(vec![
        Span::raw(format!("Turns: {}", app.max_turns)),
        Span::styled("   (+/- to change, e to edit topic, s to start)", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(vec![topic, turns]).block(titled_block("Setup"));
    frame.render_widget(paragraph, area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let (ratio, label, color) = match (&app.run_status, &app.viewer) {
        (RunStatus::Running { completed, max_turns }, _) => (
            f64::from(*completed) / f64::from((*max_turns).max(1)),
            format!("Generating turn {} of {}...", (completed + 1).min(*max_turns), max_turns),
            Color::Yellow,
        ),
        (_, Some(viewer)) => (
            viewer.progress(),
            format!("Turn {} of {}", viewer.current(), viewer.transcript().max_turns()),
            Color::Green,
        ),
        _ => (0.0, "No debate yet".to_string(), Color::DarkGray),
    };

    let gauge = Gauge::default()
        .block(titled_block("Debate Progress"))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_current_turn(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match (&app.viewer, &app.run_status) {
        (Some(viewer), _) => match viewer.current_utterance() {
            Some(utterance) => {
                let mut lines = vec![
                    Line::from(vec![
                        stance_label(utterance.speaker),
                        Span::styled(
                            format!("  {}", utterance.generated_at.format("%H:%M:%S")),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(""),
                ];
                lines.extend(utterance.content.trim().lines().map(|l| Line::from(l.to_string())));
                lines
            }
            None => vec![Line::from("The transcript is empty.")],
        },
        (None, RunStatus::Running { .. }) => {
            vec![Line::from("The debaters are preparing their arguments...")]
        }
        (None, RunStatus::Failed(reason)) => vec![
            Line::from(Span::styled("The debate could not be completed.", Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(reason.clone()),
        ],
        (None, _) => vec![Line::from("Press 's' to start a debate.")],
    };

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Current Turn"))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_navigation(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.viewer {
        Some(_) if app.debate_completed() => Line::from(Span::styled(
            "🎉 Debate completed! Press 's' to begin a new one.",
            Style::default().fg(Color::Green),
        )),
        Some(viewer) => {
            let mut spans = vec![];
            if viewer.has_previous() {
                spans.push(Span::styled("⬅️ Previous Turn (←)", Style::default().fg(Color::Cyan)));
                spans.push(Span::raw("    "));
            }
            if viewer.has_next() {
                spans.push(Span::styled("Next Turn ➡️ (→)", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        }
        None => Line::from(""),
    };

    frame.render_widget(Paragraph::new(line).block(titled_block("Navigation")), area);
}
