//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects beyond drawing to the frame.

pub mod keypad;

use crate::app::AppState;
use keypad::{shortcut, KEYPAD};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of one keypad cell, brackets included
const KEY_WIDTH: usize = 7;

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(8),    // Keypad
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_display(frame, chunks[0], state);
    render_keypad(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Style helper that drops colors when disabled
fn styled(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default().add_modifier(style.add_modifier)
    }
}

/// Render the expression line and the main display
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_color = if state.error.is_some() {
        Color::Red
    } else {
        Color::Cyan
    };

    let lines = vec![
        Line::from(Span::styled(
            state.expression_text(),
            styled(state, Style::default().fg(Color::Gray)),
        )),
        Line::from(Span::styled(
            state.display_text(),
            styled(state, Style::default().add_modifier(Modifier::BOLD)),
        )),
    ];

    let display = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" deskcalc ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(border_color))),
        )
        .alignment(Alignment::Right);

    frame.render_widget(display, area);
}

/// Render the keypad, highlighting the last key pressed
fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = KEYPAD
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| match cell {
                    Some(action) => {
                        let label = action.label();
                        let text = format!("{:^width$}", format!("[{}]", label), width = KEY_WIDTH);
                        let pressed = state.last_key.as_deref() == Some(label.as_str());
                        let style = if pressed {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        } else {
                            Style::default()
                        };
                        Span::styled(text, styled(state, style))
                    }
                    None => Span::raw(" ".repeat(KEY_WIDTH)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keypad = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(keypad, area);
}

/// Render status bar with the latest notice and hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "F1: Help | Esc: Clear | q: Quit";

    let line = match state.status.message {
        Some(ref message) => Line::from(vec![
            Span::styled(
                message.as_str(),
                styled(state, Style::default().fg(Color::Yellow)),
            ),
            Span::raw(" | "),
            Span::styled(hints, styled(state, Style::default().fg(Color::Gray))),
        ]),
        None => Line::from(Span::styled(
            hints,
            styled(state, Style::default().fg(Color::Gray)),
        )),
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 80, area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut seen: Vec<&str> = Vec::new();
    for action in KEYPAD.iter().flatten().flatten() {
        let keys = shortcut(*action);
        if seen.contains(&keys) {
            continue;
        }
        seen.push(keys);

        let label = match action {
            libdeskcalc::CalcAction::Digit(_) => "digits".to_string(),
            other => other.label(),
        };
        help_text.push(Line::from(format!("  {:<12} {}", keys, label)));
    }

    help_text.extend([
        Line::from(""),
        Line::from("  q          Quit"),
        Line::from("  F1         Toggle help"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ]);

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 40, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            styled(
                state,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Red))),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
