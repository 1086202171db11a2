//! Pure view functions for the TUI.
//!
//! Functions here take state by immutable reference and draw to a ratatui
//! frame; they never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::Form;
use crate::features::{contacts, login, register, todos};
use crate::state::{AppState, Screen};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Height of one bordered form field.
pub(crate) const FIELD_HEIGHT: u16 = 3;

/// Spinner frames for the status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    match &app.screen {
        Screen::Login(state) => login::render(frame, state, chunks[0]),
        Screen::Register(state) => register::render(frame, state, chunks[0]),
        Screen::Todos(state) => todos::render(frame, state, chunks[0]),
    }

    if let Some(overlay) = &app.overlay {
        contacts::render(frame, overlay, chunks[0]);
    }

    render_status_line(app, frame, chunks[1]);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = if app.overlay.is_some() {
        "tab focus · enter add · d delete · esc back"
    } else {
        match &app.screen {
            Screen::Login(_) => "enter sign in · ctrl+r create account · esc quit",
            Screen::Register(_) => "enter create account · esc back to login",
            Screen::Todos(_) => "tab focus · space done · e edit · d delete · ctrl+u contacts",
        }
    };

    let mut right = String::new();
    if app.shared.jobs.is_any_running() {
        right.push_str(SPINNER_FRAMES[app.shared.spinner_frame % SPINNER_FRAMES.len()]);
        right.push(' ');
    }
    if let Screen::Todos(_) = &app.screen {
        right.push_str(if app.shared.options.remote {
            "remote"
        } else {
            "local"
        });
    }

    let pad = (area.width as usize)
        .saturating_sub(hints.chars().count() + right.chars().count() + 2);
    let line = Line::from(vec![
        Span::styled(format!(" {hints}"), Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Returns a rect of the given size centered in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draws a form as a stack of bordered single-line fields and places the
/// terminal cursor inside the focused one.
pub(crate) fn render_form(frame: &mut Frame, form: &Form, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focus;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label);
        let inner = block.inner(rows[idx]);
        frame.render_widget(
            Paragraph::new(field.display_value()).block(block),
            rows[idx],
        );

        if focused {
            let x = inner.x + field.buffer.cursor_column().min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

/// One-line error (red) or notice (green) under a form.
pub(crate) fn render_feedback(
    frame: &mut Frame,
    error: Option<&str>,
    notice: Option<&str>,
    area: Rect,
) {
    let line = if let Some(message) = error {
        Line::styled(message.to_string(), Style::default().fg(Color::Red))
    } else if let Some(message) = notice {
        Line::styled(message.to_string(), Style::default().fg(Color::Green))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Screen title, bold and centered.
pub(crate) fn render_title(frame: &mut Frame, title: &str, area: Rect) {
    let line = Line::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}
