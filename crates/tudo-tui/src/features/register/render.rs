//! Registration screen view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::RegisterState;
use crate::render::{FIELD_HEIGHT, centered_rect, render_feedback, render_form, render_title};

pub fn render(frame: &mut Frame, state: &RegisterState, area: Rect) {
    let height = 2 + FIELD_HEIGHT * 4 + 1;
    let panel = centered_rect(48, height, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT * 4),
            Constraint::Length(1),
        ])
        .split(panel);

    render_title(frame, "Create an account", chunks[0]);
    render_form(frame, &state.form, chunks[2]);
    render_feedback(frame, state.error.as_deref(), None, chunks[3]);
}
