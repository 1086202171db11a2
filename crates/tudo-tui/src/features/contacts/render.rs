//! Contacts overlay view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use super::ContactsState;
use crate::features::todos::PaneFocus;
use crate::render::{FIELD_HEIGHT, centered_rect, render_feedback};

pub fn render(frame: &mut Frame, state: &ContactsState, area: Rect) {
    let panel = centered_rect(56, 18, area);
    frame.render_widget(Clear, panel);
    let block = Block::default().borders(Borders::ALL).title("Contacts");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(FIELD_HEIGHT * 2),
            Constraint::Length(1),
        ])
        .split(inner);

    render_list(frame, state, chunks[0]);
    render_entry(frame, state, chunks[1]);
    render_feedback(frame, state.error.as_deref(), None, chunks[2]);
}

fn render_list(frame: &mut Frame, state: &ContactsState, area: Rect) {
    let items: Vec<ListItem> = state
        .book
        .contacts()
        .iter()
        .map(|contact| {
            ListItem::new(Line::from(vec![
                Span::raw(contact.name.clone()),
                Span::styled(
                    format!("  ({})", contact.email),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let focused = state.focus == PaneFocus::List;
    let list = List::new(items)
        .highlight_style(if focused {
            Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.book.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_entry(frame: &mut Frame, state: &ContactsState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
        ])
        .split(area);

    let form_focused = state.focus == PaneFocus::Form;
    for (idx, field) in state.form.fields.iter().enumerate() {
        let field_focused = form_focused && idx == state.form.focus;
        let border_style = if field_focused {
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

        if field_focused {
            let x = inner.x + field.buffer.cursor_column().min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
