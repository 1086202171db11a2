//! Task list screen view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::state::{PaneFocus, TodoListState};
use crate::render::{FIELD_HEIGHT, render_feedback, render_title};

pub fn render(frame: &mut Frame, state: &TodoListState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(FIELD_HEIGHT * 2),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, "My tasks", chunks[0]);
    render_list(frame, state, chunks[1]);
    render_entry(frame, state, chunks[2]);
    render_feedback(frame, state.error.as_deref(), None, chunks[3]);
}

fn render_list(frame: &mut Frame, state: &TodoListState, area: Rect) {
    let focused = state.focus == PaneFocus::List;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = state
        .store
        .tasks()
        .iter()
        .map(|task| {
            let checkbox = if task.completed { "[x] " } else { "[ ] " };
            let title_style = if task.completed {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox, Style::default().fg(Color::DarkGray)),
                Span::styled(task.title.clone(), title_style),
                Span::raw("  "),
                Span::styled(task.description.clone(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.store.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_entry(frame: &mut Frame, state: &TodoListState, area: Rect) {
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
        let title = if idx == 0 && state.editing.is_some() {
            "Title (editing)"
        } else {
            field.label
        };
        let border_style = if field_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);
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
