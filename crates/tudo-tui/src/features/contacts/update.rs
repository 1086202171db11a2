//! Contacts overlay reducer. Purely local: no effects, no navigation beyond
//! closing the overlay.

use crossterm::event::{KeyCode, KeyEvent};

use super::ContactsState;
use crate::features::ERR_FILL_ALL;
use crate::features::todos::PaneFocus;

/// What the top-level reducer should do with the overlay after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    Stay,
    Close,
}

pub fn handle_key(state: &mut ContactsState, key: KeyEvent) -> OverlayOutcome {
    match key.code {
        KeyCode::Esc => return OverlayOutcome::Close,
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = match state.focus {
                PaneFocus::List => PaneFocus::Form,
                PaneFocus::Form => PaneFocus::List,
            };
        }
        _ => match state.focus {
            PaneFocus::List => handle_list_key(state, key),
            PaneFocus::Form => handle_form_key(state, key),
        },
    }
    OverlayOutcome::Stay
}

fn handle_list_key(state: &mut ContactsState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = (state.selected + 1).min(state.book.len().saturating_sub(1));
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(contact) = state.book.contacts().get(state.selected) {
                let id = contact.id.clone();
                state.book.remove(&id);
                state.clamp_selection();
            }
        }
        KeyCode::Char('n') => {
            state.focus = PaneFocus::Form;
            state.form.focus = 0;
        }
        _ => {}
    }
}

fn handle_form_key(state: &mut ContactsState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit(state),
        _ => {
            state.form.handle_key(key);
        }
    }
}

fn submit(state: &mut ContactsState) {
    if state.name().is_empty() || state.email().is_empty() {
        state.error = Some(ERR_FILL_ALL.to_string());
        return;
    }
    state.error = None;
    let name = state.name().to_string();
    let email = state.email().to_string();
    state.book.add(name, email);
    state.form.clear_all();
}
