//! Task list screen state.

use std::collections::VecDeque;

use tudo_core::store::{TaskId, TaskStore};

use crate::common::{Form, FormField};
use crate::effects::PushOp;

/// Which pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    List,
    Form,
}

pub struct TodoListState {
    /// The task collection. Screen-local: seeded with example data in local
    /// mode, loaded from the service in remote mode.
    pub store: TaskStore,
    /// Title + description entry form.
    pub form: Form,
    /// Pending-edit target: redirects the next submit from append to
    /// replace-in-place.
    pub editing: Option<TaskId>,
    pub selected: usize,
    pub focus: PaneFocus,
    pub error: Option<String>,
    /// Remote mirror calls waiting for the single push slot (remote mode).
    pub pending_pushes: VecDeque<PushOp>,
}

impl TodoListState {
    /// Fresh state on screen entry.
    pub fn enter(remote: bool) -> Self {
        Self {
            store: if remote {
                TaskStore::new()
            } else {
                TaskStore::with_examples()
            },
            form: Form::new(vec![FormField::new("Title"), FormField::new("Description")]),
            editing: None,
            selected: 0,
            focus: PaneFocus::List,
            error: None,
            pending_pushes: VecDeque::new(),
        }
    }

    pub fn title(&self) -> &str {
        self.form.value(0)
    }

    pub fn description(&self) -> &str {
        self.form.value(1)
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }
}
