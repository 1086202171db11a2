//! Contacts overlay state.

use tudo_core::contacts::ContactBook;

use crate::common::{Form, FormField};
use crate::features::todos::PaneFocus;

/// Local-only contact list layered over the task screen.
pub struct ContactsState {
    pub book: ContactBook,
    pub form: Form,
    pub selected: usize,
    pub focus: PaneFocus,
    pub error: Option<String>,
}

impl ContactsState {
    /// Fresh state each time the overlay opens.
    pub fn enter() -> Self {
        Self {
            book: ContactBook::with_examples(),
            form: Form::new(vec![FormField::new("Name"), FormField::new("Email")]),
            selected: 0,
            focus: PaneFocus::List,
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        self.form.value(0)
    }

    pub fn email(&self) -> &str {
        self.form.value(1)
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.book.len().saturating_sub(1));
    }
}
