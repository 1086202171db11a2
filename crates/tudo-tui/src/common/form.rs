//! Vertical form: labeled fields with a focus index.

use crossterm::event::{KeyCode, KeyEvent};

use super::FieldBuffer;

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub buffer: FieldBuffer,
    /// Render the value as bullets (password fields).
    pub masked: bool,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            buffer: FieldBuffer::new(),
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            buffer: FieldBuffer::new(),
            masked: true,
        }
    }

    /// The string to draw: bullets for masked fields, the value otherwise.
    pub fn display_value(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.buffer.value().chars().count())
        } else {
            self.buffer.value().to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn focused_mut(&mut self) -> &mut FieldBuffer {
        let focus = self.focus.min(self.fields.len().saturating_sub(1));
        &mut self.fields[focus].buffer
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn value(&self, idx: usize) -> &str {
        self.fields[idx].buffer.value()
    }

    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.buffer.clear();
        }
        self.focus = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|field| field.buffer.is_empty())
    }

    /// Routes a key to the form: Tab/BackTab and Up/Down cycle focus, editing
    /// keys go to the focused field. Returns false for anything else
    /// (Enter, Esc, screen-level shortcuts).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_prev();
                true
            }
            KeyCode::Down if key.modifiers.is_empty() => {
                self.focus_next();
                true
            }
            KeyCode::Up if key.modifiers.is_empty() => {
                self.focus_prev();
                true
            }
            _ => self.focused_mut().handle_key(key),
        }
    }

    pub fn insert_paste(&mut self, text: &str) {
        self.focused_mut().insert_str(text);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    #[test]
    fn test_focus_cycles_and_wraps() {
        let mut form = Form::new(vec![FormField::new("Email"), FormField::masked("Password")]);

        form.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(form.focus, 1);
        form.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(form.focus, 0);
        form.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = Form::new(vec![FormField::new("Email"), FormField::masked("Password")]);

        form.handle_key(KeyEvent::from(KeyCode::Char('a')));
        form.focus_next();
        form.handle_key(KeyEvent::from(KeyCode::Char('b')));

        assert_eq!(form.value(0), "a");
        assert_eq!(form.value(1), "b");
        assert_eq!(form.fields[1].display_value(), "\u{2022}");
    }
}
