//! Registration screen state.

use crate::common::{Form, FormField};

pub struct RegisterState {
    pub form: Form,
    pub error: Option<String>,
}

impl RegisterState {
    /// Fresh state on screen entry.
    pub fn enter() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Name"),
                FormField::new("Email"),
                FormField::masked("Password"),
                FormField::masked("Confirm password"),
            ]),
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        self.form.value(0)
    }

    pub fn email(&self) -> &str {
        self.form.value(1)
    }

    pub fn password(&self) -> &str {
        self.form.value(2)
    }

    pub fn confirm_password(&self) -> &str {
        self.form.value(3)
    }
}
