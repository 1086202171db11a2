//! Login screen state.

use crate::common::{Form, FormField};

pub struct LoginState {
    pub form: Form,
    /// Inline error from validation or a failed login call.
    pub error: Option<String>,
    /// Acknowledgment carried over from a successful registration.
    pub notice: Option<String>,
}

impl LoginState {
    /// Fresh state on screen entry.
    pub fn enter(notice: Option<String>) -> Self {
        Self {
            form: Form::new(vec![FormField::new("Email"), FormField::masked("Password")]),
            error: None,
            notice,
        }
    }

    pub fn email(&self) -> &str {
        self.form.value(0)
    }

    pub fn password(&self) -> &str {
        self.form.value(1)
    }
}
