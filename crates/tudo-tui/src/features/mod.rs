//! Screen modules. Each screen owns its state, key handling, and render
//! function, mirroring the state/update/render split of the crate root.

pub mod contacts;
pub mod login;
pub mod register;
pub mod todos;

/// Shared validation message for any screen with required fields.
pub(crate) const ERR_FILL_ALL: &str = "Please fill in all fields.";
/// Registration-specific mismatch message (distinct from the generic one).
pub(crate) const ERR_PASSWORD_MISMATCH: &str = "Passwords do not match.";
/// Acknowledgment carried back to the login screen after registration.
pub(crate) const REGISTER_SUCCESS: &str = "Account created. You can sign in now.";
