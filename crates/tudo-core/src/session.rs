//! Session context holding the bearer credential.
//!
//! Replaces the usual module-global token slot with an explicit object that is
//! injected into the API client and the UI state. The credential lives for the
//! process lifetime: absent before login, set once on successful
//! authentication, cleared only by `clear` or process exit.

use std::sync::{Arc, RwLock};

/// Shared single-slot credential store. Cloning shares the slot; the last
/// write wins.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the bearer token, replacing any previous value.
    pub fn set_token(&self, token: impl Into<String>) {
        *write_slot(&self.token) = Some(token.into());
    }

    /// Returns the current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        read_slot(&self.token)
    }

    /// Drops the credential.
    pub fn clear(&self) {
        *write_slot(&self.token) = None;
    }

    pub fn is_authenticated(&self) -> bool {
        read_slot(&self.token).is_some()
    }
}

// Lock poisoning only happens if a holder panicked; the slot itself is always
// valid, so recover the guard instead of propagating the panic.
fn read_slot(slot: &RwLock<Option<String>>) -> Option<String> {
    match slot.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn write_slot(slot: &RwLock<Option<String>>) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
    match slot.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
