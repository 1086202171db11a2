//! Registration screen reducer.

use crossterm::event::{KeyCode, KeyEvent};
use tudo_core::api::ApiError;

use super::RegisterState;
use crate::common::JobKind;
use crate::effects::UiEffect;
use crate::features::{ERR_FILL_ALL, ERR_PASSWORD_MISMATCH, REGISTER_SUCCESS};
use crate::state::{Nav, SharedState};

pub fn handle_key(
    state: &mut RegisterState,
    shared: &mut SharedState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<Nav>) {
    match key.code {
        KeyCode::Enter => (submit(state, shared), None),
        KeyCode::Esc => (vec![], Some(Nav::Login { notice: None })),
        _ => {
            state.form.handle_key(key);
            (vec![], None)
        }
    }
}

fn submit(state: &mut RegisterState, shared: &mut SharedState) -> Vec<UiEffect> {
    if shared.jobs.state(JobKind::Register).is_running() {
        return vec![];
    }

    if state.name().is_empty()
        || state.email().is_empty()
        || state.password().is_empty()
        || state.confirm_password().is_empty()
    {
        state.error = Some(ERR_FILL_ALL.to_string());
        return vec![];
    }
    if state.password() != state.confirm_password() {
        state.error = Some(ERR_PASSWORD_MISMATCH.to_string());
        return vec![];
    }

    state.error = None;
    let job = shared.job_seq.next_id();
    shared.jobs.state_mut(JobKind::Register).start(job);
    vec![UiEffect::SpawnRegister {
        job,
        name: state.name().to_string(),
        email: state.email().to_string(),
        password: state.password().to_string(),
    }]
}

/// Applies the registration result. Success goes back to the login screen
/// with an acknowledgment; the account is not auto-authenticated.
pub fn handle_result(state: &mut RegisterState, result: Result<(), ApiError>) -> Option<Nav> {
    match result {
        Ok(()) => Some(Nav::Login {
            notice: Some(REGISTER_SUCCESS.to_string()),
        }),
        Err(error) => {
            state.error = Some(error.to_string());
            None
        }
    }
}
