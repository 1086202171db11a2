//! Login screen reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tudo_core::api::ApiError;

use super::LoginState;
use crate::common::JobKind;
use crate::effects::UiEffect;
use crate::features::ERR_FILL_ALL;
use crate::state::{Nav, SharedState};

pub fn handle_key(
    state: &mut LoginState,
    shared: &mut SharedState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<Nav>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => (submit(state, shared), None),
        KeyCode::Char('r') if ctrl => (vec![], Some(Nav::Register)),
        KeyCode::Esc => (vec![UiEffect::Quit], None),
        _ => {
            state.form.handle_key(key);
            (vec![], None)
        }
    }
}

fn submit(state: &mut LoginState, shared: &mut SharedState) -> Vec<UiEffect> {
    // Re-entrant submit while a request is in flight is a no-op.
    if shared.jobs.state(JobKind::Login).is_running() {
        return vec![];
    }

    if state.email().is_empty() || state.password().is_empty() {
        state.error = Some(ERR_FILL_ALL.to_string());
        return vec![];
    }

    state.error = None;
    state.notice = None;
    let job = shared.job_seq.next_id();
    shared.jobs.state_mut(JobKind::Login).start(job);
    vec![UiEffect::SpawnLogin {
        job,
        email: state.email().to_string(),
        password: state.password().to_string(),
    }]
}

/// Applies the login result. The job slot has already been cleared by the
/// top-level reducer.
pub fn handle_result(
    state: &mut LoginState,
    shared: &mut SharedState,
    result: Result<String, ApiError>,
) -> Option<Nav> {
    match result {
        Ok(token) => {
            shared.session.set_token(token);
            Some(Nav::Todos)
        }
        Err(error) => {
            state.error = Some(error.to_string());
            None
        }
    }
}
