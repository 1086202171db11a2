//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Async completions are gated twice before they touch screen state: the job
//! guard drops stale ids, and the screen match drops results whose screen was
//! navigated away from in the meantime (a silent no-op, not an error).

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::JobKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::contacts::{ContactsState, OverlayOutcome};
use crate::features::todos::PaneFocus;
use crate::features::{contacts, login, register, todos};
use crate::state::{AppState, Nav, Screen};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.shared.spinner_frame = app.shared.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(terminal_event) => handle_terminal_event(app, terminal_event),
        UiEvent::LoginDone { job, result } => {
            if !app
                .shared
                .jobs
                .state_mut(JobKind::Login)
                .finish_if_active(job)
            {
                return vec![];
            }
            let nav = match &mut app.screen {
                Screen::Login(state) => login::handle_result(state, &mut app.shared, result),
                _ => None,
            };
            nav.map_or_else(Vec::new, |nav| apply_nav(app, nav))
        }
        UiEvent::RegisterDone { job, result } => {
            if !app
                .shared
                .jobs
                .state_mut(JobKind::Register)
                .finish_if_active(job)
            {
                return vec![];
            }
            let nav = match &mut app.screen {
                Screen::Register(state) => register::handle_result(state, result),
                _ => None,
            };
            nav.map_or_else(Vec::new, |nav| apply_nav(app, nav))
        }
        UiEvent::TodosLoaded { job, result } => {
            if !app
                .shared
                .jobs
                .state_mut(JobKind::TodoLoad)
                .finish_if_active(job)
            {
                return vec![];
            }
            if let Screen::Todos(state) = &mut app.screen {
                todos::handle_loaded(state, result);
            }
            vec![]
        }
        UiEvent::TodoPushed { job, result } => {
            if !app
                .shared
                .jobs
                .state_mut(JobKind::TodoPush)
                .finish_if_active(job)
            {
                return vec![];
            }
            match &mut app.screen {
                Screen::Todos(state) => todos::handle_pushed(state, &mut app.shared, result),
                _ => vec![],
            }
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // The overlay, when open, owns keyboard input.
    if let Some(overlay) = &mut app.overlay {
        if contacts::handle_key(overlay, key) == OverlayOutcome::Close {
            app.overlay = None;
        }
        return vec![];
    }
    if ctrl && key.code == KeyCode::Char('u') && matches!(&app.screen, Screen::Todos(_)) {
        app.overlay = Some(ContactsState::enter());
        return vec![];
    }

    let (mut effects, nav) = match &mut app.screen {
        Screen::Login(state) => login::handle_key(state, &mut app.shared, key),
        Screen::Register(state) => register::handle_key(state, &mut app.shared, key),
        Screen::Todos(state) => (todos::handle_key(state, &mut app.shared, key), None),
    };
    if let Some(nav) = nav {
        effects.extend(apply_nav(app, nav));
    }
    effects
}

fn handle_paste(app: &mut AppState, text: &str) {
    if let Some(overlay) = &mut app.overlay {
        if overlay.focus == PaneFocus::Form {
            overlay.form.insert_paste(text);
        }
        return;
    }
    match &mut app.screen {
        Screen::Login(state) => state.form.insert_paste(text),
        Screen::Register(state) => state.form.insert_paste(text),
        Screen::Todos(state) => {
            if state.focus == PaneFocus::Form {
                state.form.insert_paste(text);
            }
        }
    }
}

/// Replaces the active screen with freshly constructed state for the target.
/// The old screen's state is dropped; any still-in-flight result it was
/// waiting for is discarded by the screen match above.
fn apply_nav(app: &mut AppState, nav: Nav) -> Vec<UiEffect> {
    match nav {
        Nav::Login { notice } => {
            app.screen = Screen::Login(login::LoginState::enter(notice));
            vec![]
        }
        Nav::Register => {
            app.screen = Screen::Register(register::RegisterState::enter());
            vec![]
        }
        Nav::Todos => {
            app.screen = Screen::Todos(todos::TodoListState::enter(app.shared.options.remote));
            todos::enter_effects(&mut app.shared)
        }
    }
}

#[cfg(test)]
mod tests {
    use tudo_core::api::{ApiError, ApiErrorKind};

    use super::*;
    use crate::features::REGISTER_SUCCESS;
    use crate::state::test_app;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::from(code)))
    }

    fn ctrl_key(ch: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = test_app(false);
        let effects = update(&mut app, ctrl_key('c'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_login_success_navigates_to_todos_with_seeded_examples() {
        let mut app = test_app(false);
        type_str(&mut app, "a@b.com");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");

        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnLogin { job, .. }] = effects.as_slice() else {
            panic!("expected a login effect");
        };

        let effects = update(
            &mut app,
            UiEvent::LoginDone {
                job: *job,
                result: Ok("T1".to_string()),
            },
        );

        assert!(effects.is_empty()); // local mode: no list load
        assert_eq!(app.shared.session.token().as_deref(), Some("T1"));
        let Screen::Todos(state) = &app.screen else {
            panic!("expected the task screen");
        };
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_login_success_in_remote_mode_loads_the_list() {
        let mut app = test_app(true);
        type_str(&mut app, "a@b.com");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnLogin { job, .. }] = effects.as_slice() else {
            panic!("expected a login effect");
        };

        let effects = update(
            &mut app,
            UiEvent::LoginDone {
                job: *job,
                result: Ok("T1".to_string()),
            },
        );

        assert!(matches!(effects.as_slice(), [UiEffect::SpawnTodoLoad { .. }]));
        let Screen::Todos(state) = &app.screen else {
            panic!("expected the task screen");
        };
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_result_after_navigation_is_discarded() {
        let mut app = test_app(false);
        type_str(&mut app, "a@b.com");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnLogin { job, .. }] = effects.as_slice() else {
            panic!("expected a login effect");
        };
        let job = *job;

        // Navigate away before the response lands.
        update(&mut app, ctrl_key('r'));
        assert!(matches!(app.screen, Screen::Register(_)));

        let effects = update(
            &mut app,
            UiEvent::LoginDone {
                job,
                result: Ok("T1".to_string()),
            },
        );

        assert!(effects.is_empty());
        assert!(app.shared.session.token().is_none());
        assert!(matches!(app.screen, Screen::Register(_)));
        // The slot is free again for the next submit.
        assert!(!app.shared.jobs.state(JobKind::Login).is_running());
    }

    #[test]
    fn test_stale_job_id_is_ignored() {
        let mut app = test_app(false);
        let stale = app.shared.job_seq.next_id();

        let effects = update(
            &mut app,
            UiEvent::LoginDone {
                job: stale,
                result: Ok("T1".to_string()),
            },
        );

        assert!(effects.is_empty());
        assert!(app.shared.session.token().is_none());
    }

    #[test]
    fn test_register_success_returns_to_login_with_notice() {
        let mut app = test_app(false);
        update(&mut app, ctrl_key('r'));
        assert!(matches!(app.screen, Screen::Register(_)));

        type_str(&mut app, "Ada");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "ada@example.com");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");

        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnRegister { job, .. }] = effects.as_slice() else {
            panic!("expected a register effect");
        };

        update(
            &mut app,
            UiEvent::RegisterDone {
                job: *job,
                result: Ok(()),
            },
        );

        let Screen::Login(state) = &app.screen else {
            panic!("expected the login screen");
        };
        assert_eq!(state.notice.as_deref(), Some(REGISTER_SUCCESS));
    }

    #[test]
    fn test_register_failure_stays_on_register() {
        let mut app = test_app(false);
        update(&mut app, ctrl_key('r'));
        type_str(&mut app, "Ada");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "ada@example.com");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnRegister { job, .. }] = effects.as_slice() else {
            panic!("expected a register effect");
        };

        update(
            &mut app,
            UiEvent::RegisterDone {
                job: *job,
                result: Err(ApiError::new(ApiErrorKind::Http, "Email already taken")),
            },
        );

        let Screen::Register(state) = &app.screen else {
            panic!("expected to stay on register");
        };
        assert_eq!(state.error.as_deref(), Some("Email already taken"));
    }

    #[test]
    fn test_contacts_overlay_opens_and_closes_over_todos() {
        let mut app = test_app(false);
        app.screen = Screen::Todos(todos::TodoListState::enter(false));

        update(&mut app, ctrl_key('u'));
        assert!(app.overlay.is_some());

        // Keys go to the overlay while it is open.
        update(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.overlay.as_ref().unwrap().book.len(), 1);

        update(&mut app, key(KeyCode::Esc));
        assert!(app.overlay.is_none());
        // The task screen state survived underneath.
        let Screen::Todos(state) = &app.screen else {
            panic!("expected the task screen");
        };
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_tick_advances_spinner() {
        let mut app = test_app(false);
        update(&mut app, UiEvent::Tick);
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.shared.spinner_frame, 2);
    }
}
