//! Task list screen reducer.
//!
//! Every mutation is applied to the local store synchronously; in remote mode
//! the same mutation is queued for mirroring and the queue drains through the
//! single push slot, one call at a time, in order.

use crossterm::event::{KeyCode, KeyEvent};
use tudo_core::api::{ApiError, TodoRecord};
use tudo_core::store::{Task, TaskId};

use super::state::{PaneFocus, TodoListState};
use crate::common::JobKind;
use crate::effects::{PushOp, PushOutcome, UiEffect};
use crate::features::ERR_FILL_ALL;
use crate::state::SharedState;

/// Effects to run when the screen is entered (remote mode loads the list).
pub fn enter_effects(shared: &mut SharedState) -> Vec<UiEffect> {
    if !shared.options.remote {
        return vec![];
    }
    let job = shared.job_seq.next_id();
    shared.jobs.state_mut(JobKind::TodoLoad).start(job);
    vec![UiEffect::SpawnTodoLoad { job }]
}

pub fn handle_key(
    state: &mut TodoListState,
    shared: &mut SharedState,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab if state.focus == PaneFocus::List => {
            state.focus = PaneFocus::Form;
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = PaneFocus::List;
            vec![]
        }
        KeyCode::Esc => {
            cancel_entry(state);
            vec![]
        }
        _ => match state.focus {
            PaneFocus::List => handle_list_key(state, shared, key),
            PaneFocus::Form => handle_form_key(state, shared, key),
        },
    }
}

fn handle_list_key(
    state: &mut TodoListState,
    shared: &mut SharedState,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = (state.selected + 1).min(state.store.len().saturating_sub(1));
            vec![]
        }
        KeyCode::Char(' ') => toggle_selected(state, shared),
        KeyCode::Char('e') => {
            start_edit(state);
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => delete_selected(state, shared),
        KeyCode::Char('n') => {
            state.focus = PaneFocus::Form;
            state.form.focus = 0;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_form_key(
    state: &mut TodoListState,
    shared: &mut SharedState,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => submit(state, shared),
        _ => {
            state.form.handle_key(key);
            vec![]
        }
    }
}

/// Add-or-edit submit. Validation applies identically to both paths; the
/// pending-edit target is only consumed after validation passes.
fn submit(state: &mut TodoListState, shared: &mut SharedState) -> Vec<UiEffect> {
    let title = state.title().to_string();
    let description = state.description().to_string();
    if title.is_empty() || description.is_empty() {
        state.error = Some(ERR_FILL_ALL.to_string());
        return vec![];
    }
    state.error = None;

    let effects = if let Some(id) = state.editing.take() {
        if state.store.update_entry(&id, &title, &description) {
            let completed = state.store.get(&id).is_some_and(|task| task.completed);
            queue_push(
                state,
                shared,
                PushOp::Update {
                    id,
                    title,
                    description,
                    completed,
                },
            )
        } else {
            vec![]
        }
    } else {
        let local_id = state.store.add(title.clone(), description.clone());
        queue_push(
            state,
            shared,
            PushOp::Create {
                local_id,
                title,
                description,
            },
        )
    };

    state.form.clear_all();
    effects
}

fn start_edit(state: &mut TodoListState) {
    let Some(task) = state.store.tasks().get(state.selected).cloned() else {
        return;
    };
    state.form.fields[0].buffer.set_text(&task.title);
    state.form.fields[1].buffer.set_text(&task.description);
    state.form.focus = 0;
    state.editing = Some(task.id);
    state.focus = PaneFocus::Form;
    state.error = None;
}

fn cancel_entry(state: &mut TodoListState) {
    state.editing = None;
    state.form.clear_all();
    state.error = None;
    state.focus = PaneFocus::List;
}

fn toggle_selected(state: &mut TodoListState, shared: &mut SharedState) -> Vec<UiEffect> {
    let Some(task) = state.store.tasks().get(state.selected).cloned() else {
        return vec![];
    };
    let Some(completed) = state.store.toggle(&task.id) else {
        return vec![];
    };
    queue_push(
        state,
        shared,
        PushOp::Update {
            id: task.id,
            title: task.title,
            description: task.description,
            completed,
        },
    )
}

fn delete_selected(state: &mut TodoListState, shared: &mut SharedState) -> Vec<UiEffect> {
    let Some(task) = state.store.tasks().get(state.selected).cloned() else {
        return vec![];
    };
    state.store.remove(&task.id);
    if state.editing.as_ref() == Some(&task.id) {
        state.editing = None;
        state.form.clear_all();
    }
    state.clamp_selection();
    queue_push(state, shared, PushOp::Delete { id: task.id })
}

/// Queues a mirror call (remote mode only) and drains the queue if the push
/// slot is free.
fn queue_push(state: &mut TodoListState, shared: &mut SharedState, op: PushOp) -> Vec<UiEffect> {
    if !shared.options.remote {
        return vec![];
    }
    state.pending_pushes.push_back(op);
    drain_pushes(state, shared)
}

fn drain_pushes(state: &mut TodoListState, shared: &mut SharedState) -> Vec<UiEffect> {
    if shared.jobs.state(JobKind::TodoPush).is_running() {
        return vec![];
    }
    let Some(op) = state.pending_pushes.pop_front() else {
        return vec![];
    };
    let job = shared.job_seq.next_id();
    shared.jobs.state_mut(JobKind::TodoPush).start(job);
    vec![UiEffect::SpawnTodoPush { job, op }]
}

/// Applies the remote list load result.
pub fn handle_loaded(state: &mut TodoListState, result: Result<Vec<TodoRecord>, ApiError>) {
    match result {
        Ok(records) => {
            state
                .store
                .replace_all(records.into_iter().map(record_to_task).collect());
            state.clamp_selection();
        }
        Err(error) => {
            state.error = Some(error.to_string());
        }
    }
}

/// Applies one mirror call result and drains the next queued call. Mirror
/// failures keep the local mutation and only surface the message.
pub fn handle_pushed(
    state: &mut TodoListState,
    shared: &mut SharedState,
    result: Result<PushOutcome, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(PushOutcome::Created { local_id, record }) => {
            let server_id = TaskId(record.id);
            state.store.adopt_id(&local_id, server_id.clone());
            if state.editing.as_ref() == Some(&local_id) {
                state.editing = Some(server_id);
            }
        }
        Ok(PushOutcome::Updated | PushOutcome::Deleted) => {}
        Err(error) => {
            state.error = Some(error.to_string());
        }
    }
    drain_pushes(state, shared)
}

fn record_to_task(record: TodoRecord) -> Task {
    Task {
        id: TaskId(record.id),
        title: record.title,
        description: record.description,
        completed: record.completed,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::state::test_app;

    fn type_into_form(state: &mut TodoListState, title: &str, description: &str) {
        state.focus = PaneFocus::Form;
        state.form.focus = 0;
        for ch in title.chars() {
            state.form.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
        state.form.focus = 1;
        for ch in description.chars() {
            state.form.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_add_appends_and_resets_form() {
        let mut app = test_app(false);
        let mut state = TodoListState::enter(false);
        type_into_form(&mut state, "Buy milk", "2%");

        let effects = handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Enter));

        assert!(effects.is_empty()); // local mode mirrors nothing
        let task = state.store.tasks().last().unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert!(!task.completed);
        assert!(state.form.is_blank());
    }

    #[test]
    fn test_empty_description_sets_error_and_keeps_collection() {
        let mut app = test_app(false);
        let mut state = TodoListState::enter(false);
        let before = state.store.len();
        type_into_form(&mut state, "Buy milk", "");

        handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Enter));

        assert_eq!(state.store.len(), before);
        assert_eq!(state.error.as_deref(), Some(ERR_FILL_ALL));
        // The form keeps its content so the user can fix it.
        assert_eq!(state.title(), "Buy milk");
    }

    #[test]
    fn test_edit_replaces_in_place_and_clears_target() {
        let mut app = test_app(false);
        let mut state = TodoListState::enter(false);
        state.selected = 0;

        handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char('e')));
        assert_eq!(state.editing, Some(TaskId("1".to_string())));
        assert_eq!(state.title(), "First task");

        state.form.fields[0].buffer.set_text("Y");
        handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Enter));

        let task = &state.store.tasks()[0];
        assert_eq!(task.id, TaskId("1".to_string()));
        assert_eq!(task.title, "Y");
        assert!(state.editing.is_none());
        assert!(state.form.is_blank());
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_toggle_via_space_is_reversible() {
        let mut app = test_app(false);
        let mut state = TodoListState::enter(false);
        state.selected = 0;

        handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char(' ')));
        assert!(state.store.tasks()[0].completed);
        handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char(' ')));
        assert!(!state.store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = test_app(false);
        let mut state = TodoListState::enter(false);
        state.selected = 1;

        handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char('d')));

        assert_eq!(state.store.len(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_remote_pushes_queue_through_single_slot() {
        let mut app = test_app(true);
        let mut state = TodoListState::enter(true);
        handle_loaded(
            &mut state,
            Ok(vec![
                TodoRecord {
                    id: "1".to_string(),
                    title: "a".to_string(),
                    description: "a".to_string(),
                    completed: false,
                },
                TodoRecord {
                    id: "2".to_string(),
                    title: "b".to_string(),
                    description: "b".to_string(),
                    completed: false,
                },
            ]),
        );

        // Two quick toggles: only the first spawns, the second queues.
        state.selected = 0;
        let first = handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char(' ')));
        assert_eq!(first.len(), 1);
        state.selected = 1;
        let second = handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char(' ')));
        assert!(second.is_empty());
        assert_eq!(state.pending_pushes.len(), 1);

        // Completion of the first drains the queued one.
        let UiEffect::SpawnTodoPush { job, .. } = &first[0] else {
            panic!("expected a push effect");
        };
        assert!(app.shared.jobs.state_mut(JobKind::TodoPush).finish_if_active(*job));
        let drained = handle_pushed(&mut state, &mut app.shared, Ok(PushOutcome::Updated));
        assert_eq!(drained.len(), 1);
        assert!(state.pending_pushes.is_empty());
    }

    #[test]
    fn test_created_record_adopts_server_id() {
        let mut app = test_app(true);
        let mut state = TodoListState::enter(true);
        type_into_form(&mut state, "Buy milk", "2%");
        let effects = handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Enter));

        let UiEffect::SpawnTodoPush {
            job,
            op: PushOp::Create { local_id, .. },
        } = &effects[0]
        else {
            panic!("expected a create push");
        };
        let local_id = local_id.clone();
        assert!(app.shared.jobs.state_mut(JobKind::TodoPush).finish_if_active(*job));

        handle_pushed(
            &mut state,
            &mut app.shared,
            Ok(PushOutcome::Created {
                local_id: local_id.clone(),
                record: TodoRecord {
                    id: "42".to_string(),
                    title: "Buy milk".to_string(),
                    description: "2%".to_string(),
                    completed: false,
                },
            }),
        );

        assert!(state.store.get(&local_id).is_none());
        assert!(state.store.get(&TaskId("42".to_string())).is_some());
    }

    #[test]
    fn test_push_failure_keeps_local_mutation() {
        let mut app = test_app(true);
        let mut state = TodoListState::enter(true);
        handle_loaded(
            &mut state,
            Ok(vec![TodoRecord {
                id: "1".to_string(),
                title: "a".to_string(),
                description: "a".to_string(),
                completed: false,
            }]),
        );
        let effects = handle_key(&mut state, &mut app.shared, KeyEvent::from(KeyCode::Char('d')));
        let UiEffect::SpawnTodoPush { job, .. } = &effects[0] else {
            panic!("expected a push effect");
        };
        assert!(app.shared.jobs.state_mut(JobKind::TodoPush).finish_if_active(*job));

        handle_pushed(
            &mut state,
            &mut app.shared,
            Err(ApiError::new(tudo_core::api::ApiErrorKind::Http, "HTTP 500")),
        );

        assert!(state.store.is_empty());
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
    }
}
