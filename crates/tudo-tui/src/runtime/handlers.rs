//! Async effect handlers.
//!
//! Each handler is a pure async function that performs one API call and
//! returns the completion event; the runtime spawns it and forwards the event
//! to the inbox. Failures are logged here (the screens only see the display
//! string).

use std::sync::Arc;

use tudo_core::api::ApiClient;

use crate::common::JobId;
use crate::effects::{PushOp, PushOutcome};
use crate::events::UiEvent;

pub(crate) async fn login(
    client: Arc<ApiClient>,
    job: JobId,
    email: String,
    password: String,
) -> UiEvent {
    let result = client.login(&email, &password).await;
    if let Err(error) = &result {
        tracing::warn!(kind = %error.kind, details = ?error.details, "login failed: {error}");
    }
    UiEvent::LoginDone { job, result }
}

pub(crate) async fn register(
    client: Arc<ApiClient>,
    job: JobId,
    name: String,
    email: String,
    password: String,
) -> UiEvent {
    let result = client.register(&name, &email, &password).await.map(|_| ());
    if let Err(error) = &result {
        tracing::warn!(kind = %error.kind, details = ?error.details, "registration failed: {error}");
    }
    UiEvent::RegisterDone { job, result }
}

pub(crate) async fn load_todos(client: Arc<ApiClient>, job: JobId) -> UiEvent {
    let result = client.list_todos().await;
    if let Err(error) = &result {
        tracing::warn!(kind = %error.kind, details = ?error.details, "task list load failed: {error}");
    }
    UiEvent::TodosLoaded { job, result }
}

pub(crate) async fn push_todo(client: Arc<ApiClient>, job: JobId, op: PushOp) -> UiEvent {
    let result = match op {
        PushOp::Create {
            local_id,
            title,
            description,
        } => client
            .create_todo(&title, &description)
            .await
            .map(|record| PushOutcome::Created { local_id, record }),
        PushOp::Update {
            id,
            title,
            description,
            completed,
        } => client
            .update_todo(&id.0, &title, &description, completed)
            .await
            .map(|()| PushOutcome::Updated),
        PushOp::Delete { id } => client
            .delete_todo(&id.0)
            .await
            .map(|()| PushOutcome::Deleted),
    };
    if let Err(error) = &result {
        tracing::warn!(kind = %error.kind, details = ?error.details, "task sync failed: {error}");
    }
    UiEvent::TodoPushed { job, result }
}
