//! Effects returned by the reducer for the runtime to execute.
//!
//! The reducer never performs I/O or spawns tasks itself: it marks the
//! matching job slot active and returns one of these, and the runtime spawns
//! the async handler. Results come back as [`crate::events::UiEvent`]s.

use tudo_core::api::TodoRecord;
use tudo_core::store::TaskId;

use crate::common::JobId;

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Authenticate against the login endpoint.
    SpawnLogin {
        job: JobId,
        email: String,
        password: String,
    },

    /// Create an account.
    SpawnRegister {
        job: JobId,
        name: String,
        email: String,
        password: String,
    },

    /// Load the task list from the remote service (remote mode, on screen
    /// entry).
    SpawnTodoLoad { job: JobId },

    /// Mirror one local task mutation to the remote service (remote mode).
    SpawnTodoPush { job: JobId, op: PushOp },
}

/// A local mutation queued for remote mirroring.
#[derive(Debug, Clone)]
pub enum PushOp {
    Create {
        local_id: TaskId,
        title: String,
        description: String,
    },
    Update {
        id: TaskId,
        title: String,
        description: String,
        completed: bool,
    },
    Delete {
        id: TaskId,
    },
}

/// Successful mirror result.
#[derive(Debug)]
pub enum PushOutcome {
    /// The create succeeded; the local record adopts the server id.
    Created {
        local_id: TaskId,
        record: TodoRecord,
    },
    Updated,
    Deleted,
}
