//! Events consumed by the reducer.
//!
//! `Terminal` events come from crossterm; the rest are completions of async
//! operations, delivered through the runtime inbox. Every completion carries
//! the [`JobId`] it was spawned with so the reducer can drop stale results
//! (e.g. a response arriving after the user navigated away).

use tudo_core::api::{ApiError, TodoRecord};

use crate::common::JobId;
use crate::effects::PushOutcome;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick driving the spinner animation.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// Login call finished; `Ok` carries the bearer token.
    LoginDone {
        job: JobId,
        result: Result<String, ApiError>,
    },
    /// Registration call finished.
    RegisterDone {
        job: JobId,
        result: Result<(), ApiError>,
    },
    /// Remote task list load finished.
    TodosLoaded {
        job: JobId,
        result: Result<Vec<TodoRecord>, ApiError>,
    },
    /// One queued remote mirror call finished.
    TodoPushed {
        job: JobId,
        result: Result<PushOutcome, ApiError>,
    },
}
