//! Remote task service client.
//!
//! Thin request/response wrapper over the fixed endpoints of the service:
//! `/login_check`, `/register`, and the bearer-authenticated `/todos` CRUD.
//! No retries, no explicit timeouts beyond the transport default, no
//! transient/permanent distinction: every failure surfaces as a single
//! best-effort human-readable string (see [`ApiError`]).

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use types::TodoRecord;
