//! Application state composition.
//!
//! The state is split three ways so handlers can borrow what they need
//! without conflicts:
//! - `SharedState` - cross-screen state (session, client, job slots, spinner)
//! - `Screen` - the active screen's own state, constructed fresh on entry and
//!   dropped on exit (no leakage between visits)
//! - `Option<ContactsState>` - the contacts overlay, layered over the task
//!   list without tearing it down

use std::sync::Arc;

use tudo_core::api::ApiClient;
use tudo_core::session::Session;

use crate::common::{JobSeq, Jobs};
use crate::features::contacts::ContactsState;
use crate::features::login::LoginState;
use crate::features::register::RegisterState;
use crate::features::todos::TodoListState;

/// Launch options resolved by the CLI.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// API base URL, validated and without a trailing slash.
    pub base_url: String,
    /// Mirror the task list to the remote service.
    pub remote: bool,
}

/// The active screen. Exactly one exists at a time; navigation replaces it
/// wholesale.
pub enum Screen {
    Login(LoginState),
    Register(RegisterState),
    Todos(TodoListState),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login(_) => "Login",
            Screen::Register(_) => "Register",
            Screen::Todos(_) => "Tasks",
        }
    }
}

/// Cross-screen state.
pub struct SharedState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub options: AppOptions,
    /// Bearer credential slot (shared with the API client).
    pub session: Session,
    /// Remote service client, shared with spawned handlers.
    pub client: Arc<ApiClient>,
    /// Single-slot guards for in-flight operations.
    pub jobs: Jobs,
    pub job_seq: JobSeq,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl SharedState {
    pub fn new(options: AppOptions) -> Self {
        let session = Session::new();
        let client = Arc::new(ApiClient::new(options.base_url.clone(), session.clone()));
        Self {
            should_quit: false,
            options,
            session,
            client,
            jobs: Jobs::default(),
            job_seq: JobSeq::default(),
            spinner_frame: 0,
        }
    }
}

/// Combined application state.
pub struct AppState {
    pub shared: SharedState,
    pub screen: Screen,
    /// Contacts overlay, shown on top of the task list.
    pub overlay: Option<ContactsState>,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self {
            shared: SharedState::new(options),
            screen: Screen::Login(LoginState::enter(None)),
            overlay: None,
        }
    }
}

/// Navigation request returned by screen reducers; applied by the top-level
/// reducer, which constructs the target screen's state fresh.
#[derive(Debug)]
pub enum Nav {
    Login { notice: Option<String> },
    Register,
    Todos,
}

#[cfg(test)]
pub(crate) fn test_app(remote: bool) -> AppState {
    AppState::new(AppOptions {
        base_url: "http://127.0.0.1:9/api".to_string(),
        remote,
    })
}
