//! Shared application state handed to every handler.

use crate::auth::services::AuthService;
use crate::task::services::TaskLifecycleService;
use std::sync::Arc;

/// Application dependencies threaded through the router.
///
/// Built once at startup from configuration; adapters are selected at the
/// composition root and hidden behind their ports here.
#[derive(Clone)]
pub struct AppState {
    /// Registration, login, and session token service.
    pub auth: Arc<AuthService>,
    /// Task lifecycle orchestration service.
    pub tasks: Arc<TaskLifecycleService>,
}

impl AppState {
    /// Creates the state container.
    #[must_use]
    pub const fn new(auth: Arc<AuthService>, tasks: Arc<TaskLifecycleService>) -> Self {
        Self { auth, tasks }
    }
}
