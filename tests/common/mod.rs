//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router over `tower::ServiceExt::oneshot` against
//! the in-memory adapters, with a scripted suggestion engine standing in
//! for the external provider.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use mockable::DefaultClock;
use serde_json::Value;
use taskwise::api::routes::create_router;
use taskwise::api::state::AppState;
use taskwise::auth::adapters::memory::InMemoryUserRepository;
use taskwise::auth::services::AuthService;
use taskwise::task::adapters::memory::InMemoryTaskRepository;
use taskwise::task::ports::{SuggestionEngine, SuggestionRequest, SuggestionResult};
use taskwise::task::services::TaskLifecycleService;
use tower::ServiceExt;

/// Signing secret shared by all integration test apps.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Advice returned by the stub engine when no script is supplied.
pub const DEFAULT_ADVICE: &str =
    "Clarify the deliverable and add a deadline. The medium priority is appropriate.";

/// Suggestion engine double replaying scripted results.
#[derive(Debug, Default)]
pub struct StubEngine {
    responses: Mutex<VecDeque<SuggestionResult<String>>>,
}

impl StubEngine {
    /// Creates an engine that replays the given results in order, falling
    /// back to [`DEFAULT_ADVICE`] once the script runs out.
    #[must_use]
    pub fn with_responses(responses: impl IntoIterator<Item = SuggestionResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SuggestionEngine for StubEngine {
    async fn improve(&self, _request: &SuggestionRequest) -> SuggestionResult<String> {
        self.responses
            .lock()
            .expect("response script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_ADVICE.to_owned()))
    }
}

/// Builds a full application router backed by in-memory adapters and the
/// given suggestion engine.
#[must_use]
pub fn app_with_engine(engine: StubEngine) -> Router {
    let clock = Arc::new(DefaultClock);
    let auth = AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        clock.clone(),
        TEST_JWT_SECRET,
        Duration::seconds(3600),
    );
    let tasks = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(engine),
        clock,
    );
    create_router(AppState::new(Arc::new(auth), Arc::new(tasks)))
}

/// Builds an application router with the default stub engine.
#[must_use]
pub fn app() -> Router {
    app_with_engine(StubEngine::default())
}

/// Sends a request to the router and returns the status plus parsed body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should be handled");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        // Most endpoints answer with JSON; framework-level rejections (e.g. a
        // malformed path parameter) use a plain-text body. Fall back to Null so
        // callers that only inspect the status are not tripped up by those.
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Registers a user and returns a fresh bearer token for them.
pub async fn register_and_login(app: &Router, email: &str) -> String {
    let credentials = serde_json::json!({ "email": email, "password": "hunter2" });
    let (status, _) = request(app, "POST", "/auth/register", None, Some(credentials.clone())).await;
    assert_eq!(status, StatusCode::CREATED, "registration should succeed");

    let (status, body) = request(app, "POST", "/auth/login", None, Some(credentials)).await;
    assert_eq!(status, StatusCode::OK, "login should succeed");
    body.get("token")
        .and_then(Value::as_str)
        .expect("login response should carry a token")
        .to_owned()
}

/// Creates a task for the given bearer and returns its wire representation.
pub async fn create_task(app: &Router, token: &str, payload: Value) -> Value {
    let (status, body) = request(app, "POST", "/tasks", Some(token), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "task creation should succeed");
    body
}

/// Extracts the task id from a wire representation.
#[must_use]
pub fn task_id(task: &Value) -> &str {
    task.get("id")
        .and_then(Value::as_str)
        .expect("task should carry an id")
}
