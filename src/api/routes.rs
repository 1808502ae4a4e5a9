//! Route configuration for the Taskwise API.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | / | Health probe |
//! | POST | /auth/register | Register a user |
//! | POST | /auth/login | Issue a session token |
//! | GET | /tasks | List the caller's tasks |
//! | POST | /tasks | Create a task |
//! | PUT | /tasks/{id} | Edit title/description |
//! | DELETE | /tasks/{id} | Delete a task |
//! | PATCH/POST | /tasks/{id}/completed | Set the completion flag |
//! | POST | /tasks/improve | Request an AI suggestion |
//! | POST | /tasks/{id}/accept-ai | Apply the pending suggestion |
//! | POST | /tasks/{id}/undo-ai | Discard the pending suggestion |

use crate::api::dto::HealthResponse;
use crate::api::handlers::auth::{login, register};
use crate::api::handlers::task::{
    accept_suggestion, create_task, delete_task, improve_task, list_tasks, set_completed,
    undo_suggestion, update_task,
};
use crate::api::state::AppState;
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

/// `GET /` - health probe.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// Creates the axum router with all API routes.
///
/// CORS is permissive because the browser client is served from a different
/// origin in development.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/improve", post(improve_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .route(
            "/tasks/{id}/completed",
            patch(set_completed).post(set_completed),
        )
        .route("/tasks/{id}/accept-ai", post(accept_suggestion))
        .route("/tasks/{id}/undo-ai", post(undo_suggestion))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
