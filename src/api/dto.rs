//! Request and response DTOs for the HTTP surface.
//!
//! Response field names are camelCase, matching the JSON shapes the browser
//! client already consumes. The tagged suggestion state is flattened back
//! into the four nullable AI fields on the wire.

use crate::task::domain::{Priority, PriorityAdvice, Task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Task title; required non-empty.
    #[serde(default)]
    pub title: String,
    /// Optional initial description.
    pub description: Option<String>,
    /// Optional initial priority; defaults to medium.
    pub priority: Option<Priority>,
}

/// Body for `PUT /tasks/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, when supplied.
    pub title: Option<String>,
    /// Replacement description, when supplied.
    pub description: Option<String>,
}

/// Body for `POST /tasks/improve`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveTaskBody {
    /// Identifier of the task to improve.
    pub task_id: Uuid,
}

/// Response for `POST /tasks/improve`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveTaskResponse {
    /// The freshly generated suggestion text.
    pub ai_suggestion: String,
}

/// Confirmation body carrying a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Confirmation message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a confirmation body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}

/// Health probe payload for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task priority.
    pub priority: Priority,
    /// Completion flag.
    pub completed: bool,
    /// Pending suggestion text, if any.
    pub ai_suggestion: Option<String>,
    /// Description snapshot taken when the suggestion was generated.
    pub original_description: Option<String>,
    /// Pending priority recommendation, if any.
    pub ai_priority_suggestion: Option<PriorityAdvice>,
    /// Priority snapshot restored on undo, if one was taken.
    pub original_priority: Option<Priority>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        let pending = task.suggestion().as_pending();
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            completed: task.completed(),
            ai_suggestion: pending.map(|p| p.text.clone()),
            original_description: pending.map(|p| p.original_description.clone()),
            ai_priority_suggestion: pending.and_then(|p| p.priority_advice),
            original_priority: pending.and_then(|p| p.original_priority),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}
