//! Service layer for owner-scoped task mutation and the suggestion lifecycle.
//!
//! Every operation resolves the task by `(id, owner)` first; a missing match
//! yields [`TaskLifecycleError::NotFound`] and performs no mutation.
//! Successful mutations persist immediately and return the task's full
//! current state.

use crate::auth::domain::UserId;
use crate::task::{
    domain::{Priority, Task, TaskDomainError, TaskId, TaskTitle},
    ports::{
        SuggestionEngine, SuggestionError, SuggestionRequest, TaskRepository, TaskRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Placeholder handed to the suggestion engine when a task has no
/// description.
pub const EMPTY_DESCRIPTION_PLACEHOLDER: &str = "Complete this task.";

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    /// Sets the initial description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for editing task fields.
///
/// Only supplied fields are overwritten; the suggestion state is never
/// touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty edit request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
        }
    }

    /// Overwrites the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overwrites the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No task matched the `(id, owner)` pair.
    #[error("task not found")]
    NotFound,

    /// Domain validation or transition failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The suggestion engine failed.
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(_) => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService {
    repository: Arc<dyn TaskRepository>,
    engine: Arc<dyn SuggestionEngine>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskLifecycleService {
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        engine: Arc<dyn SuggestionEngine>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            engine,
            clock,
        }
    }

    /// Creates a new task for the owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is empty and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(
            owner,
            title,
            request.description.unwrap_or_default(),
            request.priority.unwrap_or_default(),
            self.clock.as_ref(),
        );
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Returns all tasks owned by the caller, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self, owner: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_by_owner(owner).await?)
    }

    /// Overwrites the supplied title/description fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for the owner and [`TaskLifecycleError::Domain`] when the new title
    /// is empty.
    pub async fn update_fields(
        &self,
        owner: UserId,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(owner, id).await?;
        let title = request.title.map(TaskTitle::new).transpose()?;
        task.edit(title, request.description, self.clock.as_ref());
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sets the completion flag. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for the owner.
    pub async fn set_completed(
        &self,
        owner: UserId,
        id: TaskId,
        completed: bool,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(owner, id).await?;
        task.set_completed(completed, self.clock.as_ref());
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for the owner.
    pub async fn delete(&self, owner: UserId, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(owner, id).await?)
    }

    /// Requests a fresh suggestion from the engine and attaches it.
    ///
    /// Allowed whether or not a suggestion is already pending; re-requesting
    /// replaces the prior suggestion and retakes the description snapshot
    /// from the task's current state. The engine call is awaited without
    /// holding any lock on the task record, and any engine failure leaves
    /// the persisted task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for the owner, and [`TaskLifecycleError::Suggestion`] when the engine
    /// fails; rate limiting is preserved so callers can ask users to retry
    /// later.
    pub async fn request_suggestion(
        &self,
        owner: UserId,
        id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(owner, id).await?;

        let description = if task.description().trim().is_empty() {
            EMPTY_DESCRIPTION_PLACEHOLDER.to_owned()
        } else {
            task.description().trim().to_owned()
        };
        let request = SuggestionRequest {
            title: task.title().as_str().to_owned(),
            description,
            priority: task.priority(),
        };

        let advice = self.engine.improve(&request).await?;
        task.attach_suggestion(advice, None, self.clock.as_ref());
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Applies the pending suggestion and clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for the owner and [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::NoPendingSuggestion`] when the task is clean.
    pub async fn accept_suggestion(&self, owner: UserId, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.load(owner, id).await?;
        task.accept_suggestion(self.clock.as_ref())?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Discards the pending suggestion, restoring the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// for the owner and [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::NoPendingSuggestion`] when the task is clean.
    pub async fn reject_suggestion(&self, owner: UserId, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.load(owner, id).await?;
        task.reject_suggestion(self.clock.as_ref())?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    async fn load(&self, owner: UserId, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find(owner, id)
            .await?
            .ok_or(TaskLifecycleError::NotFound)
    }
}
