//! Task aggregate root and suggestion state transitions.

use super::{PendingSuggestion, Priority, PriorityAdvice, SuggestionState, TaskDomainError, TaskId, TaskTitle};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// All mutations run through the methods below so the suggestion state
/// machine can never be left half-applied: a transition either updates the
/// data fields and the suggestion slot together, or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: TaskTitle,
    description: String,
    priority: Priority,
    completed: bool,
    suggestion: SuggestionState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted suggestion state.
    pub suggestion: SuggestionState,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by the given user.
    ///
    /// The task starts with no suggestion pending and not completed.
    #[must_use]
    pub fn new(
        owner: UserId,
        title: TaskTitle,
        description: String,
        priority: Priority,
        clock: &dyn Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner,
            title,
            description,
            priority,
            completed: false,
            suggestion: SuggestionState::Clean,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            priority: data.priority,
            completed: data.completed,
            suggestion: data.suggestion,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the suggestion state.
    #[must_use]
    pub const fn suggestion(&self) -> &SuggestionState {
        &self.suggestion
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites the supplied fields, leaving the suggestion state alone.
    pub fn edit(
        &mut self,
        title: Option<TaskTitle>,
        description: Option<String>,
        clock: &dyn Clock,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.touch(clock);
    }

    /// Sets the completion flag. Idempotent.
    pub fn set_completed(&mut self, completed: bool, clock: &dyn Clock) {
        self.completed = completed;
        self.touch(clock);
    }

    /// Attaches a suggested rewrite, snapshotting the current description.
    ///
    /// Allowed from any state: re-requesting while a suggestion is pending
    /// replaces it, and the snapshot is retaken from the task's *current*
    /// description rather than any earlier one. A priority snapshot is taken
    /// only when the suggestion carries priority advice, so undo can restore
    /// it. Never mutates `description` or `priority` directly.
    pub fn attach_suggestion(
        &mut self,
        text: impl Into<String>,
        priority_advice: Option<PriorityAdvice>,
        clock: &dyn Clock,
    ) {
        let original_priority = priority_advice.is_some().then_some(self.priority);
        self.suggestion = SuggestionState::Pending(PendingSuggestion {
            text: text.into(),
            original_description: self.description.clone(),
            priority_advice,
            original_priority,
        });
        self.touch(clock);
    }

    /// Applies the pending suggestion.
    ///
    /// Copies the suggestion text into the description and, when the advice
    /// names a concrete priority, applies it. Clears the suggestion slot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NoPendingSuggestion`] when the task has no
    /// suggestion pending; the task is left unchanged.
    pub fn accept_suggestion(&mut self, clock: &dyn Clock) -> Result<(), TaskDomainError> {
        match std::mem::take(&mut self.suggestion) {
            SuggestionState::Clean => Err(TaskDomainError::NoPendingSuggestion(self.id)),
            SuggestionState::Pending(pending) => {
                self.description = pending.text;
                if let Some(PriorityAdvice::Set(priority)) = pending.priority_advice {
                    self.priority = priority;
                }
                self.touch(clock);
                Ok(())
            }
        }
    }

    /// Discards the pending suggestion, restoring the snapshots.
    ///
    /// The description returns to its pre-suggestion value. The priority is
    /// restored only when a priority snapshot was taken; otherwise it is
    /// left unchanged. Clears the suggestion slot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NoPendingSuggestion`] when the task has no
    /// suggestion pending; the task is left unchanged.
    pub fn reject_suggestion(&mut self, clock: &dyn Clock) -> Result<(), TaskDomainError> {
        match std::mem::take(&mut self.suggestion) {
            SuggestionState::Clean => Err(TaskDomainError::NoPendingSuggestion(self.id)),
            SuggestionState::Pending(pending) => {
                self.description = pending.original_description;
                if let Some(priority) = pending.original_priority {
                    self.priority = priority;
                }
                self.touch(clock);
                Ok(())
            }
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &dyn Clock) {
        self.updated_at = clock.utc();
    }
}
