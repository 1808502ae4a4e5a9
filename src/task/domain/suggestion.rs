//! Pending suggestion state attached to a task.

use super::{Priority, PriorityAdvice};
use serde::{Deserialize, Serialize};

/// An unapplied AI-generated rewrite awaiting an accept or undo decision.
///
/// The description snapshot travels with the suggestion text, so a
/// suggestion can never exist without the value needed to restore the task
/// on undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSuggestion {
    /// Suggested replacement description.
    pub text: String,
    /// Description at the moment the suggestion was generated.
    pub original_description: String,
    /// Optional priority recommendation applied on accept.
    pub priority_advice: Option<PriorityAdvice>,
    /// Priority snapshot restored on undo; taken only when advice exists.
    pub original_priority: Option<Priority>,
}

/// Suggestion state of a task.
///
/// Every newly created task starts `Clean`. Requesting a suggestion moves
/// the task to `Pending`; accepting or undoing moves it back to `Clean`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SuggestionState {
    /// No suggestion pending.
    #[default]
    Clean,
    /// A suggestion awaits an accept or undo decision.
    Pending(PendingSuggestion),
}

impl SuggestionState {
    /// Returns true when a suggestion awaits a decision.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns the pending suggestion, if any.
    #[must_use]
    pub const fn as_pending(&self) -> Option<&PendingSuggestion> {
        match self {
            Self::Clean => None,
            Self::Pending(pending) => Some(pending),
        }
    }
}
