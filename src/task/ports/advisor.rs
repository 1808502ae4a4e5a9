//! Suggestion engine port wrapping the external generative-text provider.

use crate::task::domain::Priority;
use async_trait::async_trait;
use thiserror::Error;

/// Minimum number of characters a provider response must contain.
///
/// Anything shorter is treated as an invalid response and classified as a
/// generic provider failure.
pub const MIN_SUGGESTION_CHARS: usize = 10;

/// Result type for suggestion engine operations.
pub type SuggestionResult<T> = Result<T, SuggestionError>;

/// Snapshot of the task fields handed to the suggestion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Task title.
    pub title: String,
    /// Task description; callers substitute a placeholder when empty.
    pub description: String,
    /// Current task priority.
    pub priority: Priority,
}

/// Contract for producing free-text improvement advice.
///
/// Implementations return plain prose combining a clarified description and
/// a comment on priority appropriateness, with no structural markup. Output
/// need not be deterministic between calls, but must be non-empty and at
/// least [`MIN_SUGGESTION_CHARS`] characters long.
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    /// Produces improvement advice for the given task fields.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError::RateLimited`] when the provider reports
    /// quota exhaustion, and [`SuggestionError::Provider`] for every other
    /// failure (transport errors, malformed responses, undersized output).
    async fn improve(&self, request: &SuggestionRequest) -> SuggestionResult<String>;
}

/// Provider failures, classified into exactly two buckets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The provider's rate or quota limit was exceeded; retry later.
    #[error("suggestion provider quota exceeded")]
    RateLimited,

    /// Any other provider failure.
    #[error("suggestion provider failure: {0}")]
    Provider(String),
}
