//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod advisor;
pub mod repository;

pub use advisor::{
    MIN_SUGGESTION_CHARS, SuggestionEngine, SuggestionError, SuggestionRequest, SuggestionResult,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
