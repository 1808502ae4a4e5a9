//! Domain model for task lifecycle management.
//!
//! The task domain models owner-scoped task records and the pending
//! suggestion state machine while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod suggestion;
mod task;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use priority::{Priority, PriorityAdvice};
pub use suggestion::{PendingSuggestion, SuggestionState};
pub use task::{PersistedTaskData, Task};
