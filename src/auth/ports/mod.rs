//! Port contracts for user identity management.
//!
//! Ports define infrastructure-agnostic interfaces used by auth services.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
