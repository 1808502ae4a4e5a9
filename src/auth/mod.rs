//! User identity and session management for Taskwise.
//!
//! This module covers the credential store and the session boundary:
//! registering users, verifying credentials at login, and issuing and
//! validating the bearer tokens that gate every task operation. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
