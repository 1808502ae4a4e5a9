//! Taskwise: personal task tracking with AI-assisted rewrites.
//!
//! This crate provides a small web service where users register, log in,
//! and manage a private list of tasks. A task's description can be rewritten
//! by an external generative-text provider; the resulting suggestion sits in
//! a pending slot until the owner accepts it or undoes it.
//!
//! # Architecture
//!
//! Taskwise follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, provider APIs)
//!
//! # Modules
//!
//! - [`auth`]: User identity, credential verification, and session tokens
//! - [`task`]: Owner-scoped task records and the suggestion state machine
//! - [`api`]: The axum HTTP surface consumed by the browser client
//! - [`config`]: Environment-backed configuration loaded once at startup

pub mod api;
pub mod auth;
pub mod config;
pub mod task;
