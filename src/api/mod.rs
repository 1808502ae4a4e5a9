//! HTTP surface for Taskwise.
//!
//! Thin axum layer over the auth and task services: DTOs matching the wire
//! shapes consumed by the browser client, a typed API error, the bearer
//! token extractor, and route configuration. No business rules live here.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
