//! Unit tests for the auth module.
//!
//! Tests are organised by layer: domain validation on one side, the
//! registration/login/token service on the other.

mod domain_tests;
