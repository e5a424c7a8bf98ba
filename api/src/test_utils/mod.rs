//! Test utilities
//!
//! Test doubles and fixtures for unit testing.
//!
//! Handler tests mock the `CakeService` trait with mockall
//! (`app::MockCakeService`). Service tests run against the real in-memory
//! repository, plus the hand-written failing repository below for error paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
