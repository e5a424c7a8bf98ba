//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod cake_service;

pub use cake_service::{CakeService, CakeServiceImpl};

#[cfg(test)]
pub use cake_service::MockCakeService;
