//! In-memory adapters
//!
//! Process-local implementations of repository traits. Used when no
//! database is configured.

pub mod cake_repo;

pub use cake_repo::InMemoryCakeRepository;
