//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod cake_repo;


pub use cake_repo::PostgresCakeRepository;
