//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod cakes;

pub use cakes::{create_cake, delete_cake, get_cake, list_cakes, update_cake};
