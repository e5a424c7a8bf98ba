//! Domain layer
//!
//! The cake model and the ports the application needs from the outside.
//! - `entities`: Domain models
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
