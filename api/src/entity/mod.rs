//! SeaORM entities
//!
//! Database table models. These are mapped to and from the domain entities
//! in `domain::entities` by the PostgreSQL adapters.

pub mod cakes;
