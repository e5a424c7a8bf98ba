//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Cake, CakeId, NewCake};

/// Create a test cake with ID 1
pub fn test_cake() -> Cake {
    test_cake_with_id(1)
}

/// Create a test cake with a specific ID
pub fn test_cake_with_id(id: i64) -> Cake {
    Cake {
        id: CakeId(id),
        title: "Mock Cake".to_string(),
        description: "Mock Cake Description".to_string(),
    }
}

/// Create a new-cake payload with a given title
pub fn new_cake(title: &str) -> NewCake {
    NewCake {
        title: title.to_string(),
        description: format!("{} description", title),
    }
}
