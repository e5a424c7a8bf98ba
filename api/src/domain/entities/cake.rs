//! Cake domain entity
//!
//! The only resource served by the API: a titled, described item with a
//! server-assigned identifier.

/// Unique identifier for a cake
///
/// Assigned by the store on creation. Identifiers only grow and are never
/// handed out twice, even after the cake they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CakeId(pub i64);

impl std::fmt::Display for CakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cake domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cake {
    pub id: CakeId,
    pub title: String,
    pub description: String,
}

/// Data for creating a new cake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCake {
    pub title: String,
    pub description: String,
}

/// Replacement fields for an existing cake
///
/// The identifier is never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CakeUpdate {
    pub title: String,
    pub description: String,
}

impl Cake {
    /// Apply an update in place, keeping the identifier
    pub fn apply(&mut self, update: &CakeUpdate) {
        self.title = update.title.clone();
        self.description = update.description.clone();
    }
}
