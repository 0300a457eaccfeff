//! Collection representation for grouping artworks

use serde::{Deserialize, Serialize};

/// A user-named grouping of artworks, independent of status.
///
/// Referenced (never owned) by artworks via their `collections` set.
/// Display order is ascending `sort_order`, ties broken by insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub sort_order: i64,
}

impl Collection {
    /// Create a new collection at the given display position.
    pub fn new(name: impl Into<String>, sort_order: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            sort_order,
        }
    }
}
