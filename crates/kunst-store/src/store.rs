use serde::{Deserialize, Serialize};

use kunst_domain::{Artwork, ArtworkStatus, Collection};

/// How `apply_snapshot` treats records whose id already exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Add missing records only; existing records are never overwritten and
    /// colliding incoming ids are silently dropped.
    Merge,
    /// Clear both record kinds first, then write every incoming record
    /// (last-write-wins on duplicate ids within the snapshot itself).
    Replace,
}

/// The trait catalog storage backends implement.
///
/// All writes are upserts by id; `delete_*` on a missing id is a no-op.
pub trait CatalogStore: Send + Sync {
    /// Insert or replace an artwork by id.
    fn put_artwork(&self, artwork: &Artwork) -> Result<(), StoreError>;

    /// Get an artwork by id.
    fn get_artwork(&self, id: &str) -> Result<Option<Artwork>, StoreError>;

    /// Delete an artwork by id.
    fn delete_artwork(&self, id: &str) -> Result<(), StoreError>;

    /// All artworks in insertion order.
    fn all_artworks(&self) -> Result<Vec<Artwork>, StoreError>;

    /// Count artworks, optionally restricted to one status.
    fn count_artworks(&self, status: Option<ArtworkStatus>) -> Result<usize, StoreError>;

    /// Insert or replace a collection by id.
    fn put_collection(&self, collection: &Collection) -> Result<(), StoreError>;

    /// Get a collection by id.
    fn get_collection(&self, id: &str) -> Result<Option<Collection>, StoreError>;

    /// Delete a collection by id. Artworks referencing it keep their
    /// (now dangling) membership entries.
    fn delete_collection(&self, id: &str) -> Result<(), StoreError>;

    /// All collections, ascending by `sort_order`, ties in insertion order.
    fn collections_ordered(&self) -> Result<Vec<Collection>, StoreError>;

    /// Apply a full snapshot of records in a single transaction.
    ///
    /// Used by the backup codec so a failed import leaves the store
    /// untouched rather than half-applied.
    fn apply_snapshot(
        &self,
        collections: &[Collection],
        artworks: &[Artwork],
        mode: ImportMode,
    ) -> Result<(), StoreError>;
}

/// Errors from the catalog store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}
