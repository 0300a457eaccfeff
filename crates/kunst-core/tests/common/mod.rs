//! Shared test fixtures

use kunst_domain::{Artwork, ArtworkStatus};
use kunst_store::SqliteCatalogStore;

pub fn store() -> SqliteCatalogStore {
    SqliteCatalogStore::open_in_memory().expect("in-memory store")
}

pub fn artwork(id: &str, status: ArtworkStatus, created_at: i64) -> Artwork {
    Artwork {
        id: id.to_string(),
        status,
        created_at,
        ..Artwork::new()
    }
}
