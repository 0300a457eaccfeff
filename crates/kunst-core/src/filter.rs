//! Derivation of the visible artwork list from store contents and filter state.

use serde::{Deserialize, Serialize};

use kunst_domain::{Artwork, ArtworkStatus};
use kunst_store::{CatalogStore, StoreError};

/// Status tab filter for the home grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Owned,
    Wishlist,
}

impl StatusFilter {
    fn matches(&self, status: ArtworkStatus) -> bool {
        match self {
            Self::All => true,
            Self::Owned => status == ArtworkStatus::Owned,
            Self::Wishlist => status == ArtworkStatus::Wishlist,
        }
    }
}

/// Collection pill filter for the home grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionFilter {
    #[default]
    All,
    In(String),
}

impl CollectionFilter {
    fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            Self::All => true,
            Self::In(id) => artwork.collections.iter().any(|c| c == id),
        }
    }
}

/// The active filter state for the home grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryFilter {
    pub status: StatusFilter,
    pub collection: CollectionFilter,
}

impl LibraryFilter {
    pub fn status_only(status: StatusFilter) -> Self {
        Self {
            status,
            collection: CollectionFilter::All,
        }
    }
}

/// Recompute the visible artwork list: status filter, then collection
/// filter, then sort by `created_at` descending.
///
/// Pure function of store contents plus filter state; always a full
/// recomputation, never an incremental patch. The sort is stable, so
/// artworks with equal timestamps keep their insertion order.
pub fn visible_list(
    store: &dyn CatalogStore,
    filter: &LibraryFilter,
) -> Result<Vec<Artwork>, StoreError> {
    let mut artworks: Vec<Artwork> = store
        .all_artworks()?
        .into_iter()
        .filter(|a| filter.status.matches(a.status) && filter.collection.matches(a))
        .collect();
    artworks.sort_by_key(|a| std::cmp::Reverse(a.created_at));
    Ok(artworks)
}

/// Artwork counts for the status tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub all: usize,
    pub owned: usize,
    pub wishlist: usize,
}

/// Counts per status tab, independent of the active collection filter.
pub fn status_counts(store: &dyn CatalogStore) -> Result<StatusCounts, StoreError> {
    Ok(StatusCounts {
        all: store.count_artworks(None)?,
        owned: store.count_artworks(Some(ArtworkStatus::Owned))?,
        wishlist: store.count_artworks(Some(ArtworkStatus::Wishlist))?,
    })
}
