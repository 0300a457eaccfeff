//! Per-session UI state: the active filter, the open detail view, and the
//! confirmation seam for destructive actions.
//!
//! One `Session` is owned by the application controller and passed to the
//! UI layer; each component gets only the slice it needs. Nothing here is
//! persisted — a session is safe to discard and rebuild from the store.

use kunst_domain::Artwork;
use kunst_store::{CatalogStore, StoreError};

use crate::cursor::{Direction, NavigationCursor};
use crate::filter::{CollectionFilter, LibraryFilter, StatusFilter};
use crate::lifecycle;

/// Everything the detail screen needs to render one artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPayload {
    pub artwork: Artwork,
    /// Resolved names of the collections this artwork belongs to, in
    /// display order. Dangling collection ids are skipped.
    pub collection_names: Vec<String>,
}

/// Description of a destructive action awaiting user confirmation.
///
/// The dialog is invoked with this request and answers with a
/// [`ConfirmDecision`]; there is no stored callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
}

impl ConfirmRequest {
    /// Request shown before deleting an artwork.
    pub fn delete_artwork() -> Self {
        Self {
            title: "Delete artwork?".into(),
            message: "This action cannot be undone.".into(),
        }
    }
}

/// The user's answer to a [`ConfirmRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Confirmed,
    Cancelled,
}

#[derive(Debug)]
struct DetailState {
    cursor: NavigationCursor,
    current: Artwork,
    panel_expanded: bool,
}

/// Session state for one running UI.
#[derive(Debug, Default)]
pub struct Session {
    filter: LibraryFilter,
    detail: Option<DetailState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active grid filter.
    pub fn filter(&self) -> &LibraryFilter {
        &self.filter
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_collection_filter(&mut self, collection: CollectionFilter) {
        self.filter.collection = collection;
    }

    /// Open the detail view on an artwork.
    ///
    /// Captures a fresh visible-list snapshot for navigation and collapses
    /// the info panel. Returns `false` (a no-op) when the id no longer
    /// exists — the caller simply does not render.
    pub fn open_detail(
        &mut self,
        store: &dyn CatalogStore,
        artwork_id: &str,
    ) -> Result<bool, StoreError> {
        let Some(artwork) = store.get_artwork(artwork_id)? else {
            return Ok(false);
        };
        let cursor = NavigationCursor::enter(store, &self.filter, artwork_id)?;
        self.detail = Some(DetailState {
            cursor,
            current: artwork,
            panel_expanded: false,
        });
        Ok(true)
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Whether the detail view is open.
    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Step to the previous or next artwork in the detail view.
    ///
    /// No-op (`None`) when no detail view is open, while the info panel is
    /// expanded (horizontal navigation is blocked in that state), or when
    /// the cursor is at a boundary.
    pub fn navigate(
        &mut self,
        store: &dyn CatalogStore,
        direction: Direction,
    ) -> Result<Option<&Artwork>, StoreError> {
        let Some(detail) = self.detail.as_mut() else {
            return Ok(None);
        };
        if detail.panel_expanded {
            return Ok(None);
        }
        match detail.cursor.step(store, direction)? {
            Some(fresh) => {
                detail.current = fresh;
                Ok(Some(&detail.current))
            }
            None => Ok(None),
        }
    }

    /// Expand or collapse the detail info panel.
    pub fn set_panel_expanded(&mut self, expanded: bool) {
        if let Some(detail) = self.detail.as_mut() {
            detail.panel_expanded = expanded;
        }
    }

    pub fn panel_expanded(&self) -> bool {
        self.detail.as_ref().is_some_and(|d| d.panel_expanded)
    }

    /// 1-based "M / N" indicator for the open detail view; `None` when
    /// hidden.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.detail.as_ref().and_then(|d| d.cursor.position())
    }

    /// Render data for the open detail view, with collection names
    /// resolved against the store.
    pub fn detail_payload(
        &self,
        store: &dyn CatalogStore,
    ) -> Result<Option<DetailPayload>, StoreError> {
        let Some(detail) = self.detail.as_ref() else {
            return Ok(None);
        };
        let collection_names = store
            .collections_ordered()?
            .into_iter()
            .filter(|c| detail.current.collections.contains(&c.id))
            .map(|c| c.name)
            .collect();
        Ok(Some(DetailPayload {
            artwork: detail.current.clone(),
            collection_names,
        }))
    }

    /// Resolve a pending delete confirmation for the open artwork.
    ///
    /// On `Confirmed`, deletes the record and closes the detail view;
    /// returns whether a delete actually happened.
    pub fn confirm_delete(
        &mut self,
        store: &dyn CatalogStore,
        decision: ConfirmDecision,
    ) -> Result<bool, StoreError> {
        if decision != ConfirmDecision::Confirmed {
            return Ok(false);
        }
        let Some(detail) = self.detail.take() else {
            return Ok(false);
        };
        lifecycle::delete_artwork(store, &detail.current.id)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kunst_domain::{ArtworkStatus, Collection};
    use kunst_store::SqliteCatalogStore;

    fn artwork(id: &str, created_at: i64) -> Artwork {
        Artwork {
            id: id.to_string(),
            status: ArtworkStatus::Owned,
            created_at,
            ..Artwork::new()
        }
    }

    #[test]
    fn open_detail_on_missing_id_is_noop() {
        let store = SqliteCatalogStore::open_in_memory().unwrap();
        let mut session = Session::new();
        assert!(!session.open_detail(&store, "ghost").unwrap());
        assert!(!session.detail_open());
    }

    #[test]
    fn expanded_panel_blocks_navigation() {
        let store = SqliteCatalogStore::open_in_memory().unwrap();
        store.put_artwork(&artwork("a", 1)).unwrap();
        store.put_artwork(&artwork("b", 2)).unwrap();

        let mut session = Session::new();
        assert!(session.open_detail(&store, "b").unwrap());

        session.set_panel_expanded(true);
        assert!(session.navigate(&store, Direction::Next).unwrap().is_none());

        session.set_panel_expanded(false);
        let next = session.navigate(&store, Direction::Next).unwrap();
        assert_eq!(next.unwrap().id, "a");
    }

    #[test]
    fn payload_resolves_collection_names_and_skips_danglers() {
        let store = SqliteCatalogStore::open_in_memory().unwrap();
        let mut living = Collection::new("Living Room", 0);
        living.id = "col-1".into();
        store.put_collection(&living).unwrap();

        let mut art = artwork("a", 1);
        art.collections = vec!["col-1".into(), "col-deleted".into()];
        store.put_artwork(&art).unwrap();

        let mut session = Session::new();
        session.open_detail(&store, "a").unwrap();

        let payload = session.detail_payload(&store).unwrap().unwrap();
        assert_eq!(payload.collection_names, vec!["Living Room"]);
    }

    #[test]
    fn confirm_delete_requires_confirmation() {
        let store = SqliteCatalogStore::open_in_memory().unwrap();
        store.put_artwork(&artwork("a", 1)).unwrap();

        let mut session = Session::new();
        session.open_detail(&store, "a").unwrap();

        assert!(!session
            .confirm_delete(&store, ConfirmDecision::Cancelled)
            .unwrap());
        assert!(session.detail_open());
        assert!(store.get_artwork("a").unwrap().is_some());

        assert!(session
            .confirm_delete(&store, ConfirmDecision::Confirmed)
            .unwrap());
        assert!(!session.detail_open());
        assert!(store.get_artwork("a").unwrap().is_none());
    }

    #[test]
    fn filter_changes_apply_to_next_detail_entry() {
        let store = SqliteCatalogStore::open_in_memory().unwrap();
        store.put_artwork(&artwork("a", 1)).unwrap();
        let mut wish = artwork("b", 2);
        wish.status = ArtworkStatus::Wishlist;
        store.put_artwork(&wish).unwrap();

        let mut session = Session::new();
        session.set_status_filter(StatusFilter::Owned);
        session.open_detail(&store, "a").unwrap();

        // "a" is the only owned artwork, so the indicator is hidden and
        // stepping has nowhere to go.
        assert_eq!(session.position(), None);
        assert!(session.navigate(&store, Direction::Next).unwrap().is_none());
    }
}
