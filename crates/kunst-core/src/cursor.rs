//! Navigation cursor for detail-view paging.
//!
//! The cursor captures a snapshot of the visible list when the detail view
//! opens and pages through it with bounded prev/next steps. The snapshot is
//! never refreshed mid-navigation; the artwork at the new position is always
//! re-fetched by id so edits made since capture show up.

use kunst_domain::Artwork;
use kunst_store::{CatalogStore, StoreError};

use crate::filter::{visible_list, LibraryFilter};

/// Paging direction in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Position tracker within a snapshot of the visible list.
#[derive(Debug, Clone)]
pub struct NavigationCursor {
    snapshot: Vec<Artwork>,
    index: usize,
}

impl NavigationCursor {
    /// Capture the current visible list and position the cursor on
    /// `artwork_id`.
    ///
    /// Falls back to index 0 when the id is not in the list — the artwork
    /// can be absent from its own filtered list if filters changed between
    /// grid render and detail open.
    pub fn enter(
        store: &dyn CatalogStore,
        filter: &LibraryFilter,
        artwork_id: &str,
    ) -> Result<Self, StoreError> {
        let snapshot = visible_list(store, filter)?;
        let index = snapshot
            .iter()
            .position(|a| a.id == artwork_id)
            .unwrap_or(0);
        Ok(Self { snapshot, index })
    }

    /// Step one position, bounded at both ends (no wraparound).
    ///
    /// Returns the freshly fetched artwork at the new position, or `None`
    /// when the step was a no-op: at a boundary, or when the record at the
    /// target position has been deleted since snapshot capture. The index
    /// only moves when a fresh record was actually fetched.
    pub fn step(
        &mut self,
        store: &dyn CatalogStore,
        direction: Direction,
    ) -> Result<Option<Artwork>, StoreError> {
        let target = match direction {
            Direction::Prev => self.index.checked_sub(1),
            Direction::Next => self
                .index
                .checked_add(1)
                .filter(|i| *i < self.snapshot.len()),
        };
        let Some(target) = target else {
            return Ok(None);
        };

        let Some(fresh) = store.get_artwork(&self.snapshot[target].id)? else {
            return Ok(None);
        };
        self.index = target;
        Ok(Some(fresh))
    }

    /// 0-based position within the snapshot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of artworks in the snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Id of the artwork the cursor currently points at.
    pub fn current_id(&self) -> Option<&str> {
        self.snapshot.get(self.index).map(|a| a.id.as_str())
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.snapshot.len()
    }

    /// 1-based "M / N" position for the indicator; `None` when the
    /// indicator is hidden (one artwork or fewer).
    pub fn position(&self) -> Option<(usize, usize)> {
        let total = self.snapshot.len();
        if total <= 1 {
            None
        } else {
            Some((self.index + 1, total))
        }
    }
}
