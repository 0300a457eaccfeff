//! Record lifecycle: create, patch-and-save, delete.

use kunst_domain::{Artwork, ArtworkStatus, Collection};
use kunst_store::{CatalogStore, StoreError};

/// New unsaved artwork with default values: fresh id, owned status, empty
/// fields, random placeholder, creation time now. Nothing is persisted
/// until [`save_artwork`] is called.
pub fn new_artwork() -> Artwork {
    Artwork::new()
}

/// Field-level overwrites applied to an artwork on save.
///
/// Carries every editable field, mirroring the edit form: free text is
/// trimmed, empty optional fields become absent. `id`, `created_at`, and
/// `placeholder_class` are not part of the patch and never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkPatch {
    pub status: ArtworkStatus,
    pub title: String,
    pub artist: String,
    pub year: Option<i32>,
    pub medium: String,
    pub dimensions: String,
    pub location: String,
    pub personal_note: String,
    pub source_url: String,
    pub collections: Vec<String>,
    pub image_data: Option<String>,
}

impl ArtworkPatch {
    /// Snapshot of an existing artwork's editable fields, for pre-filling
    /// the edit form.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            status: artwork.status,
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            year: artwork.year,
            medium: artwork.medium.clone().unwrap_or_default(),
            dimensions: artwork.dimensions.clone().unwrap_or_default(),
            location: artwork.location.clone().unwrap_or_default(),
            personal_note: artwork.personal_note.clone().unwrap_or_default(),
            source_url: artwork.source_url.clone().unwrap_or_default(),
            collections: artwork.collections.clone(),
            image_data: artwork.image_data.clone(),
        }
    }

    /// Apply the patch in place. Identity fields are untouched.
    pub fn apply_to(&self, artwork: &mut Artwork) {
        artwork.status = self.status;
        artwork.title = self.title.trim().to_string();
        artwork.artist = self.artist.trim().to_string();
        artwork.year = self.year;
        artwork.medium = trimmed_opt(&self.medium);
        artwork.dimensions = trimmed_opt(&self.dimensions);
        artwork.location = trimmed_opt(&self.location);
        artwork.personal_note = trimmed_opt(&self.personal_note);
        artwork.source_url = trimmed_opt(&self.source_url);
        artwork.collections = self.collections.clone();
        artwork.image_data = self.image_data.clone();
    }
}

/// Trim whitespace and coerce empty strings to absent.
fn trimmed_opt(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a year form field: trimmed integer, or absent for blank/garbage.
pub fn parse_year(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Persist an artwork. Upsert by id: saving an edited record under its
/// existing id overwrites it by design.
pub fn save_artwork(store: &dyn CatalogStore, artwork: &Artwork) -> Result<(), StoreError> {
    store.put_artwork(artwork)
}

/// Fetch, patch, and persist an existing artwork. Returns the updated
/// record; `NotFound` if the id is no longer present.
pub fn update_artwork(
    store: &dyn CatalogStore,
    id: &str,
    patch: &ArtworkPatch,
) -> Result<Artwork, StoreError> {
    let mut artwork = store
        .get_artwork(id)?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    patch.apply_to(&mut artwork);
    store.put_artwork(&artwork)?;
    Ok(artwork)
}

/// Remove an artwork. Destructive; callers confirm intent first (see
/// [`crate::session::ConfirmRequest`]). Missing ids are a no-op.
pub fn delete_artwork(store: &dyn CatalogStore, id: &str) -> Result<(), StoreError> {
    store.delete_artwork(id)
}

/// Create and persist a new collection, appended to the end of the display
/// order.
pub fn create_collection(
    store: &dyn CatalogStore,
    name: &str,
) -> Result<Collection, StoreError> {
    let next_order = store
        .collections_ordered()?
        .iter()
        .map(|c| c.sort_order)
        .max()
        .map_or(0, |max| max + 1);
    let collection = Collection::new(name.trim(), next_order);
    store.put_collection(&collection)?;
    Ok(collection)
}
