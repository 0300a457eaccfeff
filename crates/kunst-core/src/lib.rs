//! kunst-core: core logic for the kunst art-collection catalog
//!
//! Pure collection logic over a `CatalogStore`, kept free of rendering:
//! - Query/filter engine deriving the visible artwork list
//! - Navigation cursor for detail-view paging
//! - Session state (active filter, open detail, confirmation seam)
//! - Record lifecycle (create, patch-and-save, delete)
//! - Backup codec (JSON export/import with merge/replace modes)
//! - First-launch sample seeding
//!
//! The UI layer consumes the derived data (visible list, detail payload,
//! status counts) and feeds back user intents; it never touches the store
//! directly.

pub mod backup;
pub mod cursor;
pub mod filter;
pub mod lifecycle;
pub mod seed;
pub mod session;

pub use backup::{
    backup_filename, export_document, import_document, parse_document, to_json, BackupDocument,
    BackupError, BACKUP_VERSION,
};
pub use cursor::{Direction, NavigationCursor};
pub use filter::{
    status_counts, visible_list, CollectionFilter, LibraryFilter, StatusCounts, StatusFilter,
};
pub use lifecycle::{
    create_collection, delete_artwork, new_artwork, parse_year, save_artwork, update_artwork,
    ArtworkPatch,
};
pub use seed::{sample_artworks, sample_collections, seed_if_empty};
pub use session::{ConfirmDecision, ConfirmRequest, DetailPayload, Session};

// Re-exported so UI callers only need kunst-core.
pub use kunst_store::ImportMode;
