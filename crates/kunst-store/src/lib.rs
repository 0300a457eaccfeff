//! Local catalog storage for the kunst art-collection apps
//!
//! `CatalogStore` is the trait the core logic talks to; `SqliteCatalogStore`
//! is the durable implementation. The visible list, cursor, and session are
//! derived state elsewhere — this crate only persists artworks and
//! collections and answers key/index lookups over them.

pub mod location;
pub mod sqlite_store;
pub mod store;

pub use location::default_db_path;
pub use sqlite_store::SqliteCatalogStore;
pub use store::{CatalogStore, ImportMode, StoreError};
