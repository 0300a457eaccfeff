//! Backup codec: the whole catalog as one self-contained JSON document.
//!
//! Export includes every artwork with its embedded image data, so a backup
//! file is portable on its own. Import applies the document under a merge
//! or replace policy in a single store transaction.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use kunst_domain::{Artwork, Collection};
use kunst_store::{CatalogStore, ImportMode, StoreError};

/// Current backup document version.
pub const BACKUP_VERSION: u32 = 1;

/// A full catalog backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default)]
    pub exported_at: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub collections: Vec<Collection>,
    pub artworks: Vec<Artwork>,
}

fn default_version() -> u32 {
    BACKUP_VERSION
}

/// Errors from the backup codec.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("invalid backup document: {0}")]
    InvalidFormat(String),

    #[error("unsupported backup version: {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialize the entire store into a backup document.
pub fn export_document(store: &dyn CatalogStore) -> Result<BackupDocument, BackupError> {
    let document = BackupDocument {
        exported_at: Utc::now().to_rfc3339(),
        version: BACKUP_VERSION,
        collections: store.collections_ordered()?,
        artworks: store.all_artworks()?,
    };
    tracing::debug!(
        collections = document.collections.len(),
        artworks = document.artworks.len(),
        "exported backup document"
    );
    Ok(document)
}

/// Pretty-printed JSON for writing to a backup file.
pub fn to_json(document: &BackupDocument) -> Result<String, BackupError> {
    serde_json::to_string_pretty(document)
        .map_err(|e| BackupError::InvalidFormat(e.to_string()))
}

/// Date-stamped filename for an export, e.g.
/// `art-collection-backup-2026-08-28.json`.
pub fn backup_filename(date: NaiveDate) -> String {
    format!("art-collection-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Parse and validate a backup document.
///
/// A document missing its `collections` or `artworks` sequence (or that is
/// not a JSON object at all) is a format error; an unknown `version` is
/// rejected rather than misread. Nothing is mutated on failure.
pub fn parse_document(json: &str) -> Result<BackupDocument, BackupError> {
    let document: BackupDocument =
        serde_json::from_str(json).map_err(|e| BackupError::InvalidFormat(e.to_string()))?;
    if document.version != BACKUP_VERSION {
        return Err(BackupError::UnsupportedVersion(document.version));
    }
    Ok(document)
}

/// Apply a backup document to the store.
///
/// `Merge` adds records whose ids are missing and silently drops colliding
/// ones; `Replace` clears both record kinds first. Either way the writes
/// happen in one transaction, so a failure leaves the store untouched.
///
/// Returns the number of artworks present in the document (not the number
/// written) for user-facing reporting.
pub fn import_document(
    store: &dyn CatalogStore,
    document: &BackupDocument,
    mode: ImportMode,
) -> Result<usize, BackupError> {
    store.apply_snapshot(&document.collections, &document.artworks, mode)?;
    tracing::info!(
        artworks = document.artworks.len(),
        ?mode,
        "imported backup document"
    );
    Ok(document.artworks.len())
}
