use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use kunst_domain::{Artwork, ArtworkStatus, Collection, PlaceholderClass};

use crate::store::{CatalogStore, ImportMode, StoreError};

/// SQLite-backed implementation of the CatalogStore trait.
pub struct SqliteCatalogStore {
    conn: Mutex<Connection>,
}

impl SqliteCatalogStore {
    /// Open (or create) a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        tracing::debug!(path = %path.display(), "opening catalog store");
        let conn =
            Connection::open(path).map_err(|e| StoreError::Storage(format!("open: {}", e)))?;
        Self::init_with_connection(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Storage(format!("open_in_memory: {}", e)))?;
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self, StoreError> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS artworks (
                id TEXT PRIMARY KEY,
                status TEXT NOT NULL,
                title TEXT NOT NULL DEFAULT '',
                artist TEXT NOT NULL DEFAULT '',
                year INTEGER,
                medium TEXT,
                dimensions TEXT,
                location TEXT,
                personal_note TEXT,
                source_url TEXT,
                image_data TEXT,
                placeholder_class TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            -- Membership rows reference collections by bare id: a deleted
            -- collection leaves danglers, which readers tolerate.
            CREATE TABLE IF NOT EXISTS artwork_collections (
                artwork_id TEXT NOT NULL REFERENCES artworks(id) ON DELETE CASCADE,
                collection_id TEXT NOT NULL,
                PRIMARY KEY (artwork_id, collection_id)
            );

            CREATE TABLE IF NOT EXISTS collections (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                sort_order INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_artworks_status ON artworks(status);
            CREATE INDEX IF NOT EXISTS idx_artworks_created ON artworks(created_at);
            CREATE INDEX IF NOT EXISTS idx_collections_sort ON collections(sort_order);
            CREATE INDEX IF NOT EXISTS idx_artwork_collections_collection
                ON artwork_collections(collection_id);
            ",
        )
        .map_err(|e| StoreError::Storage(format!("init_schema: {}", e)))?;

        Ok(())
    }

    /// Upsert an artwork row by id, preserving rowid (and thus insertion
    /// order) on replace. Membership rows are rewritten from scratch.
    fn upsert_artwork(conn: &Connection, artwork: &Artwork) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO artworks (id, status, title, artist, year, medium, dimensions, location,
                                   personal_note, source_url, image_data, placeholder_class, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
             ON CONFLICT(id) DO UPDATE SET
                status = excluded.status,
                title = excluded.title,
                artist = excluded.artist,
                year = excluded.year,
                medium = excluded.medium,
                dimensions = excluded.dimensions,
                location = excluded.location,
                personal_note = excluded.personal_note,
                source_url = excluded.source_url,
                image_data = excluded.image_data,
                placeholder_class = excluded.placeholder_class,
                created_at = excluded.created_at",
            params![
                artwork.id,
                artwork.status.as_str(),
                artwork.title,
                artwork.artist,
                artwork.year,
                artwork.medium,
                artwork.dimensions,
                artwork.location,
                artwork.personal_note,
                artwork.source_url,
                artwork.image_data,
                artwork.placeholder_class.css_class(),
                artwork.created_at,
            ],
        )
        .map_err(|e| StoreError::Storage(format!("upsert artwork: {}", e)))?;

        conn.execute(
            "DELETE FROM artwork_collections WHERE artwork_id = ?1",
            params![artwork.id],
        )
        .map_err(|e| StoreError::Storage(format!("clear memberships: {}", e)))?;
        Self::insert_memberships(conn, artwork)?;

        Ok(())
    }

    /// Insert an artwork only if its id is not already present.
    /// Returns whether a row was written.
    fn merge_artwork(conn: &Connection, artwork: &Artwork) -> Result<bool, StoreError> {
        let written = conn
            .execute(
                "INSERT OR IGNORE INTO artworks (id, status, title, artist, year, medium, dimensions,
                                                 location, personal_note, source_url, image_data,
                                                 placeholder_class, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    artwork.id,
                    artwork.status.as_str(),
                    artwork.title,
                    artwork.artist,
                    artwork.year,
                    artwork.medium,
                    artwork.dimensions,
                    artwork.location,
                    artwork.personal_note,
                    artwork.source_url,
                    artwork.image_data,
                    artwork.placeholder_class.css_class(),
                    artwork.created_at,
                ],
            )
            .map_err(|e| StoreError::Storage(format!("merge artwork: {}", e)))?;

        if written > 0 {
            Self::insert_memberships(conn, artwork)?;
        }
        Ok(written > 0)
    }

    fn insert_memberships(conn: &Connection, artwork: &Artwork) -> Result<(), StoreError> {
        for collection_id in &artwork.collections {
            conn.execute(
                "INSERT OR IGNORE INTO artwork_collections (artwork_id, collection_id) VALUES (?1, ?2)",
                params![artwork.id, collection_id],
            )
            .map_err(|e| StoreError::Storage(format!("insert membership: {}", e)))?;
        }
        Ok(())
    }

    fn upsert_collection(conn: &Connection, collection: &Collection) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO collections (id, name, sort_order) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, sort_order = excluded.sort_order",
            params![collection.id, collection.name, collection.sort_order],
        )
        .map_err(|e| StoreError::Storage(format!("upsert collection: {}", e)))?;
        Ok(())
    }

    fn merge_collection(conn: &Connection, collection: &Collection) -> Result<(), StoreError> {
        conn.execute(
            "INSERT OR IGNORE INTO collections (id, name, sort_order) VALUES (?1, ?2, ?3)",
            params![collection.id, collection.name, collection.sort_order],
        )
        .map_err(|e| StoreError::Storage(format!("merge collection: {}", e)))?;
        Ok(())
    }

    /// Read an artwork from a row result (without memberships).
    fn row_to_artwork(row: &rusqlite::Row<'_>) -> Result<Artwork, StoreError> {
        let status_str: String = row
            .get(1)
            .map_err(|e| StoreError::Storage(format!("row status: {}", e)))?;
        let status = ArtworkStatus::parse(&status_str)
            .ok_or_else(|| StoreError::Storage(format!("unknown status: {}", status_str)))?;

        let placeholder_str: String = row
            .get(11)
            .map_err(|e| StoreError::Storage(format!("row placeholder: {}", e)))?;
        let placeholder_class =
            PlaceholderClass::from_css_class(&placeholder_str).unwrap_or_default();

        let get = |idx: usize, what: &str| -> Result<Option<String>, StoreError> {
            row.get(idx)
                .map_err(|e| StoreError::Storage(format!("row {}: {}", what, e)))
        };

        Ok(Artwork {
            id: row
                .get(0)
                .map_err(|e| StoreError::Storage(format!("row id: {}", e)))?,
            status,
            title: row
                .get(2)
                .map_err(|e| StoreError::Storage(format!("row title: {}", e)))?,
            artist: row
                .get(3)
                .map_err(|e| StoreError::Storage(format!("row artist: {}", e)))?,
            year: row
                .get(4)
                .map_err(|e| StoreError::Storage(format!("row year: {}", e)))?,
            medium: get(5, "medium")?,
            dimensions: get(6, "dimensions")?,
            location: get(7, "location")?,
            personal_note: get(8, "personal_note")?,
            source_url: get(9, "source_url")?,
            collections: Vec::new(),
            image_data: get(10, "image_data")?,
            placeholder_class,
            created_at: row
                .get(12)
                .map_err(|e| StoreError::Storage(format!("row created_at: {}", e)))?,
        })
    }

    fn load_memberships(conn: &Connection, artwork_id: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = conn
            .prepare(
                "SELECT collection_id FROM artwork_collections WHERE artwork_id = ?1
                 ORDER BY collection_id",
            )
            .map_err(|e| StoreError::Storage(format!("prepare memberships: {}", e)))?;
        let ids = stmt
            .query_map(params![artwork_id], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Storage(format!("query memberships: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Storage(format!("read memberships: {}", e)))?;
        Ok(ids)
    }

    const ARTWORK_COLUMNS: &'static str =
        "id, status, title, artist, year, medium, dimensions, location, \
         personal_note, source_url, image_data, placeholder_class, created_at";
}

impl CatalogStore for SqliteCatalogStore {
    fn put_artwork(&self, artwork: &Artwork) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StoreError::Storage(format!("begin: {}", e)))?;
        Self::upsert_artwork(&tx, artwork)?;
        tx.commit()
            .map_err(|e| StoreError::Storage(format!("commit: {}", e)))?;
        Ok(())
    }

    fn get_artwork(&self, id: &str) -> Result<Option<Artwork>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let sql = format!(
            "SELECT {} FROM artworks WHERE id = ?1",
            Self::ARTWORK_COLUMNS
        );
        let artwork = conn
            .query_row(&sql, params![id], |row| {
                Ok(Self::row_to_artwork(row))
            })
            .optional()
            .map_err(|e| StoreError::Storage(format!("get artwork: {}", e)))?
            .transpose()?;

        match artwork {
            Some(mut artwork) => {
                artwork.collections = Self::load_memberships(&conn, id)?;
                Ok(Some(artwork))
            }
            None => Ok(None),
        }
    }

    fn delete_artwork(&self, id: &str) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        // Membership rows go with the artwork via ON DELETE CASCADE.
        conn.execute("DELETE FROM artworks WHERE id = ?1", params![id])
            .map_err(|e| StoreError::Storage(format!("delete artwork: {}", e)))?;
        Ok(())
    }

    fn all_artworks(&self) -> Result<Vec<Artwork>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let sql = format!(
            "SELECT {} FROM artworks ORDER BY rowid",
            Self::ARTWORK_COLUMNS
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| StoreError::Storage(format!("prepare artworks: {}", e)))?;
        let rows = stmt
            .query_map([], |row| Ok(Self::row_to_artwork(row)))
            .map_err(|e| StoreError::Storage(format!("query artworks: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Storage(format!("read artworks: {}", e)))?;

        let mut artworks = Vec::with_capacity(rows.len());
        for row in rows {
            let mut artwork = row?;
            artwork.collections = Self::load_memberships(&conn, &artwork.id)?;
            artworks.push(artwork);
        }
        Ok(artworks)
    }

    fn count_artworks(&self, status: Option<ArtworkStatus>) -> Result<usize, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let count: i64 = match status {
            Some(status) => conn
                .query_row(
                    "SELECT COUNT(*) FROM artworks WHERE status = ?1",
                    params![status.as_str()],
                    |row| row.get(0),
                )
                .map_err(|e| StoreError::Storage(format!("count artworks: {}", e)))?,
            None => conn
                .query_row("SELECT COUNT(*) FROM artworks", [], |row| row.get(0))
                .map_err(|e| StoreError::Storage(format!("count artworks: {}", e)))?,
        };
        Ok(count as usize)
    }

    fn put_collection(&self, collection: &Collection) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Self::upsert_collection(&conn, collection)
    }

    fn get_collection(&self, id: &str) -> Result<Option<Collection>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        conn.query_row(
            "SELECT id, name, sort_order FROM collections WHERE id = ?1",
            params![id],
            |row| {
                Ok(Collection {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    sort_order: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(|e| StoreError::Storage(format!("get collection: {}", e)))
    }

    fn delete_collection(&self, id: &str) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        // Membership rows referencing this id are left in place on purpose.
        conn.execute("DELETE FROM collections WHERE id = ?1", params![id])
            .map_err(|e| StoreError::Storage(format!("delete collection: {}", e)))?;
        Ok(())
    }

    fn collections_ordered(&self) -> Result<Vec<Collection>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, name, sort_order FROM collections ORDER BY sort_order, rowid")
            .map_err(|e| StoreError::Storage(format!("prepare collections: {}", e)))?;
        let collections = stmt
            .query_map([], |row| {
                Ok(Collection {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    sort_order: row.get(2)?,
                })
            })
            .map_err(|e| StoreError::Storage(format!("query collections: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Storage(format!("read collections: {}", e)))?;
        Ok(collections)
    }

    fn apply_snapshot(
        &self,
        collections: &[Collection],
        artworks: &[Artwork],
        mode: ImportMode,
    ) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StoreError::Storage(format!("begin: {}", e)))?;

        if mode == ImportMode::Replace {
            tx.execute_batch(
                "DELETE FROM artwork_collections;
                 DELETE FROM artworks;
                 DELETE FROM collections;",
            )
            .map_err(|e| StoreError::Storage(format!("clear: {}", e)))?;
        }

        for collection in collections {
            match mode {
                ImportMode::Replace => Self::upsert_collection(&tx, collection)?,
                ImportMode::Merge => Self::merge_collection(&tx, collection)?,
            }
        }
        for artwork in artworks {
            match mode {
                ImportMode::Replace => Self::upsert_artwork(&tx, artwork)?,
                ImportMode::Merge => {
                    Self::merge_artwork(&tx, artwork)?;
                }
            }
        }

        tx.commit()
            .map_err(|e| StoreError::Storage(format!("commit: {}", e)))?;

        tracing::info!(
            collections = collections.len(),
            artworks = artworks.len(),
            ?mode,
            "applied catalog snapshot"
        );
        Ok(())
    }
}
