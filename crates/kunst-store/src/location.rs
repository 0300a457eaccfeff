//! Default on-disk location for the catalog database.

use std::path::PathBuf;

/// Per-user data path for the catalog database, e.g.
/// `~/.local/share/kunst/catalog.sqlite3` on Linux.
///
/// `None` when the platform has no data directory (headless environments);
/// callers fall back to an explicit path or an in-memory store.
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("kunst").join("catalog.sqlite3"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ends_with_catalog_file() {
        if let Some(path) = default_db_path() {
            assert!(path.ends_with("kunst/catalog.sqlite3"));
        }
    }
}
