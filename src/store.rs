use std::fs;
use std::path::PathBuf;

use crate::core::kind::ListKind;
use crate::core::row::Row;
use crate::error::{Error, Result};

/// The local cache: one JSON file per list under the cache directory.
/// Entries are overwritten on every successful remote fetch and every local
/// mutation, and never expire. This is the durability source of truth; the
/// remote backends are best-effort mirrors of it.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, kind: ListKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind.key()))
    }

    /// Persist `rows` as the entry for `kind`. A failed write maps to
    /// `StorageFull`; callers log it and keep the rows in memory for the
    /// session.
    pub fn save(&self, kind: ListKind, rows: &[Row]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::StorageFull(format!("{}: {e}", self.dir.display())))?;
        let json = serde_json::to_string(rows)
            .map_err(|e| Error::StorageFull(format!("{}: {e}", kind.key())))?;
        fs::write(self.path(kind), json)
            .map_err(|e| Error::StorageFull(format!("{}: {e}", self.path(kind).display())))
    }

    /// Read the entry for `kind`. A missing file or an entry that no longer
    /// parses both come back as an empty list, not an error.
    pub fn load(&self, kind: ListKind) -> Vec<Row> {
        let path = self.path(kind);
        let Ok(json) = fs::read_to_string(&path) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!(
                    "corrupt cache entry {}, treating as empty: {e}",
                    path.display()
                );
                Vec::new()
            }
        }
    }
}
