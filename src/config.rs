use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::kind::ListKind;
use crate::core::row::Row;
use crate::error::{Error, Result};

/// Which remote backend mirrors the lists.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Spreadsheet CSV export for reads, script endpoint for writes.
    Sheets,
    /// A fixed CSV resource, links only, no write path.
    StaticFile,
    /// One JSON endpoint for both reads and writes.
    Script,
    /// No remote at all; the cache is the whole story.
    #[default]
    Local,
}

fn default_cache_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("pinboard")
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct BoardConfig {
    pub backend: Backend,
    /// Apps-script style write endpoint (and, for `Backend::Script`, the
    /// read endpoint too).
    pub script_url: String,
    /// Spreadsheet document id for `Backend::Sheets`.
    pub sheet_id: String,
    /// Sheet tab ids, one per list.
    pub gid_links: String,
    pub gid_notes: String,
    pub gid_tasks: String,
    /// CSV resource for `Backend::StaticFile`.
    pub static_csv_url: String,
    pub cache_dir: PathBuf,
    /// Shown on the links list when both the remote and the cache are empty.
    pub default_links: Vec<Row>,
    pub debug_logging: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            script_url: String::new(),
            sheet_id: String::new(),
            gid_links: "0".into(),
            gid_notes: "997844508".into(),
            gid_tasks: "2063120752".into(),
            static_csv_url: String::new(),
            cache_dir: default_cache_dir(),
            default_links: Vec::new(),
            debug_logging: false,
        }
    }
}

impl BoardConfig {
    pub fn gid(&self, kind: ListKind) -> &str {
        match kind {
            ListKind::Links => &self.gid_links,
            ListKind::Notes => &self.gid_notes,
            ListKind::Tasks => &self.gid_tasks,
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("pinboard")
            .join("config.json")
    }

    /// Load the config file, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();
        let Ok(json) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("unreadable config {}, using defaults: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&path, json).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Ensure the cache directory exists.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.cache_dir)
    }
}
