use crate::config::{Backend, BoardConfig};
use crate::core::kind::ListKind;
use crate::core::row::Row;
use crate::csv::import::{self, ImportPayload};
use crate::csv::writer::CsvWriter;
use crate::error::Result;
use crate::store::LocalStore;
use crate::sync::RemoteSource;
use crate::sync::script::ScriptClient;
use crate::sync::sheets::SheetsClient;
use crate::sync::static_file::StaticFileClient;

/// What a list currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    Loaded,
    /// The remote failed and the cache had nothing to show either.
    Error,
}

/// Owns one list end to end: the rows currently shown, their cache entry,
/// and the best-effort remote mirror. A local write is the commit; the
/// remote write is an asynchronous mirror attempt with no rollback.
pub struct ListController {
    kind: ListKind,
    gid: String,
    store: LocalStore,
    remote: Option<RemoteSource>,
    default_rows: Vec<Row>,
    rows: Vec<Row>,
    state: ListState,
}

impl ListController {
    pub fn new(
        kind: ListKind,
        gid: impl Into<String>,
        store: LocalStore,
        remote: Option<RemoteSource>,
    ) -> Self {
        Self {
            kind,
            gid: gid.into(),
            store,
            remote,
            default_rows: Vec::new(),
            rows: Vec::new(),
            state: ListState::Empty,
        }
    }

    /// Rows to fall back to when both the remote and the cache are empty.
    pub fn with_defaults(mut self, rows: Vec<Row>) -> Self {
        self.default_rows = rows;
        self
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Whether mutations reach anything beyond the local cache.
    pub fn mirrors_writes(&self) -> bool {
        self.remote.as_ref().is_some_and(|r| r.supports_writes())
    }

    /// Show the cache first, then reconcile with the remote. A remote answer
    /// with at least one row replaces the cache outright — no merging. An
    /// empty remote answer keeps whatever the cache showed. A remote failure
    /// keeps the cache too, and only counts as an error when the cache had
    /// nothing either.
    pub async fn load(&mut self) -> ListState {
        self.rows = self.store.load(self.kind);
        self.state = if self.rows.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded
        };

        if let Some(remote) = &self.remote {
            match remote.fetch(&self.gid).await {
                Ok(rows) if !rows.is_empty() => {
                    log::info!("{}: loaded {} rows from remote", self.kind.label(), rows.len());
                    self.rows = rows;
                    self.persist();
                    self.state = ListState::Loaded;
                }
                Ok(_) => {
                    log::debug!("{}: remote is empty, keeping cache", self.kind.label());
                }
                Err(e) => {
                    log::warn!("{}: {e}, falling back to cache", self.kind.label());
                    if self.rows.is_empty() {
                        self.state = ListState::Error;
                    }
                }
            }
        }

        if self.rows.is_empty() && !self.default_rows.is_empty() {
            self.rows = self.default_rows.clone();
            self.state = ListState::Loaded;
        }
        self.state
    }

    /// Validate, commit locally, then mirror. The append is authoritative
    /// once the cache write has been attempted; a remote failure is only
    /// logged.
    pub async fn append(&mut self, row: Row) -> Result<()> {
        self.kind.validate(&row)?;

        self.rows.push(row.clone());
        self.persist();
        self.state = ListState::Loaded;

        if let Some(remote) = &self.remote {
            if let Err(e) = remote.append(&self.gid, &row).await {
                log::warn!("{}: remote append failed: {e}", self.kind.label());
            }
        }
        Ok(())
    }

    /// Remove the row at `index`, positionally. An out-of-range index means
    /// the view went stale, so the list reloads instead of erroring.
    pub async fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            log::debug!(
                "{}: delete index {index} out of range ({} rows), reloading",
                self.kind.label(),
                self.rows.len()
            );
            self.load().await;
            return Ok(());
        }

        self.rows.remove(index);
        self.persist();
        self.state = if self.rows.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded
        };

        if let Some(remote) = &self.remote {
            if let Err(e) = remote.delete(&self.gid, index).await {
                log::warn!("{}: remote delete failed: {e}", self.kind.label());
            }
        }
        Ok(())
    }

    /// Replace the whole list (import path). No remote mirror: imports only
    /// rewrite the cache and the view.
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.persist();
        self.state = if self.rows.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded
        };
    }

    /// Serialize the current rows with this list's column headers.
    pub fn export(&self) -> String {
        CsvWriter::write(&self.rows, self.kind.headers())
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.kind, &self.rows) {
            // Kept in memory for the session; the next successful write wins.
            log::warn!("{}: {e}", self.kind.label());
        }
    }
}

/// The three lists together, for loading in one go and for the unified
/// export/import format.
pub struct Board {
    pub links: ListController,
    pub notes: ListController,
    pub tasks: ListController,
}

impl Board {
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let store = LocalStore::new(&config.cache_dir);
        let remote = match config.backend {
            Backend::Sheets => Some(RemoteSource::Sheets(SheetsClient::new(
                &config.sheet_id,
                &config.script_url,
            )?)),
            Backend::Script => Some(RemoteSource::Script(ScriptClient::new(&config.script_url)?)),
            Backend::StaticFile | Backend::Local => None,
        };
        // The static CSV resource only ever carries links; the other two
        // lists stay cache-only under that backend.
        let links_remote = if config.backend == Backend::StaticFile {
            Some(RemoteSource::StaticFile(StaticFileClient::new(
                &config.static_csv_url,
            )?))
        } else {
            remote.clone()
        };

        Ok(Self {
            links: ListController::new(
                ListKind::Links,
                config.gid(ListKind::Links),
                store.clone(),
                links_remote,
            )
            .with_defaults(config.default_links.clone()),
            notes: ListController::new(
                ListKind::Notes,
                config.gid(ListKind::Notes),
                store.clone(),
                remote.clone(),
            ),
            tasks: ListController::new(
                ListKind::Tasks,
                config.gid(ListKind::Tasks),
                store,
                remote,
            ),
        })
    }

    pub fn get(&self, kind: ListKind) -> &ListController {
        match kind {
            ListKind::Links => &self.links,
            ListKind::Notes => &self.notes,
            ListKind::Tasks => &self.tasks,
        }
    }

    pub fn get_mut(&mut self, kind: ListKind) -> &mut ListController {
        match kind {
            ListKind::Links => &mut self.links,
            ListKind::Notes => &mut self.notes,
            ListKind::Tasks => &mut self.tasks,
        }
    }

    /// Load all three lists, fetching their remotes concurrently.
    pub async fn load_all(&mut self) {
        futures::join!(self.links.load(), self.notes.load(), self.tasks.load());
    }

    /// All three lists in the unified `Category,Name,Value` shape.
    pub fn export_all(&self) -> String {
        CsvWriter::write_unified(&[
            (ListKind::Links, self.links.rows()),
            (ListKind::Notes, self.notes.rows()),
            (ListKind::Tasks, self.tasks.rows()),
        ])
    }

    /// Sniff the header and replace the matching list(s). A two-column file
    /// replaces its one list; a unified file replaces all three. An
    /// unrecognized header imports nothing.
    pub fn import(&mut self, input: &str) -> Result<()> {
        match import::sniff(input)? {
            ImportPayload::Single(kind, rows) => self.get_mut(kind).replace(rows),
            ImportPayload::Unified {
                links,
                notes,
                tasks,
            } => {
                self.links.replace(links);
                self.notes.replace(notes);
                self.tasks.replace(tasks);
            }
        }
        Ok(())
    }
}
