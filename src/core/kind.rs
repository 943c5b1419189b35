use crate::core::row::Row;
use crate::error::{Error, Result};

/// The three lists the dashboard maintains. Each kind carries its cache
/// namespace, its sheet tab id, its CSV column headers, its category tag in
/// the unified export format, and its input validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Links,
    Notes,
    Tasks,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [Self::Links, Self::Notes, Self::Tasks];

    /// Cache namespace for this list.
    pub fn key(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Notes => "notes",
            Self::Tasks => "tasks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Links => "Links",
            Self::Notes => "Notes",
            Self::Tasks => "Tasks",
        }
    }

    /// CSV column headers used when exporting this list on its own.
    pub fn headers(self) -> (&'static str, &'static str) {
        match self {
            Self::Links => ("Name", "URL"),
            Self::Notes => ("Data name", "Data value"),
            Self::Tasks => ("Task name", "Remark"),
        }
    }

    /// Category tag identifying this list in the unified export format.
    pub fn category(self) -> &'static str {
        match self {
            Self::Links => "URL",
            Self::Notes => "data",
            Self::Tasks => "work",
        }
    }

    pub fn from_category(tag: &str) -> Option<Self> {
        match tag {
            "URL" => Some(Self::Links),
            "data" => Some(Self::Notes),
            "work" => Some(Self::Tasks),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "links" => Some(Self::Links),
            "notes" => Some(Self::Notes),
            "tasks" => Some(Self::Tasks),
            _ => None,
        }
    }

    /// Check a row before it is appended. Links need a name and an absolute
    /// URL, notes need both fields, tasks need only a name.
    pub fn validate(self, row: &Row) -> Result<()> {
        if row.name.trim().is_empty() {
            return Err(Error::Validation(format!(
                "{} entries need a name",
                self.label()
            )));
        }
        match self {
            Self::Links => {
                let url = row.value.trim();
                if url.is_empty() {
                    return Err(Error::Validation("links need a URL".into()));
                }
                reqwest::Url::parse(url).map_err(|_| {
                    Error::Validation(format!("not a valid absolute URL: {url}"))
                })?;
            }
            Self::Notes => {
                if row.value.trim().is_empty() {
                    return Err(Error::Validation("notes need a value".into()));
                }
            }
            // The remark is optional.
            Self::Tasks => {}
        }
        Ok(())
    }
}
