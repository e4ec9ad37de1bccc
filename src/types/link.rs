use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One saved link.
///
/// Fields the application does not know about are kept in `extra` so that
/// records imported from elsewhere survive a store/export round trip intact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub id: String,
    pub name: String,
    pub url: String,
    pub date: String,
    #[serde(default)]
    pub important: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Link {
    /// Creates a fresh, non-important link stamped with the current time.
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            id: new_link_id(),
            name: name.to_string(),
            url: url.to_string(),
            date: timestamp_now(),
            important: false,
            extra: Map::new(),
        }
    }

    /// Parses `date` as RFC 3339. Returns `None` for anything unparseable.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }

    /// Case-insensitive substring match against name and url.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.url.to_lowercase().contains(query_lower)
    }
}

/// Generates an opaque unique link id.
pub fn new_link_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC time as `2024-01-01T12:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Scheme prefixes accepted as-is on add. Compared case-insensitively.
pub const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "file://", "mailto:"];

/// Prefixes `https://` unless `url` already starts with a recognized scheme.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if RECOGNIZED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Result of a merge-import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// This many new records were prepended to the store.
    Imported(usize),
    /// Every valid record's url already existed; the store was not touched.
    NothingNew,
}

/// A serialized link list ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Writes the file into `dir`, creating the directory if needed.
    /// Returns the full path written.
    pub fn write_to(&self, dir: &std::path::Path) -> std::io::Result<std::path::PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}
