//! Link Manager for HotRoute.
//!
//! Implements `LinkManagerTrait`: add, delete, star, search, export and
//! merge-import. Every mutation is a read-modify-write cycle over the whole
//! persisted list held by [`LinkStore`].

use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use serde_json::{Map, Value};

use crate::managers::link_store::LinkStore;
use crate::types::errors::LinkError;
use crate::types::link::{new_link_id, normalize_url, timestamp_now, ExportFile, ImportOutcome, Link};
use crate::types::settings::ImportSettings;

/// Trait defining link management operations.
pub trait LinkManagerTrait {
    fn add_link(&mut self, name: &str, url: &str) -> Result<Link, LinkError>;
    fn delete_link(&mut self, id: &str) -> Result<bool, LinkError>;
    fn delete_all(&mut self) -> Result<(), LinkError>;
    fn toggle_important(&mut self, id: &str) -> Result<Option<bool>, LinkError>;
    fn list(&self) -> Result<Vec<Link>, LinkError>;
    fn search(&self, query: &str) -> Result<Vec<Link>, LinkError>;
    fn export(&self) -> Result<ExportFile, LinkError>;
    fn import_json(&mut self, contents: &str) -> Result<ImportOutcome, LinkError>;
    fn import_file(&mut self, path: &Path) -> Result<ImportOutcome, LinkError>;
}

/// Link manager backed by the `links` slot of a SQLite connection.
pub struct LinkManager<'a> {
    store: LinkStore<'a>,
    import_settings: ImportSettings,
}

impl<'a> LinkManager<'a> {
    /// Creates a new `LinkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self::with_import_settings(conn, ImportSettings::default())
    }

    pub fn with_import_settings(conn: &'a Connection, import_settings: ImportSettings) -> Self {
        Self {
            store: LinkStore::new(conn),
            import_settings,
        }
    }

    /// Name of the export file for today's date.
    pub fn export_file_name() -> String {
        format!("hotroute-links-{}.json", chrono::Utc::now().format("%Y-%m-%d"))
    }

    /// Builds a stored link from an imported object that is known to carry
    /// string `name` and `url` fields. Missing or colliding ids are replaced.
    fn link_from_import(mut obj: Map<String, Value>, taken_ids: &mut HashSet<String>) -> Link {
        let name = take_string(&mut obj, "name").unwrap_or_default();
        let url = take_string(&mut obj, "url").unwrap_or_default();
        let date = take_string(&mut obj, "date").unwrap_or_else(timestamp_now);
        let important = obj.remove("important").and_then(|v| v.as_bool()).unwrap_or(false);

        let mut id = match obj.remove("id") {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => new_link_id(),
        };
        while taken_ids.contains(&id) {
            id = new_link_id();
        }
        taken_ids.insert(id.clone());

        Link {
            id,
            name,
            url,
            date,
            important,
            extra: obj,
        }
    }
}

fn take_string(obj: &mut Map<String, Value>, key: &str) -> Option<String> {
    match obj.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// An importable element is an object whose `name` and `url` are strings.
fn is_importable(value: &Value) -> bool {
    value
        .as_object()
        .map(|o| {
            o.get("name").map_or(false, Value::is_string) && o.get("url").map_or(false, Value::is_string)
        })
        .unwrap_or(false)
}

impl<'a> LinkManagerTrait for LinkManager<'a> {
    /// Validates, normalizes and prepends a new link. Returns the stored record.
    fn add_link(&mut self, name: &str, url: &str) -> Result<Link, LinkError> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(LinkError::Validation("Please fill in both fields".to_string()));
        }

        let mut links = self.store.get_all()?;
        let mut link = Link::new(name, &normalize_url(url));
        while links.iter().any(|l| l.id == link.id) {
            link.id = new_link_id();
        }
        links.insert(0, link.clone());
        self.store.replace_all(&links)?;

        tracing::info!(id = %link.id, url = %link.url, "link added");
        Ok(link)
    }

    fn delete_link(&mut self, id: &str) -> Result<bool, LinkError> {
        let mut links = self.store.get_all()?;
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Ok(false);
        }
        self.store.replace_all(&links)?;
        tracing::info!(id, "link deleted");
        Ok(true)
    }

    fn delete_all(&mut self) -> Result<(), LinkError> {
        self.store.clear()?;
        tracing::info!("all links deleted");
        Ok(())
    }

    /// Flips the importance flag. Returns the new value, or `None` if no
    /// record has that id (the store is left untouched in that case).
    fn toggle_important(&mut self, id: &str) -> Result<Option<bool>, LinkError> {
        let mut links = self.store.get_all()?;
        let Some(link) = links.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        link.important = !link.important;
        let now_important = link.important;
        self.store.replace_all(&links)?;
        Ok(Some(now_important))
    }

    fn list(&self) -> Result<Vec<Link>, LinkError> {
        Ok(self.store.get_all()?)
    }

    /// Pure filter over name and url; an empty query returns everything.
    fn search(&self, query: &str) -> Result<Vec<Link>, LinkError> {
        let links = self.store.get_all()?;
        if query.is_empty() {
            return Ok(links);
        }
        let needle = query.to_lowercase();
        Ok(links.into_iter().filter(|l| l.matches(&needle)).collect())
    }

    fn export(&self) -> Result<ExportFile, LinkError> {
        let links = self.store.get_all()?;
        if links.is_empty() {
            return Err(LinkError::NothingToExport);
        }
        let contents = serde_json::to_string_pretty(&links)
            .map_err(|e| LinkError::Parse(e.to_string()))?;
        Ok(ExportFile {
            file_name: Self::export_file_name(),
            contents,
        })
    }

    /// Merges links from a JSON document into the store, keeping only records
    /// whose url is not already stored. New records go first, in file order.
    fn import_json(&mut self, contents: &str) -> Result<ImportOutcome, LinkError> {
        let root: Value =
            serde_json::from_str(contents).map_err(|e| LinkError::Parse(e.to_string()))?;
        let Value::Array(items) = root else {
            return Err(LinkError::InvalidFormat);
        };

        let valid: Vec<Map<String, Value>> = items
            .into_iter()
            .filter(is_importable)
            .filter_map(|v| match v {
                Value::Object(o) => Some(o),
                _ => None,
            })
            .collect();
        if valid.is_empty() {
            return Err(LinkError::NoValidLinks);
        }

        let existing = self.store.get_all()?;
        let mut seen_urls: HashSet<String> = existing.iter().map(|l| l.url.clone()).collect();
        let mut taken_ids: HashSet<String> = existing.iter().map(|l| l.id.clone()).collect();
        let dedupe_batch = self.import_settings.dedupe_within_batch;

        let mut fresh = Vec::new();
        for obj in valid {
            let url = obj.get("url").and_then(Value::as_str).unwrap_or_default().to_string();
            if seen_urls.contains(&url) {
                continue;
            }
            if dedupe_batch {
                seen_urls.insert(url);
            }
            fresh.push(obj);
        }

        if fresh.is_empty() {
            tracing::info!("import found nothing new");
            return Ok(ImportOutcome::NothingNew);
        }

        let mut merged: Vec<Link> = fresh
            .into_iter()
            .map(|obj| Self::link_from_import(obj, &mut taken_ids))
            .collect();
        let count = merged.len();
        merged.extend(existing);
        self.store.replace_all(&merged)?;

        tracing::info!(count, "links imported");
        Ok(ImportOutcome::Imported(count))
    }

    fn import_file(&mut self, path: &Path) -> Result<ImportOutcome, LinkError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LinkError::Io(e.to_string()))?;
        self.import_json(&contents)
    }
}
