//! Link Store for HotRoute.
//!
//! Wraps the `links` key-value slot, which holds the whole ordered link list as
//! one JSON array. There are no partial updates: callers read everything with
//! [`LinkStore::get_all`], transform it, and write it back with
//! [`LinkStore::replace_all`].

use rusqlite::Connection;

use crate::database::kv_store::{KeyValueStore, LINKS_KEY};
use crate::types::errors::StoreError;
use crate::types::link::Link;

/// Whole-list persistence for links.
pub struct LinkStore<'a> {
    kv: KeyValueStore<'a>,
}

impl<'a> LinkStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            kv: KeyValueStore::new(conn),
        }
    }

    /// Returns the persisted list.
    ///
    /// A missing slot, or a stored value that is not a JSON array of links,
    /// yields an empty list. Only a database failure is an error.
    pub fn get_all(&self) -> Result<Vec<Link>, StoreError> {
        let Some(raw) = self.kv.get(LINKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Link>>(&raw) {
            Ok(links) => Ok(links),
            Err(e) => {
                tracing::warn!(error = %e, "stored link list is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Serializes and persists the full list, overwriting prior contents.
    pub fn replace_all(&self, links: &[Link]) -> Result<(), StoreError> {
        let json = serde_json::to_string(links)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.kv.set(LINKS_KEY, &json)?;
        tracing::debug!(count = links.len(), "link list persisted");
        Ok(())
    }

    /// Removes the persisted slot entirely.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.kv.remove(LINKS_KEY)
    }
}
