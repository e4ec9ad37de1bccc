//! HotRoute database layer.
//!
//! Provides SQLite connection management, schema migrations and the
//! key-value slots the link list and preferences live in.
//!
//! # Usage
//!
//! ```no_run
//! use hotroute::database::{Database, KeyValueStore};
//!
//! let db = Database::open("hotroute.db").expect("failed to open database");
//! let kv = KeyValueStore::new(db.connection());
//! kv.set("darkMode", "true").expect("write failed");
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::KeyValueStore;
