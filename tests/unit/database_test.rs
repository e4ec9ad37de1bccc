//! Unit tests for the HotRoute database layer (connection + migrations + key-value slots).

use hotroute::database::kv_store::{DARK_MODE_KEY, LINKS_KEY};
use hotroute::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use hotroute::database::{Database, KeyValueStore};
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_kv_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    for table in ["kv_store", "schema_version"] {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table {} should exist", table);
    }
    assert_eq!(get_schema_version(conn), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_open_creates_missing_parent_dirs() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deeper").join("hotroute.db");
    let db = Database::open(&path).expect("open should create parents");
    drop(db);
    assert!(path.exists());
}

#[test]
fn test_open_reports_uncreatable_parent_dir() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let err = match Database::open(blocker.join("sub").join("hotroute.db")) {
        Ok(_) => panic!("opening under a regular file should fail"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("cannot create directory"));
    assert!(err.to_string().contains("not_a_dir"));
}

#[test]
fn test_values_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hotroute.db");
    {
        let db = Database::open(&path).unwrap();
        KeyValueStore::new(db.connection()).set(DARK_MODE_KEY, "true").unwrap();
    }
    let db = Database::open(&path).unwrap();
    let kv = KeyValueStore::new(db.connection());
    assert_eq!(kv.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_set_overwrites_and_remove_empties() {
    let db = Database::open_in_memory().unwrap();
    let kv = KeyValueStore::new(db.connection());

    assert_eq!(kv.get(LINKS_KEY).unwrap(), None);
    kv.set(LINKS_KEY, "[]").unwrap();
    kv.set(LINKS_KEY, "[1]").unwrap();
    assert_eq!(kv.get(LINKS_KEY).unwrap().as_deref(), Some("[1]"));

    kv.remove(LINKS_KEY).unwrap();
    assert_eq!(kv.get(LINKS_KEY).unwrap(), None);
    kv.remove(LINKS_KEY).unwrap();
}
