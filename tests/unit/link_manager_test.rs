//! Unit tests for the LinkManager public API.
//!
//! These tests exercise add, delete, star, search, export and merge-import
//! through the `LinkManagerTrait` interface, using an in-memory SQLite database.

use hotroute::database::kv_store::LINKS_KEY;
use hotroute::database::{Database, KeyValueStore};
use hotroute::managers::link_manager::{LinkManager, LinkManagerTrait};
use hotroute::types::errors::LinkError;
use hotroute::types::link::ImportOutcome;
use hotroute::types::settings::ImportSettings;
use rstest::rstest;
use tempfile::TempDir;

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

// ─── add ───

#[test]
fn test_add_prepends_new_link() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());

    mgr.add_link("Old", "https://old.com").unwrap();
    let added = mgr.add_link("New", "https://new.com").unwrap();

    let links = mgr.list().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0], added);
    assert!(!added.important);
    assert!(added.parsed_date().is_some());
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com/a?b=c", "https://example.com/a?b=c")]
#[case("ftp://files.example.com", "ftp://files.example.com")]
#[case("mailto:me@example.com", "mailto:me@example.com")]
#[case("  padded.org  ", "https://padded.org")]
fn test_add_normalizes_url(#[case] input: &str, #[case] expected: &str) {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let link = mgr.add_link("Name", input).unwrap();
    assert_eq!(link.url, expected);
}

#[rstest]
#[case("", "x")]
#[case("x", "")]
#[case("   ", "x")]
#[case("x", "\t\n")]
fn test_add_rejects_missing_field(#[case] name: &str, #[case] url: &str) {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("Keep", "https://keep.com").unwrap();
    let before = mgr.list().unwrap();

    let result = mgr.add_link(name, url);

    assert!(matches!(result, Err(LinkError::Validation(_))));
    assert_eq!(mgr.list().unwrap(), before);
}

#[test]
fn test_add_generates_unique_ids() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let ids: std::collections::HashSet<String> = (0..50)
        .map(|i| mgr.add_link(&format!("L{}", i), "https://same.com").unwrap().id)
        .collect();
    assert_eq!(ids.len(), 50);
}

// ─── delete / toggle ───

#[test]
fn test_delete_removes_only_matching_record() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let a = mgr.add_link("A", "https://a.com").unwrap();
    let b = mgr.add_link("B", "https://b.com").unwrap();

    assert!(mgr.delete_link(&a.id).unwrap());

    let links = mgr.list().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, b.id);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();

    assert!(!mgr.delete_link("missing").unwrap());
    assert_eq!(mgr.list().unwrap().len(), 1);
}

#[test]
fn test_delete_unknown_id_leaves_stored_value_untouched() {
    let db = setup();
    let kv = KeyValueStore::new(db.connection());
    kv.set(LINKS_KEY, "{not a list").unwrap();

    let mut mgr = LinkManager::new(db.connection());
    assert!(!mgr.delete_link("missing").unwrap());
    assert_eq!(kv.get(LINKS_KEY).unwrap().as_deref(), Some("{not a list"));
}

#[test]
fn test_delete_all_empties_store() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();
    mgr.add_link("B", "https://b.com").unwrap();

    mgr.delete_all().unwrap();

    assert!(mgr.list().unwrap().is_empty());
}

#[test]
fn test_toggle_important_twice_restores_flag() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let link = mgr.add_link("A", "https://a.com").unwrap();
    let before = mgr.list().unwrap();

    assert_eq!(mgr.toggle_important(&link.id).unwrap(), Some(true));
    assert!(mgr.list().unwrap()[0].important);
    assert_eq!(mgr.toggle_important(&link.id).unwrap(), Some(false));

    assert_eq!(mgr.list().unwrap(), before);
}

#[test]
fn test_toggle_unknown_id_returns_none() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    assert_eq!(mgr.toggle_important("missing").unwrap(), None);
}

// ─── search ───

#[test]
fn test_search_matches_name_and_url_case_insensitively() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("Rust Book", "https://doc.rust-lang.org/book").unwrap();
    mgr.add_link("Crates", "https://crates.io").unwrap();
    mgr.add_link("News", "https://news.ycombinator.com").unwrap();

    let by_name = mgr.search("rUsT").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Rust Book");

    let by_url = mgr.search("CRATES.IO").unwrap();
    assert_eq!(by_url.len(), 1);

    assert!(mgr.search("nothing-like-this").unwrap().is_empty());
}

#[test]
fn test_empty_search_returns_full_list() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();
    mgr.add_link("B", "https://b.com").unwrap();

    assert_eq!(mgr.search("").unwrap(), mgr.list().unwrap());
}

// ─── export ───

#[test]
fn test_export_empty_list_fails() {
    let db = setup();
    let mgr = LinkManager::new(db.connection());
    assert!(matches!(mgr.export(), Err(LinkError::NothingToExport)));
}

#[test]
fn test_export_produces_dated_pretty_json() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();

    let file = mgr.export().unwrap();

    assert!(file.file_name.starts_with("hotroute-links-"));
    assert!(file.file_name.ends_with(".json"));
    assert_eq!(file.file_name.len(), "hotroute-links-2024-01-01.json".len());
    assert!(file.contents.contains("\n  {"));
    let parsed: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn test_export_file_writes_to_directory() {
    let tmp = TempDir::new().unwrap();
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();

    let file = mgr.export().unwrap();
    let path = file.write_to(&tmp.path().join("exports")).unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), file.contents);
}

// ─── import ───

#[test]
fn test_import_rejects_non_list() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    assert!(matches!(
        mgr.import_json(r#"{"not":"a list"}"#),
        Err(LinkError::InvalidFormat)
    ));
}

#[test]
fn test_import_rejects_list_without_valid_links() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    assert!(matches!(mgr.import_json(r#"[{"foo":1}]"#), Err(LinkError::NoValidLinks)));
    assert!(matches!(
        mgr.import_json(r#"[{"name":"A","url":5}]"#),
        Err(LinkError::NoValidLinks)
    ));
}

#[test]
fn test_import_rejects_malformed_json_without_touching_store() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();
    let before = mgr.list().unwrap();

    assert!(matches!(mgr.import_json("[{"), Err(LinkError::Parse(_))));
    assert_eq!(mgr.list().unwrap(), before);
}

#[test]
fn test_import_skips_existing_urls_and_prepends_in_file_order() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("Existing", "https://a.com").unwrap();

    let outcome = mgr
        .import_json(
            r#"[
                {"name":"Dup","url":"https://a.com"},
                {"name":"B","url":"https://b.com"},
                {"name":"C","url":"https://c.com"},
                {"bogus":true}
            ]"#,
        )
        .unwrap();

    assert_eq!(outcome, ImportOutcome::Imported(2));
    let names: Vec<String> = mgr.list().unwrap().into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["B", "C", "Existing"]);
}

#[test]
fn test_import_all_existing_reports_nothing_new() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.add_link("A", "https://a.com").unwrap();
    let before = mgr.list().unwrap();

    let outcome = mgr.import_json(r#"[{"name":"Other","url":"https://a.com"}]"#).unwrap();

    assert_eq!(outcome, ImportOutcome::NothingNew);
    assert_eq!(mgr.list().unwrap(), before);
}

#[test]
fn test_import_keeps_within_batch_duplicates_by_default() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let batch = r#"[{"name":"A","url":"a.com"},{"name":"A","url":"a.com"}]"#;

    assert_eq!(mgr.import_json(batch).unwrap(), ImportOutcome::Imported(2));
    let links = mgr.list().unwrap();
    assert_eq!(links.len(), 2);
    assert_ne!(links[0].id, links[1].id);
}

#[test]
fn test_import_dedupes_within_batch_when_enabled() {
    let db = setup();
    let mut mgr = LinkManager::with_import_settings(
        db.connection(),
        ImportSettings { dedupe_within_batch: true },
    );
    let batch = r#"[{"name":"A","url":"a.com"},{"name":"A","url":"a.com"}]"#;

    assert_eq!(mgr.import_json(batch).unwrap(), ImportOutcome::Imported(1));
    assert_eq!(mgr.list().unwrap().len(), 1);
}

#[test]
fn test_import_preserves_extra_fields_and_given_values() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    mgr.import_json(
        r#"[{"id":"keep-me","name":"A","url":"https://a.com","date":"2020-05-05T00:00:00.000Z","important":true,"folder":"work"}]"#,
    )
    .unwrap();

    let link = &mgr.list().unwrap()[0];
    assert_eq!(link.id, "keep-me");
    assert_eq!(link.date, "2020-05-05T00:00:00.000Z");
    assert!(link.important);
    assert_eq!(link.extra.get("folder"), Some(&serde_json::json!("work")));
}

#[test]
fn test_import_replaces_colliding_id() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let existing = mgr.add_link("A", "https://a.com").unwrap();
    let batch = serde_json::json!([{"id": existing.id, "name": "B", "url": "https://b.com"}]);

    mgr.import_json(&batch.to_string()).unwrap();

    let links = mgr.list().unwrap();
    assert_eq!(links.len(), 2);
    assert_ne!(links[0].id, links[1].id);
}

#[test]
fn test_import_file_missing_path_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let result = mgr.import_file(&tmp.path().join("missing.json"));
    assert!(matches!(result, Err(LinkError::Io(_))));
}

#[test]
fn test_export_then_import_round_trips() {
    let db = setup();
    let mut mgr = LinkManager::new(db.connection());
    let a = mgr.add_link("A", "https://a.com").unwrap();
    mgr.add_link("B", "https://b.com").unwrap();
    mgr.toggle_important(&a.id).unwrap();
    let original = mgr.list().unwrap();
    let exported = mgr.export().unwrap();

    let fresh = setup();
    let mut other = LinkManager::new(fresh.connection());
    assert_eq!(other.import_json(&exported.contents).unwrap(), ImportOutcome::Imported(2));
    assert_eq!(other.list().unwrap(), original);

    assert_eq!(mgr.import_json(&exported.contents).unwrap(), ImportOutcome::NothingNew);
    assert_eq!(mgr.list().unwrap(), original);
}
