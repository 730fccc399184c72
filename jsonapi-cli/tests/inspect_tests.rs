use jsonapi_cli::commands::inspect::{self, summarize};
use jsonapi_core::decoder::decode_document;
use std::fs;
use tempfile::tempdir;

#[test]
fn inspect_summary_counts() {
    let document = decode_document(
        br#"{
          "data": [{"type": "articles", "id": "1"}, {"type": "articles", "id": "2"}],
          "included": [{"type": "people", "id": "9"}],
          "links": {"self": {"href": "/articles", "meta": {"page": 1}}},
          "jsonapi": {"version": "1.0"}
        }"#,
    )
    .unwrap();

    let summary = summarize(&document);
    assert_eq!(summary.shape, "many");
    assert_eq!(summary.primary, 2);
    assert_eq!(summary.included, 1);
    assert_eq!(summary.errors, 0);
    assert!(!summary.has_meta);
    assert_eq!(summary.version.as_deref(), Some("1.0"));
    assert_eq!(summary.types["articles"], 2);
    assert_eq!(summary.types["people"], 1);
    assert_eq!(summary.self_link.as_deref(), Some("/articles"));
}

#[test]
fn inspect_meta_only_document() {
    let td = tempdir().unwrap();
    let path = td.path().join("meta.json");
    fs::write(&path, r#"{"meta": {"copyright": "2026"}}"#).unwrap();

    inspect::execute(path.to_str().unwrap(), false).unwrap();
    inspect::execute(path.to_str().unwrap(), true).unwrap();

    let summary = summarize(&decode_document(&fs::read(&path).unwrap()).unwrap());
    assert_eq!(summary.shape, "none");
    assert!(summary.has_meta);
    assert!(summary.types.is_empty());
}

#[test]
fn inspect_rejects_invalid_data() {
    let td = tempdir().unwrap();
    let path = td.path().join("bad.json");
    fs::write(&path, r#"{"data": {}}"#).unwrap();

    assert!(inspect::execute(path.to_str().unwrap(), false).is_err());
}
