use jsonapi_cli::{commands::normalize, OutputFormat};
use jsonapi_core::{decoder::decode_document, types::DataShape};
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

fn read_json<P: AsRef<std::path::Path>>(p: P) -> Value {
    serde_json::from_slice(&fs::read(p).unwrap()).unwrap()
}

#[test]
fn normalize_clears_empty_link_and_keeps_shape() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.json");

    write_file(
        &in_path,
        r#"{"data": [], "links": {"self": "/articles", "related": ""}, "meta": {"total": 0}}"#,
    );

    normalize::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*alias*/ false,
        OutputFormat::Compact,
        /*stamp_version*/ false,
    )
    .unwrap();

    let value = read_json(&out_path);
    assert_eq!(
        value,
        json!({"data": [], "links": {"self": "/articles"}, "meta": {"total": 0}})
    );

    let decoded = decode_document(&fs::read(&out_path).unwrap()).unwrap();
    assert_eq!(decoded.shape(), DataShape::Many);
}

#[test]
fn normalize_alias_pretty_with_version() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.json");

    write_file(
        &in_path,
        r#"{
          "data": {"type": "articles", "id": "1", "relationships": {
            "author": {"data": {"type": "people", "id": "9"}}
          }},
          "included": [{"type": "people", "id": "9", "attributes": {"name": "Dan"}}]
        }"#,
    );

    normalize::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*alias*/ true,
        OutputFormat::Pretty,
        /*stamp_version*/ true,
    )
    .unwrap();

    let raw = fs::read_to_string(&out_path).unwrap();
    assert!(raw.contains('\n'));

    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value["data"]["relationships"]["author"]["data"]["attributes"]["name"],
        json!("Dan")
    );
    assert_eq!(value["jsonapi"]["version"], json!(jsonapi_core::constants::JSONAPI_VERSION));
}

#[test]
fn normalize_alias_rejects_orphans() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.json");

    write_file(
        &in_path,
        r#"{"data": {"type": "a", "id": "1"}, "included": [{"type": "b", "id": "2"}]}"#,
    );

    let err = normalize::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*alias*/ true,
        OutputFormat::Compact,
        /*stamp_version*/ false,
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("{Type: b, ID: 2}"));
    assert!(!out_path.exists());
}

#[test]
fn normalize_errors_document_drops_data() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let out_path = td.path().join("out.json");

    write_file(
        &in_path,
        r#"{"data": {"type": "a", "id": "1"}, "errors": [{"status": "409", "title": "Conflict"}]}"#,
    );

    normalize::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*alias*/ false,
        OutputFormat::Compact,
        /*stamp_version*/ false,
    )
    .unwrap();

    let value = read_json(&out_path);
    assert!(value.get("data").is_none());
    assert_eq!(value["errors"][0]["status"], json!("409"));
}
