use cait_core::{
    load_accessions, load_digital_objects, load_digital_objects_by_uri, load_subjects,
    load_subjects_by_uri, StoreError,
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

fn subjects_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "2.json",
        &json!({"uri": "/subjects/2", "title": "Seismology", "jsonmodel_type": "subject"}),
    );
    write_json(
        dir.path(),
        "1.json",
        &json!({"uri": "/subjects/1", "title": "Astronomy", "jsonmodel_type": "subject"}),
    );
    dir
}

#[test]
fn load_subjects_returns_records_in_file_name_order() {
    let dir = subjects_dir();

    let subjects = load_subjects(dir.path()).unwrap();
    let titles = subjects
        .iter()
        .map(|subject| subject.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Astronomy", "Seismology"]);
}

#[test]
fn load_subjects_by_uri_keys_every_record() {
    let dir = subjects_dir();

    let subjects = load_subjects_by_uri(dir.path()).unwrap();
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects["/subjects/1"].title, "Astronomy");
    assert_eq!(subjects["/subjects/2"].title, "Seismology");
}

#[test]
fn load_subjects_by_uri_keeps_later_file_on_duplicate_uri() {
    let dir = subjects_dir();
    write_json(
        dir.path(),
        "3.json",
        &json!({"uri": "/subjects/1", "title": "Astrophysics"}),
    );

    let subjects = load_subjects_by_uri(dir.path()).unwrap();
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects["/subjects/1"].title, "Astrophysics");
}

#[test]
fn load_digital_objects_by_uri_decodes_file_versions() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "1.json",
        &json!({
            "uri": "/repositories/2/digital_objects/1",
            "title": "Field notebook scan",
            "publish": true,
            "jsonmodel_type": "digital_object",
            "file_versions": [
                {"file_uri": "https://example.org/notebook.pdf", "use_statement": "text"},
                {"file_uri": ""}
            ]
        }),
    );

    let objects = load_digital_objects_by_uri(dir.path()).unwrap();
    let object = &objects["/repositories/2/digital_objects/1"];
    assert!(object.publish);
    assert_eq!(object.file_versions.len(), 2);
    assert_eq!(
        object.file_versions[0].file_uri,
        "https://example.org/notebook.pdf"
    );

    let listed = load_digital_objects(dir.path()).unwrap();
    assert_eq!(listed.len(), 1);
}

#[test]
fn load_accessions_tolerates_missing_and_null_fields() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "1.json",
        &json!({
            "uri": "/repositories/2/accessions/1",
            "title": "Papers",
            "content_description": null,
            "subjects": [{"ref": "/subjects/1"}]
        }),
    );

    let accessions = load_accessions(dir.path()).unwrap();
    assert_eq!(accessions.len(), 1);
    assert_eq!(accessions[0].content_description, "");
    assert!(accessions[0].instances.is_empty());
    assert_eq!(accessions[0].subjects[0].uri(), Some("/subjects/1"));
}

#[test]
fn missing_directory_is_io_error_naming_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("subjects");

    let err = load_subjects(&missing).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().contains("subjects"));
}

#[test]
fn malformed_file_is_parse_error_naming_file() {
    let dir = subjects_dir();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let err = load_subjects_by_uri(dir.path()).unwrap_err();
    match err {
        StoreError::Parse { path, .. } => assert_eq!(path, dir.path().join("broken.json")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn wrong_field_type_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "1.json",
        &json!({"uri": "/repositories/2/digital_objects/1", "publish": "yes"}),
    );

    let err = load_digital_objects_by_uri(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
}

#[test]
fn nested_directory_entry_fails_the_load() {
    let dir = subjects_dir();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let err = load_subjects(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Io { ref path, .. } if path.ends_with("nested")));
}

#[test]
fn array_document_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("s.json"), "[]").unwrap();

    let err = load_subjects_by_uri(dir.path()).unwrap_err();
    match err {
        StoreError::Parse { path, .. } => assert_eq!(path, dir.path().join("s.json")),
        other => panic!("expected parse error, got {other:?}"),
    }

    fs::write(
        dir.path().join("s.json"),
        r#"["/subjects/1", "Astronomy", "subject"]"#,
    )
    .unwrap();
    assert!(matches!(
        load_subjects(dir.path()).unwrap_err(),
        StoreError::Parse { .. }
    ));
}
