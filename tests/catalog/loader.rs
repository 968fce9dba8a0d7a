use std::fs;

use uuid::Uuid;

use promptdeck::catalog::{CatalogFileError, load_catalog_file};

fn write_catalog(content: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("promptdeck-loader-test-{}", Uuid::now_v7()));
    fs::create_dir_all(&dir).expect("temp dir should exist");
    let path = dir.join("catalog.json5");
    fs::write(&path, content).expect("catalog should be written");
    path
}

#[test]
fn loads_shipped_catalog_format() {
    let path = write_catalog(
        r#"{
  // comments and trailing commas are fine in json5
  prompts: [
    {
      id: "p1",
      title: "VP Discovery Call",
      description: "Question track",
      body: "Hi [FIRST NAME]",
      category: "SaaS",
      subcategory: "Discovery",
      tags: ["saas", "vp"],
      difficulty: "intermediate",
    },
  ],
}"#,
    );

    let catalog = load_catalog_file(&path).expect("catalog should load");
    assert_eq!(catalog.len(), 1);
    let loaded = catalog.get("p1").expect("p1 should exist");
    assert_eq!(loaded.variables(), vec!["FIRST NAME"]);
}

#[test]
fn rejects_duplicate_ids() {
    let path = write_catalog(
        r#"{
  prompts: [
    { id: "p1", title: "a", description: "", body: "", category: "SaaS" },
    { id: "p1", title: "b", description: "", body: "", category: "SaaS" },
  ],
}"#,
    );

    let err = load_catalog_file(&path).expect_err("duplicate id should fail");
    assert!(matches!(err, CatalogFileError::DuplicateId { ref id, .. } if id == "p1"));
}

#[test]
fn rejects_blank_ids() {
    let path = write_catalog(
        r#"{
  prompts: [
    { id: "  ", title: "a", description: "", body: "", category: "SaaS" },
  ],
}"#,
    );

    let err = load_catalog_file(&path).expect_err("blank id should fail");
    assert!(matches!(err, CatalogFileError::EmptyId { .. }));
}

#[test]
fn rejects_unknown_top_level_keys() {
    let path = write_catalog(r#"{ prompts: [], pages: [] }"#);
    let err = load_catalog_file(&path).expect_err("unknown key should fail");
    assert!(matches!(err, CatalogFileError::Parse { .. }));
}

#[test]
fn empty_prompt_list_is_allowed() {
    let path = write_catalog(r#"{ prompts: [] }"#);
    let catalog = load_catalog_file(&path).expect("empty catalog should load");
    assert!(catalog.is_empty());
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join(format!("promptdeck-missing-{}", Uuid::now_v7()));
    let err = load_catalog_file(&path).expect_err("missing file should fail");
    assert!(matches!(err, CatalogFileError::Read { .. }));
}
