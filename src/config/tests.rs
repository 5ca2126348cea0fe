//! Tests for config functionality.

use crate::config::Config;
use crate::config::types::default_image_extensions;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.bind_address, "localhost:8080");
    assert!(config.open_browser);
    assert_eq!(config.quarantine_dir, "to-delete");
    assert_eq!(config.image_extensions, vec!["jpg", "jpeg", "png", "gif"]);
    assert!(config.case_sensitive_extensions);
    assert!(!config.recursive);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.bind_address, "localhost:8080");
    assert_eq!(config.image_extensions, default_image_extensions());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
bind_address: "127.0.0.1:9000"
recursive: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.bind_address, "127.0.0.1:9000");
    assert!(config.recursive);

    // Unspecified values should use defaults
    assert_eq!(config.quarantine_dir, "to-delete");
    assert!(config.open_browser);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
bind_address: "localhost:3000"
open_browser: false
quarantine_dir: trash
image_extensions:
  - jpg
  - webp
case_sensitive_extensions: false
recursive: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.bind_address, "localhost:3000");
    assert!(!config.open_browser);
    assert_eq!(config.quarantine_dir, "trash");
    assert_eq!(config.image_extensions, vec!["jpg", "webp"]);
    assert!(!config.case_sensitive_extensions);
    assert!(config.recursive);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
bind_address: "localhost:8081"
theme: dark
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.bind_address, "localhost:8081");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("image_extensions: [jpg").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validation_rejects_leading_dot_extension() {
    let err = Config::from_yaml("image_extensions: ['.jpg']").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("leading dots"));
    assert!(msg.contains("Use 'jpg' instead"));
}

#[test]
fn test_validation_rejects_empty_extension_list() {
    let err = Config::from_yaml("image_extensions: []").unwrap_err();
    assert!(err.to_string().contains("at least one extension"));
}

#[test]
fn test_validation_rejects_nested_quarantine_dir() {
    for bad in ["a/b", "..", "/tmp/trash", ""] {
        let config = Config {
            quarantine_dir: bad.to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err(), "accepted '{}'", bad);
    }
}

#[test]
fn test_validation_rejects_empty_bind_address() {
    let config = Config {
        bind_address: "  ".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_fallback_address_keeps_host() {
    let config = Config::default();
    assert_eq!(config.fallback_address(), "localhost:0");

    let config = Config {
        bind_address: "127.0.0.1:8080".to_string(),
        ..Config::default()
    };
    assert_eq!(config.fallback_address(), "127.0.0.1:0");

    let config = Config {
        bind_address: "garbage".to_string(),
        ..Config::default()
    };
    assert_eq!(config.fallback_address(), "localhost:0");
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gpic.yaml");
    std::fs::write(&path, "quarantine_dir: rejects\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.quarantine_dir, "rejects");
}

#[test]
fn test_load_missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.yaml");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}
