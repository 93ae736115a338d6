//! Tests for config functionality.

use crate::buildfile::BuildFileLayout;
use crate::config::Config;
use crate::error::ScaffoldError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.build_file, "Makefile");
    assert_eq!(config.templates_file, "scripts/templates.json");
    assert_eq!(config.layout, BuildFileLayout::default());
    assert_eq!(config.layout.fallback_example, "000pilot_example");
    assert_eq!(config.layout.object_list_prefix, "OBJS =");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
build_file: firmware.mk
layout:
  fallback_example: 003hello_world
  object_dir: obj
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.build_file, "firmware.mk");
    assert_eq!(config.layout.fallback_example, "003hello_world");
    assert_eq!(config.layout.object_dir, "obj");

    // Unspecified values should use defaults
    assert_eq!(config.templates_file, "scripts/templates.json");
    assert_eq!(config.layout.elf_var, "TARGET_ELF");
    assert_eq!(config.layout.recipe_header_prefix, "# Example: ");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r##"
build_file: Makefile
serial_port: COM4
layout:
  future_anchor: "# something"
"##;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("build_file: [unclosed").unwrap_err();
    assert!(matches!(err, ScaffoldError::Config(_)));
}

#[test]
fn test_validation_rejects_empty_build_file() {
    let err = Config::from_yaml("build_file: \"\"").unwrap_err();
    assert!(err.to_string().contains("build_file must not be empty"));
}

#[test]
fn test_validation_rejects_absolute_paths() {
    let err = Config::from_yaml("templates_file: /etc/templates.json").unwrap_err();
    assert!(err.to_string().contains("templates_file must be relative"));
}

#[test]
fn test_validation_rejects_bad_layout() {
    let yaml = r#"
layout:
  fallback_example: "two words"
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("layout.fallback_example"));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(temp_dir.path().join("prjmgr.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prjmgr.yaml");
    std::fs::write(&path, "build_file: build/Makefile\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.build_file, "build/Makefile");
}
