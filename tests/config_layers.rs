//! Configuration layering from a TOML file and CLI overrides

mod fixtures;

use fixtures::document_path;
use json_junit::config::{ConfigOrigin, ROOT_LIST};
use json_junit::{ConfigError, ConvertError, Converter, DocumentSource, EffectiveConfig, NullObserver};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const HADOLINT_TOML: &str = r#"
test_name = "hadolint"
test_junit_name = "Hadolint"
test_description = "Dockerfile lint"
test_junit_time = "0"
test_junit_list_name = "code"
test_junit_list_class_name = "file"
test_junit_list_failure = "message"
test_junit_list_time = "line"
"#;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("json-junit.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_layer_drives_conversion() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, HADOLINT_TOML);
    let overrides = json!({
        "json_file_name": document_path("hadolint.json").to_string_lossy(),
        "output_dir": dir.path().to_string_lossy(),
        "test_junit_list": null,
        "fail_on_errors": null,
    });

    let effective = EffectiveConfig::build(Some(&config), Some(overrides)).unwrap();
    let settings = effective.settings().unwrap();

    assert_eq!(settings.test_junit_list, ROOT_LIST, "builtin default survives null overrides");
    assert!(!settings.fail_on_errors);

    let source = DocumentSource::from_settings(&settings).unwrap();
    let outcome = Converter::from_settings(&settings)
        .unwrap()
        .run(&source, &mut NullObserver)
        .unwrap();

    assert_eq!(outcome.output_path, dir.path().join("hadolint-junit.xml"));
    assert_eq!(outcome.report.total_errors(), 2);
}

#[test]
fn test_cli_layer_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, HADOLINT_TOML);

    let effective = EffectiveConfig::build(
        Some(&config),
        Some(json!({"test_name": "dockerfile", "fail_on_errors": true})),
    )
    .unwrap();
    let settings = effective.settings().unwrap();

    assert_eq!(settings.test_name, "dockerfile");
    assert_eq!(settings.test_junit_name, "Hadolint");
    assert!(settings.fail_on_errors);

    let origins: Vec<_> = effective.sources.iter().map(|s| s.origin.clone()).collect();
    assert_eq!(
        origins,
        vec![ConfigOrigin::Builtin, ConfigOrigin::File, ConfigOrigin::Cli]
    );
    assert_eq!(effective.sources[1].digest.as_ref().map(String::len), Some(64));
}

#[test]
fn test_explicit_false_overrides_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "fail_on_errors = true\nnested_json_list = true\n");

    let effective = EffectiveConfig::build(
        Some(&config),
        Some(json!({"fail_on_errors": false, "nested_json_list": null})),
    )
    .unwrap();
    let settings = effective.settings().unwrap();

    assert!(!settings.fail_on_errors);
    assert!(settings.nested_json_list, "null keeps the file value");
}

#[test]
fn test_unknown_setting_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "test_junit_lsit = \"items\"\n");

    let effective = EffectiveConfig::build(Some(&config), None).unwrap();
    let err = effective.settings().unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_invalid_field_map_is_a_config_error() {
    let effective = EffectiveConfig::build(
        None,
        Some(json!({
            "json_content": "[]",
            "nested_json_list": true,
            "test_junit_list_name": "title",
            "test_junit_list_class_name": "author",
        })),
    )
    .unwrap();
    let settings = effective.settings().unwrap();

    let err = ConvertError::from(Converter::from_settings(&settings).unwrap_err());

    assert!(matches!(err, ConvertError::Config(ConfigError::Validation(_))));
    assert_eq!(err.kind().exit_code().as_i32(), 2);
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = EffectiveConfig::build(Some(&dir.path().join("absent.toml")), None).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
}
