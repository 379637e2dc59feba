//! Test fixtures: sample tool outputs and the settings that map them.

#![allow(dead_code)]

use json_junit::Settings;
use std::path::{Path, PathBuf};

/// Path to a document under `tests/fixtures/documents`
pub fn document_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/documents")
        .join(name)
}

/// Raw text of a fixture document
pub fn document(name: &str) -> String {
    std::fs::read_to_string(document_path(name)).expect("Failed to read fixture document")
}

/// hadolint output: the document itself is the case list.
pub fn hadolint_settings() -> Settings {
    Settings {
        test_name: "hadolint".to_string(),
        test_junit_name: "Hadolint".to_string(),
        test_description: "Dockerfile lint".to_string(),
        test_junit_time: "0".to_string(),
        test_junit_list: ".".to_string(),
        test_junit_list_name: "code".to_string(),
        test_junit_list_class_name: "file".to_string(),
        test_junit_list_failure: "message".to_string(),
        test_junit_list_time: "line".to_string(),
        ..Settings::default()
    }
}

/// Quality gate report: one suite with a list of conditions.
pub fn quality_gate_settings() -> Settings {
    Settings {
        test_junit_name: "projectName".to_string(),
        test_description: "projectKey".to_string(),
        test_junit_time: "analysisTime".to_string(),
        test_junit_list: "conditions".to_string(),
        test_junit_list_name: "metric".to_string(),
        test_junit_list_class_name: "rule".to_string(),
        test_junit_list_failure: "error".to_string(),
        test_junit_list_time: "seconds".to_string(),
        ..Settings::default()
    }
}

/// Review export: a list of repositories, each with pull requests.
pub fn reviews_settings() -> Settings {
    Settings {
        test_name: "reviews".to_string(),
        test_junit_name: "repository".to_string(),
        test_description: "organization".to_string(),
        test_junit_time: "elapsed".to_string(),
        test_junit_list: "pullRequests".to_string(),
        test_junit_list_name: "title".to_string(),
        test_junit_list_class_name: "author".to_string(),
        test_junit_list_failure: "comments[].summary".to_string(),
        test_junit_list_time: "duration".to_string(),
        test_junit_skip_field: "draft".to_string(),
        nested_json_list: true,
        ..Settings::default()
    }
}
