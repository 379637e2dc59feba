//! Configuration layers
//!
//! Settings are merged from three layers, last wins:
//! 1. Built-in defaults
//! 2. Optional TOML config file (`--config`)
//! 3. CLI flags and `PLUGIN_*` environment variables
//!
//! The merged settings yield the [`FieldMap`] consumed by the report builder.

mod defaults;
mod effective;
mod field_map;
mod merge;

pub use defaults::BuiltinDefaults;
pub use effective::{ConfigOrigin, ConfigSource, EffectiveConfig, SCHEMA_ID, SCHEMA_VERSION};
pub use field_map::{singular_key, FailureAddress, FieldMap, LIST_MARKER, ROOT_LIST};
pub use merge::{deep_merge, merge_layers};

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Merged settings, keyed by the CLI flag names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Path of the JSON document to convert
    pub json_file_name: String,
    /// Inline JSON document
    pub json_content: String,
    /// Report name, used for the output file name
    pub test_name: String,
    /// Key of the suite description (`package` attribute)
    pub test_description: String,
    /// Key of the suite duration
    pub test_junit_time: String,
    /// Key of the suite name
    pub test_junit_name: String,
    /// Key of the case list (`.` for a root array)
    pub test_junit_list: String,
    pub test_junit_list_name: String,
    pub test_junit_list_class_name: String,
    /// Key of the failure message, or `outer[].inner`
    pub test_junit_list_failure: String,
    pub test_junit_list_time: String,
    /// Optional boolean marker that disables failure extraction for an entry
    pub test_junit_skip_field: String,
    /// Root is a list of suites
    pub nested_json_list: bool,
    /// Exit non-zero when any suite reports errors
    pub fail_on_errors: bool,
    /// Directory receiving `<name>-junit.xml`
    pub output_dir: String,
}

impl Settings {
    /// Build and validate the field map described by these settings.
    pub fn field_map(&self) -> Result<FieldMap, ConfigError> {
        let skip_field = if self.test_junit_skip_field.is_empty() {
            None
        } else {
            Some(self.test_junit_skip_field.clone())
        };

        let fields = FieldMap {
            suite_name: self.test_junit_name.clone(),
            suite_description: self.test_description.clone(),
            suite_time: self.test_junit_time.clone(),
            case_list: self.test_junit_list.clone(),
            case_name: self.test_junit_list_name.clone(),
            case_classname: self.test_junit_list_class_name.clone(),
            case_failure: FailureAddress::parse(&self.test_junit_list_failure)?,
            case_time: self.test_junit_list_time.clone(),
            skip_field,
            nested_list: self.nested_json_list,
        };
        fields.validate()?;
        Ok(fields)
    }
}
