//! Field map: which JSON keys hold which report fields.

use super::ConfigError;

/// Case-list key meaning "the root value is the case list".
pub const ROOT_LIST: &str = ".";

/// Marker separating the outer list key from the inner field in a failure
/// address such as `comments[].summary`.
pub const LIST_MARKER: &str = "[]";

/// How the failure message of a case is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureAddress {
    /// Direct string field on the case object
    Field(String),
    /// `outer[].inner`: list of objects under `outer`, message in each `inner`
    List { outer: String, inner: String },
}

impl FailureAddress {
    /// Parse a configured failure key.
    pub fn parse(address: &str) -> Result<Self, ConfigError> {
        let Some((outer, rest)) = address.split_once(LIST_MARKER) else {
            return Ok(FailureAddress::Field(address.to_string()));
        };

        let inner = rest.strip_prefix('.').unwrap_or_default();
        if outer.is_empty() || inner.is_empty() {
            return Err(ConfigError::Validation(format!(
                "invalid failure address '{}': expected 'outer[].inner'",
                address
            )));
        }
        if inner.contains('.') || inner.contains(LIST_MARKER) {
            return Err(ConfigError::Validation(format!(
                "invalid failure address '{}': only one level below the list is supported",
                address
            )));
        }

        Ok(FailureAddress::List {
            outer: outer.to_string(),
            inner: inner.to_string(),
        })
    }
}

/// Immutable mapping from report fields to JSON keys.
///
/// Suite name, description and time keys double as literal values when the
/// document does not supply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    pub suite_name: String,
    pub suite_description: String,
    pub suite_time: String,
    /// Key of the case list, or [`ROOT_LIST`]
    pub case_list: String,
    pub case_name: String,
    pub case_classname: String,
    pub case_failure: FailureAddress,
    pub case_time: String,
    pub skip_field: Option<String>,
    /// Root is a list of suite descriptors
    pub nested_list: bool,
}

impl FieldMap {
    /// Validate key combinations that would make every document fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("test_junit_list", &self.case_list),
            ("test_junit_list_name", &self.case_name),
            ("test_junit_list_class_name", &self.case_classname),
        ];
        for (flag, key) in required {
            if key.is_empty() {
                return Err(ConfigError::Validation(format!("'{}' must be set", flag)));
            }
        }

        if self.nested_list {
            if self.case_list == ROOT_LIST {
                return Err(ConfigError::Validation(format!(
                    "'{}' cannot be used as the case list of nested suites",
                    ROOT_LIST
                )));
            }
            if singular_key(&self.case_list).map_or(true, str::is_empty) {
                return Err(ConfigError::Validation(format!(
                    "case list key '{}' is too short to derive the case object key",
                    self.case_list
                )));
            }
        }

        Ok(())
    }

    /// Case list is the root value itself.
    pub fn list_is_root(&self) -> bool {
        self.case_list == ROOT_LIST
    }

    /// Key of the case object inside each nested entry.
    pub fn case_object_key(&self) -> &str {
        singular_key(&self.case_list).unwrap_or_default()
    }
}

/// Derive the key of a single element from a list key by dropping its last
/// character: `comments` → `comment`. This is a naming convention, not a
/// grammar; `entries` becomes `entrie`.
pub fn singular_key(list_key: &str) -> Option<&str> {
    let mut chars = list_key.chars();
    chars.next_back()?;
    Some(chars.as_str())
}
