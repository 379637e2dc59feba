//! Built-in defaults (layer 1)

use serde::{Deserialize, Serialize};

use super::field_map::ROOT_LIST;

/// Built-in default settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Case list key (default: ".", the root value is the list)
    pub test_junit_list: String,

    /// Output directory (default: current directory)
    pub output_dir: String,

    /// Nested suite addressing (default: false)
    pub nested_json_list: bool,

    /// Fail on suite errors (default: false)
    pub fail_on_errors: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            test_junit_list: ROOT_LIST.to_string(),
            output_dir: ".".to_string(),
            nested_json_list: false,
            fail_on_errors: false,
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "test_junit_list": self.test_junit_list,
            "output_dir": self.output_dir,
            "nested_json_list": self.nested_json_list,
            "fail_on_errors": self.fail_on_errors,
        })
    }
}
