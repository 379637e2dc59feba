//! Flat mode: the root is a single suite descriptor.

use junit_model::{Case, Report};
use serde_json::Value;

use super::failure::failure_message;
use super::{ReportBuilder, ROOT_PATH};
use crate::resolve::{
    as_list, as_object, join_path, require_duration, require_string, JsonKind, ShapeError,
};

impl ReportBuilder<'_> {
    pub(super) fn build_flat(&mut self, root: &Value) -> Result<Report, ShapeError> {
        let fields = self.fields;

        let (header, entries, list_path) = if fields.list_is_root() {
            // "." : the document is the case list and has no suite fields
            let Value::Array(entries) = root else {
                return Err(ShapeError::new(
                    ROOT_PATH,
                    JsonKind::Array,
                    JsonKind::of(Some(root)),
                ));
            };
            (None, entries.as_slice(), ROOT_PATH.to_string())
        } else {
            let object = as_object(root, ROOT_PATH)?;
            let entries = as_list(object, &fields.case_list).map_err(|e| e.within(ROOT_PATH))?;
            (Some(object), entries, join_path(ROOT_PATH, &fields.case_list))
        };

        let mut suite = self.suite_header(header, ROOT_PATH, false);
        self.start_suite(0, &suite);

        for (index, entry) in entries.iter().enumerate() {
            let path = join_path(&list_path, &format!("[{}]", index));
            let case = self.flat_case(entry, &path)?;
            self.push_case(&mut suite, case);
        }

        self.finish_suite(&suite);
        Ok(Report {
            suites: vec![suite],
        })
    }

    /// Name, classname and time are required; any shape problem is fatal.
    fn flat_case(&mut self, entry: &Value, path: &str) -> Result<Case, ShapeError> {
        let fields = self.fields;
        let within = |e: ShapeError| e.within(path);

        let object = as_object(entry, path)?;
        let name = require_string(object, &fields.case_name).map_err(within)?;
        let classname = require_string(object, &fields.case_classname).map_err(within)?;
        // No literal fallback here, unlike suite time
        let time = require_duration(object, &fields.case_time).map_err(within)?;

        let case = Case::new(name, classname, time);
        Ok(match failure_message(object, &fields.case_failure).map_err(within)? {
            Some(message) => case.with_failure(message),
            None => case,
        })
    }
}
