//! Nested mode: the root is a list of suite descriptors.
//!
//! Each descriptor holds a list of entries under the configured list key.
//! The case object of an entry lives under the singular form of that key
//! (`comments` → `comment`); entries without a case object, or whose case
//! object has no name, are skipped rather than rejected.

use junit_model::{Case, Report, Suite};
use serde_json::{Map, Value};

use super::failure::failure_message;
use super::{ReportBuilder, ROOT_PATH};
use crate::observer::{BuildEvent, SkipReason};
use crate::resolve::{
    as_bool, as_list, as_object, join_path, require_string, resolve, JsonKind, ShapeError,
};

impl ReportBuilder<'_> {
    pub(super) fn build_nested(&mut self, root: &Value) -> Result<Report, ShapeError> {
        let Value::Array(descriptors) = root else {
            return Err(ShapeError::new(
                ROOT_PATH,
                JsonKind::Array,
                JsonKind::of(Some(root)),
            ));
        };

        let mut report = Report::new();
        for (index, descriptor) in descriptors.iter().enumerate() {
            let path = join_path(ROOT_PATH, &format!("[{}]", index));
            let descriptor = as_object(descriptor, &path)?;
            let suite = self.nested_suite(index, descriptor, &path)?;
            report.push_suite(suite);
        }
        Ok(report)
    }

    fn nested_suite(
        &mut self,
        index: usize,
        descriptor: &Map<String, Value>,
        path: &str,
    ) -> Result<Suite, ShapeError> {
        let fields = self.fields;

        let mut suite = self.suite_header(Some(descriptor), path, true);
        self.start_suite(index, &suite);

        let entries = as_list(descriptor, &fields.case_list).map_err(|e| e.within(path))?;
        let list_path = join_path(path, &fields.case_list);

        for (entry_index, entry) in entries.iter().enumerate() {
            let entry_path = join_path(&list_path, &format!("[{}]", entry_index));
            let entry = as_object(entry, &entry_path)?;

            match self.nested_case(entry, &entry_path, &suite.name)? {
                Ok(case) => self.push_case(&mut suite, case),
                Err(reason) => {
                    self.observer.on_event(&BuildEvent::EntrySkipped {
                        suite: &suite.name,
                        entry: entry_index,
                        reason,
                    });
                }
            }
        }

        self.finish_suite(&suite);
        Ok(suite)
    }

    /// Case for one entry, or the reason the entry has none.
    fn nested_case(
        &mut self,
        entry: &Map<String, Value>,
        entry_path: &str,
        suite_name: &str,
    ) -> Result<Result<Case, SkipReason>, ShapeError> {
        let fields = self.fields;
        let case_key = fields.case_object_key();

        // Entries without a case object or a name are not cases at all
        let Some(case_object) = resolve(entry, case_key).and_then(Value::as_object) else {
            return Ok(Err(SkipReason::MissingCaseObject));
        };
        if matches!(resolve(case_object, &fields.case_name), None | Some(Value::Null)) {
            return Ok(Err(SkipReason::NullName));
        }

        let case_path = join_path(entry_path, case_key);
        let name = require_string(case_object, &fields.case_name).map_err(|e| e.within(&case_path))?;
        let classname =
            require_string(case_object, &fields.case_classname).map_err(|e| e.within(&case_path))?;
        // Time sits on the entry, next to the case object
        let time = self.lenient_duration(entry, &fields.case_time, entry_path);

        let skip_failure = match &fields.skip_field {
            Some(key) => as_bool(entry, key).map_err(|e| e.within(entry_path))?,
            None => false,
        };

        let case = Case::new(name, classname, time);
        if skip_failure {
            self.observer.on_event(&BuildEvent::FailureCheckSkipped {
                suite: suite_name,
                case: name,
            });
            return Ok(Ok(case));
        }

        Ok(Ok(
            match failure_message(entry, &fields.case_failure).map_err(|e| e.within(entry_path))? {
                Some(message) => case.with_failure(message),
                None => case,
            },
        ))
    }
}
