//! Report builder
//!
//! Walks a parsed JSON document according to a [`FieldMap`] and produces a
//! [`Report`]. Two addressing modes:
//!
//! - flat: the root describes one suite and holds (or is) the case list
//! - nested: the root is a list of suite descriptors, each holding entries
//!   whose case object sits under the singular form of the list key
//!
//! Shape errors abort the build; degraded descriptive fields do not.

mod failure;
mod flat;
mod nested;

pub use failure::{failure_message, MESSAGE_SEPARATOR};

use junit_model::{Case, Report, Suite};
use serde_json::{Map, Value};

use crate::config::FieldMap;
use crate::observer::{BuildEvent, BuildObserver};
use crate::resolve::{as_duration, as_string, join_path, Origin, Resolved, ShapeError};

/// Location of the document root in shape error paths.
pub const ROOT_PATH: &str = "$";

/// Builds a [`Report`] from a JSON document.
pub struct ReportBuilder<'a> {
    fields: &'a FieldMap,
    observer: &'a mut dyn BuildObserver,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(fields: &'a FieldMap, observer: &'a mut dyn BuildObserver) -> Self {
        Self { fields, observer }
    }

    /// Build the report, dispatching on the configured addressing mode.
    pub fn build(&mut self, root: &Value) -> Result<Report, ShapeError> {
        if self.fields.nested_list {
            self.build_nested(root)
        } else {
            self.build_flat(root)
        }
    }

    /// Suite name, description and time from `container`; missing fields
    /// resolve to their configured literals.
    fn suite_header(
        &mut self,
        container: Option<&Map<String, Value>>,
        path: &str,
        empty_name_is_missing: bool,
    ) -> Suite {
        let fields = self.fields;
        let empty = Map::new();
        let container = container.unwrap_or(&empty);

        let mut name = as_string(container, &fields.suite_name, &fields.suite_name);
        // Nested descriptors treat "" like a missing name
        if empty_name_is_missing && name.value.is_empty() {
            name = Resolved {
                value: fields.suite_name.clone(),
                origin: Origin::Literal,
            };
        }
        self.note(path, &fields.suite_name, &name);

        let description = as_string(container, &fields.suite_description, &fields.suite_description);
        self.note(path, &fields.suite_description, &description);

        let time = self.lenient_duration(container, &fields.suite_time, path);

        Suite::new(name.value, description.value, time)
    }

    /// Duration through the shared number → literal → zero chain.
    fn lenient_duration(&mut self, container: &Map<String, Value>, key: &str, path: &str) -> u64 {
        let time = as_duration(container, key, key);
        self.note(path, key, &time);
        time.value
    }

    fn note<T>(&mut self, path: &str, key: &str, resolved: &Resolved<T>) {
        if resolved.is_degraded() {
            let path = join_path(path, key);
            self.observer.on_event(&BuildEvent::FieldDegraded {
                path: &path,
                origin: resolved.origin,
            });
        }
    }

    fn start_suite(&mut self, index: usize, suite: &Suite) {
        self.observer.on_event(&BuildEvent::SuiteStarted {
            index,
            name: &suite.name,
        });
    }

    fn push_case(&mut self, suite: &mut Suite, case: Case) {
        if let Some(failure) = &case.failure {
            self.observer.on_event(&BuildEvent::CaseFailed {
                suite: &suite.name,
                case: &case.name,
                message: &failure.message,
            });
        }
        suite.push_case(case);
    }

    fn finish_suite(&mut self, suite: &Suite) {
        self.observer.on_event(&BuildEvent::SuiteFinished {
            name: &suite.name,
            tests: suite.tests(),
            errors: suite.errors(),
        });
    }
}

/// Build a report from `root` with `fields`.
pub fn build_report(
    root: &Value,
    fields: &FieldMap,
    observer: &mut dyn BuildObserver,
) -> Result<Report, ShapeError> {
    ReportBuilder::new(fields, observer).build(root)
}
