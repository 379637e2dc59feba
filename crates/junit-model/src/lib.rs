//! JUnit Report Model
//!
//! Defines the suites → cases → failure structure produced by the converter
//! and its serialization to the JUnit XML shape.

pub mod report;
pub mod xml;

pub use report::{Case, Failure, Report, Suite};
pub use xml::WriteError;

/// Suffix appended to the report name when writing to disk.
pub const REPORT_FILE_SUFFIX: &str = "-junit.xml";

/// File name for a report with the given stem, e.g. `lint` → `lint-junit.xml`.
pub fn report_file_name(stem: &str) -> String {
    format!("{}{}", stem, REPORT_FILE_SUFFIX)
}
