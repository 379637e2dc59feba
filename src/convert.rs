//! Conversion pipeline: source → JSON → report → XML file.

use junit_model::{report_file_name, Report};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::builder::build_report;
use crate::config::{ConfigError, FieldMap, Settings};
use crate::error::ConvertError;
use crate::observer::BuildObserver;
use crate::source::DocumentSource;

/// Report file stem used when neither a report name nor a suite name exists.
pub const DEFAULT_REPORT_NAME: &str = "report";

/// Parse `json` and build the report described by `fields`.
pub fn convert(
    json: &str,
    fields: &FieldMap,
    observer: &mut dyn BuildObserver,
) -> Result<Report, ConvertError> {
    let root: Value = serde_json::from_str(json)?;
    Ok(build_report(&root, fields, observer)?)
}

/// Converter settings resolved from the merged configuration.
#[derive(Debug, Clone)]
pub struct Converter {
    pub fields: FieldMap,
    /// Report name, stem of the output file
    pub test_name: String,
    pub output_dir: PathBuf,
    pub fail_on_errors: bool,
}

impl Converter {
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let output_dir = if settings.output_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&settings.output_dir)
        };

        Ok(Self {
            fields: settings.field_map()?,
            test_name: settings.test_name.clone(),
            output_dir,
            fail_on_errors: settings.fail_on_errors,
        })
    }

    /// Convert the document and write `<name>-junit.xml`.
    ///
    /// Nothing is written when reading, parsing or building fails.
    pub fn run(
        &self,
        source: &DocumentSource,
        observer: &mut dyn BuildObserver,
    ) -> Result<RunOutcome, ConvertError> {
        tracing::info!(source = %source.describe(), "parsing JSON to JUnit");
        let json = source.read()?;
        let report = convert(&json, &self.fields, observer)?;
        let xml = report.to_xml()?;

        let stem = file_stem(self.report_name(&report));
        let output_path = self.output_dir.join(report_file_name(&stem));
        fs::write(&output_path, &xml).map_err(|source| ConvertError::Output {
            path: output_path.clone(),
            source,
        })?;

        tracing::info!(
            path = %output_path.display(),
            suites = report.suites.len(),
            tests = report.total_cases(),
            errors = report.total_errors(),
            "wrote JUnit report"
        );

        Ok(RunOutcome {
            report,
            xml,
            output_path,
        })
    }

    /// `test_name`, else the first suite's name, else [`DEFAULT_REPORT_NAME`].
    pub fn report_name<'a>(&'a self, report: &'a Report) -> &'a str {
        if !self.test_name.is_empty() {
            return &self.test_name;
        }
        report
            .suites
            .first()
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_REPORT_NAME)
    }
}

/// Report name made safe to use as a single file name inside the output
/// directory. Path separators and control characters become `_`, so a suite
/// named `../x` yields `.._x`.
pub fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// A successfully written report.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: Report,
    pub xml: String,
    pub output_path: PathBuf,
}

impl RunOutcome {
    /// Apply the fail-on-errors policy to the written report.
    pub fn check_policy(&self, fail_on_errors: bool) -> Result<(), ConvertError> {
        if !fail_on_errors || !self.report.has_errors() {
            return Ok(());
        }
        Err(ConvertError::PolicyFailure {
            failing_suites: self.report.failing_suites().count(),
            errors: self.report.total_errors(),
        })
    }
}
