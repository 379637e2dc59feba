//! Conversion errors and stable exit codes.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::resolve::ShapeError;

/// Errors that stop a conversion, plus the post-output policy failure.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("specify either a JSON file or inline JSON content, not both")]
    ConfigConflict,

    #[error("either a JSON file or inline JSON content must be specified")]
    MissingSource,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("error reading JSON file {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing JSON document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("error converting JSON to JUnit: {0}")]
    Shape(#[from] ShapeError),

    #[error("error serializing JUnit report: {0}")]
    Serialize(#[from] junit_model::WriteError),

    #[error("error writing JUnit report to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{failing_suites} suite(s) reported {errors} error(s) and fail-on-errors is enabled")]
    PolicyFailure { failing_suites: usize, errors: usize },
}

impl ConvertError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ConvertError::ConfigConflict
            | ConvertError::MissingSource
            | ConvertError::Config(_) => FailureKind::Config,
            ConvertError::SourceUnavailable { .. } => FailureKind::Source,
            ConvertError::InvalidJson(_) | ConvertError::Shape(_) => FailureKind::Input,
            ConvertError::Serialize(_) | ConvertError::Output { .. } => FailureKind::Output,
            ConvertError::PolicyFailure { .. } => FailureKind::Policy,
        }
    }
}

/// Failure category of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Settings invalid or sources conflicting
    Config,
    /// JSON file could not be read
    Source,
    /// Document is not JSON or does not have the configured shape
    Input,
    /// Report could not be serialized or written
    Output,
    /// Report written, but suites reported errors with fail-on-errors set
    Policy,
}

impl FailureKind {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FailureKind::Config => ExitCode::Config,
            FailureKind::Source => ExitCode::Source,
            FailureKind::Input => ExitCode::Input,
            FailureKind::Output => ExitCode::Output,
            FailureKind::Policy => ExitCode::Policy,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FailureKind::Config => "Invalid configuration",
            FailureKind::Source => "JSON source unavailable",
            FailureKind::Input => "JSON document does not match the field map",
            FailureKind::Output => "Report could not be written",
            FailureKind::Policy => "Report contains errors",
        }
    }
}

/// Stable process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum ExitCode {
    #[default]
    Success = 0,
    Config = 2,
    Source = 3,
    Input = 4,
    Output = 5,
    Policy = 10,
}

impl ExitCode {
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::JsonKind;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Config.as_i32(), 2);
        assert_eq!(ExitCode::Source.as_i32(), 3);
        assert_eq!(ExitCode::Input.as_i32(), 4);
        assert_eq!(ExitCode::Output.as_i32(), 5);
        assert_eq!(ExitCode::Policy.as_i32(), 10);
        assert!(ExitCode::default().is_success());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ConvertError::ConfigConflict.kind(), FailureKind::Config);
        assert_eq!(ConvertError::MissingSource.kind(), FailureKind::Config);

        let shape = ShapeError::new("$.l", JsonKind::Array, JsonKind::Missing);
        assert_eq!(ConvertError::from(shape).kind(), FailureKind::Input);

        let policy = ConvertError::PolicyFailure {
            failing_suites: 1,
            errors: 2,
        };
        assert_eq!(policy.kind(), FailureKind::Policy);
        assert_eq!(policy.kind().exit_code(), ExitCode::Policy);
    }

    #[test]
    fn test_policy_and_input_failures_are_distinct() {
        assert_ne!(FailureKind::Policy.exit_code(), FailureKind::Input.exit_code());
        assert!(!FailureKind::Policy.exit_code().is_success());
    }

    #[test]
    fn test_messages() {
        let shape = ShapeError::new("$.l", JsonKind::Array, JsonKind::Missing);
        assert_eq!(
            ConvertError::from(shape).to_string(),
            "error converting JSON to JUnit: expected an array at $.l, found nothing"
        );
        assert_eq!(
            ConvertError::PolicyFailure {
                failing_suites: 1,
                errors: 3
            }
            .to_string(),
            "1 suite(s) reported 3 error(s) and fail-on-errors is enabled"
        );
        assert_eq!(FailureKind::Policy.description(), "Report contains errors");
    }
}
