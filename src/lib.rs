//! json-junit - JSON to JUnit XML converter
//!
//! Converts a JSON document of caller-described shape into a JUnit XML
//! report. A [`FieldMap`] names the keys holding suite and case fields; the
//! [`ReportBuilder`] walks the document in flat or nested mode and produces a
//! [`Report`], which is written as `<name>-junit.xml` for CI pipelines.

pub mod builder;
pub mod config;
pub mod convert;
pub mod error;
pub mod observer;
pub mod resolve;
pub mod source;

pub use builder::{build_report, ReportBuilder};
pub use config::{ConfigError, EffectiveConfig, FailureAddress, FieldMap, Settings};
pub use convert::{convert, Converter, RunOutcome};
pub use error::{ConvertError, ExitCode, FailureKind};
pub use junit_model::{Case, Failure, Report, Suite};
pub use observer::{BuildEvent, BuildObserver, NullObserver, RecordingObserver, TracingObserver};
pub use resolve::{JsonKind, ShapeError};
pub use source::DocumentSource;
