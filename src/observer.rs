//! Build observers
//!
//! The report builder never prints. It reports what it does to a
//! [`BuildObserver`]; the binary forwards those events to `tracing`.

use crate::resolve::Origin;

/// Why an entry produced no case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry has no object under the derived case key
    MissingCaseObject,
    /// The case object has a null or missing name
    NullName,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingCaseObject => "no case object",
            SkipReason::NullName => "case name is null",
        }
    }
}

/// Something the builder did while walking the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent<'a> {
    SuiteStarted {
        index: usize,
        name: &'a str,
    },
    /// A lenient field fell back to its literal or zero value
    FieldDegraded {
        path: &'a str,
        origin: Origin,
    },
    EntrySkipped {
        suite: &'a str,
        entry: usize,
        reason: SkipReason,
    },
    /// Failure extraction bypassed by the skip field
    FailureCheckSkipped {
        suite: &'a str,
        case: &'a str,
    },
    CaseFailed {
        suite: &'a str,
        case: &'a str,
        message: &'a str,
    },
    SuiteFinished {
        name: &'a str,
        tests: usize,
        errors: usize,
    },
}

/// Receives [`BuildEvent`]s from the report builder.
pub trait BuildObserver {
    fn on_event(&mut self, event: &BuildEvent<'_>);
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BuildObserver for NullObserver {
    fn on_event(&mut self, _event: &BuildEvent<'_>) {}
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl BuildObserver for TracingObserver {
    fn on_event(&mut self, event: &BuildEvent<'_>) {
        match *event {
            BuildEvent::SuiteStarted { index, name } => {
                tracing::debug!(index, name, "building suite");
            }
            BuildEvent::FieldDegraded { path, origin } => {
                tracing::debug!(path, %origin, "field not found in document, using fallback");
            }
            BuildEvent::EntrySkipped {
                suite,
                entry,
                reason,
            } => {
                tracing::warn!(suite, entry, reason = reason.as_str(), "skipping entry");
            }
            BuildEvent::FailureCheckSkipped { suite, case } => {
                tracing::debug!(suite, case, "skip field set, not checking for failure");
            }
            BuildEvent::CaseFailed {
                suite,
                case,
                message,
            } => {
                tracing::debug!(suite, case, message, "case failed");
            }
            BuildEvent::SuiteFinished {
                name,
                tests,
                errors,
            } => {
                tracing::info!(suite = name, tests, errors, "suite built");
            }
        }
    }
}

/// Keeps a rendered line per event.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<String>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines containing `needle`.
    pub fn matching(&self, needle: &str) -> Vec<&str> {
        self.events
            .iter()
            .filter(|line| line.contains(needle))
            .map(String::as_str)
            .collect()
    }
}

impl BuildObserver for RecordingObserver {
    fn on_event(&mut self, event: &BuildEvent<'_>) {
        self.events.push(format!("{:?}", event));
    }
}
