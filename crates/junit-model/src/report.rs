//! Report model types.
//!
//! Counts on a [`Suite`] are derived from its cases, so `tests` always equals
//! the number of cases and `errors` always equals the number of failed cases.

/// Failure attached to a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Message rendered as the `message` attribute.
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub classname: String,
    /// Duration in whole seconds
    pub time: u64,
    /// Present only when the case failed
    pub failure: Option<Failure>,
}

impl Case {
    /// Create a passing case.
    pub fn new(name: impl Into<String>, classname: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            classname: classname.into(),
            time,
            failure: None,
        }
    }

    /// Attach a failure to this case.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(Failure::new(message));
        self
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// A test suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suite {
    pub name: String,
    /// Rendered as the `package` attribute
    pub package: String,
    /// Declared duration in whole seconds
    pub time: u64,
    cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: impl Into<String>, package: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            time,
            cases: Vec::new(),
        }
    }

    /// Append a case, keeping input order.
    pub fn push_case(&mut self, case: Case) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Number of cases (`tests` attribute).
    pub fn tests(&self) -> usize {
        self.cases.len()
    }

    /// Number of failed cases (`errors` attribute).
    pub fn errors(&self) -> usize {
        self.cases.iter().filter(|c| c.is_failed()).count()
    }
}

/// Root of the output model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub suites: Vec<Suite>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_suite(&mut self, suite: Suite) {
        self.suites.push(suite);
    }

    /// Total cases across all suites
    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(Suite::tests).sum()
    }

    /// Total failed cases across all suites
    pub fn total_errors(&self) -> usize {
        self.suites.iter().map(Suite::errors).sum()
    }

    /// Suites reporting at least one error
    pub fn failing_suites(&self) -> impl Iterator<Item = &Suite> {
        self.suites.iter().filter(|s| s.errors() > 0)
    }

    pub fn has_errors(&self) -> bool {
        self.failing_suites().next().is_some()
    }
}
