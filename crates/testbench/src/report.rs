use crate::cli::ExitStatus;
use maybe_unwind::Unwind;
use std::fmt;

/// The way a test procedure failed.
#[derive(Debug)]
pub enum Failure {
    /// The procedure returned an `Err`.
    Error(anyhow::Error),
    /// The procedure panicked.
    Panicked(Unwind),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Error(err) => write!(f, "{:#}", err),
            Failure::Panicked(unwind) => write!(f, "{}", unwind),
        }
    }
}

/// The outcome of running a single entry.
#[derive(Debug)]
pub enum Outcome {
    #[allow(missing_docs)]
    Passed,
    #[allow(missing_docs)]
    Failed(Failure),
}

impl Outcome {
    pub(crate) fn from_result(result: Result<anyhow::Result<()>, Unwind>) -> Self {
        match result {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(err)) => Outcome::Failed(Failure::Error(err)),
            Err(unwind) => Outcome::Failed(Failure::Panicked(unwind)),
        }
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Return the failure, if any.
    #[inline]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }
}

/// The result of one entry within one run.
#[derive(Debug)]
pub struct TestCaseSummary {
    pub(crate) index: usize,
    pub(crate) description: String,
    pub(crate) outcome: Outcome,
}

impl TestCaseSummary {
    /// Return the 0-based ordinal of the entry.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Aggregate counts of a single run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    #[allow(missing_docs)]
    pub passed: usize,
    #[allow(missing_docs)]
    pub failed: usize,
    #[allow(missing_docs)]
    pub total: usize,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct Report {
    pub(crate) label: String,
    pub(crate) results: Vec<TestCaseSummary>,
    pub(crate) summary: RunSummary,
}

impl Report {
    pub(crate) fn new(label: &str, capacity: usize) -> Self {
        Self {
            label: label.to_owned(),
            results: Vec::with_capacity(capacity),
            summary: RunSummary::default(),
        }
    }

    pub(crate) fn append(&mut self, result: TestCaseSummary) {
        if result.outcome.is_passed() {
            self.summary.passed += 1;
        } else {
            self.summary.failed += 1;
        }
        self.summary.total += 1;
        self.results.push(result);
    }

    /// Return the label of the bench that produced this report.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the aggregate counts.
    #[inline]
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Return the per-entry results in execution order.
    #[inline]
    pub fn results(&self) -> &[TestCaseSummary] {
        &self.results[..]
    }

    /// Iterate over the entries that failed.
    pub fn failures(&self) -> impl Iterator<Item = &TestCaseSummary> + '_ {
        self.results.iter().filter(|r| !r.outcome.is_passed())
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.summary.failed == 0
    }

    /// Map the report to the exit status of a test process.
    #[inline]
    pub fn status(&self) -> ExitStatus {
        if self.is_passed() {
            ExitStatus::OK
        } else {
            ExitStatus::FAILED
        }
    }
}
