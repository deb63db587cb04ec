use crate::{
    entry::{IntoTestEntry, TestEntry},
    error::MalformedEntryError,
    global,
    report::{Outcome, Report, TestCaseSummary},
    reporter::{ConsoleReporter, Reporter},
    termination::Termination,
};
use maybe_unwind::maybe_unwind;
use std::panic::AssertUnwindSafe;
use termcolor::ColorChoice;

/// An ordered collection of test entries under a common label.
///
/// Entries run in registration order. They are never removed or
/// reordered once added, and every run replays all of them from the
/// start with a fresh tally.
#[derive(Debug)]
pub struct TestBench {
    label: String,
    entries: Vec<TestEntry>,
}

impl TestBench {
    /// Create an empty bench described by `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: vec![],
        }
    }

    /// Return the label describing the whole bench.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the registered entries in execution order.
    #[inline]
    pub fn entries(&self) -> &[TestEntry] {
        &self.entries[..]
    }

    /// Return the number of registered entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a single test procedure.
    ///
    /// The procedure is not invoked until the bench runs. Its return value
    /// must implement [`Termination`]; a closure whose body only panics needs
    /// an explicit `-> ()` return type, e.g. `|| -> () { panic!("boom") }`.
    pub fn add_test<D, F, T>(&mut self, description: D, procedure: F)
    where
        D: Into<String>,
        F: FnMut() -> T + 'static,
        T: Termination,
    {
        self.push(TestEntry::new(description, procedure));
    }

    /// Register a batch of test procedures, in order.
    ///
    /// This is equivalent to calling [`add_test`](Self::add_test) for each
    /// item. When an item turns out to be malformed, the items before it
    /// stay registered and the rest of the batch is discarded.
    pub fn add_tests<I>(&mut self, items: I) -> Result<(), MalformedEntryError>
    where
        I: IntoIterator,
        I::Item: IntoTestEntry,
    {
        for (index, item) in items.into_iter().enumerate() {
            let entry = item.into_test_entry().map_err(|reason| {
                log::debug!("{}: rejected malformed entry at {}", self.label, index);
                reason.at(index)
            })?;
            self.push(entry);
        }
        Ok(())
    }

    fn push(&mut self, entry: TestEntry) {
        log::trace!(
            "{}: registered test {}: {}",
            self.label,
            self.entries.len(),
            entry.description()
        );
        self.entries.push(entry);
    }

    /// Run every entry and print the results to stdout.
    pub fn run(&mut self) -> Report {
        self.run_with(ConsoleReporter::stdout(ColorChoice::Auto))
    }

    /// Run every entry, sending progress to `reporter`.
    ///
    /// A failing entry never stops the run, and no failure propagates
    /// out of this method.
    pub fn run_with<R>(&mut self, reporter: R) -> Report
    where
        R: Reporter,
    {
        global::install();

        log::debug!("{}: running {} tests", self.label, self.entries.len());
        reporter.test_run_starting(&self.label, &self.entries);

        let mut report = Report::new(&self.label, self.entries.len());
        for (index, entry) in self.entries.iter_mut().enumerate() {
            reporter.test_case_starting(index, entry);

            let testfn = entry.testfn_mut();
            let result = maybe_unwind(AssertUnwindSafe(|| testfn.call()));

            let summary = TestCaseSummary {
                index,
                description: entry.description().to_owned(),
                outcome: Outcome::from_result(result),
            };
            reporter.test_case_ended(&summary);
            report.append(summary);
        }

        reporter.test_run_ended(&report);
        log::debug!("{}: {:?}", self.label, report.summary());

        report
    }
}
