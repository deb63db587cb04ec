mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};

use crate::{
    entry::TestEntry,
    report::{Report, TestCaseSummary},
};

/// The output channel of a run.
///
/// Callbacks arrive in order: `test_run_starting` once, then a
/// `test_case_starting`/`test_case_ended` pair per entry, then
/// `test_run_ended` once.
pub trait Reporter {
    #[allow(missing_docs)]
    fn test_run_starting(&self, label: &str, entries: &[TestEntry]);
    #[allow(missing_docs)]
    fn test_run_ended(&self, report: &Report);

    #[allow(missing_docs)]
    fn test_case_starting(&self, index: usize, entry: &TestEntry);
    #[allow(missing_docs)]
    fn test_case_ended(&self, summary: &TestCaseSummary);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&self, label: &str, entries: &[TestEntry]) {
            (**self).test_run_starting(label, entries)
        }

        fn test_run_ended(&self, report: &Report) {
            (**self).test_run_ended(report)
        }

        fn test_case_starting(&self, index: usize, entry: &TestEntry) {
            (**self).test_case_starting(index, entry)
        }

        fn test_case_ended(&self, summary: &TestCaseSummary) {
            (**self).test_case_ended(summary)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
