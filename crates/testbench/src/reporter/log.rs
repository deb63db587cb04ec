use crate::{
    entry::TestEntry,
    report::{Outcome, Report, TestCaseSummary},
    reporter::Reporter,
};

/// A reporter that forwards run events to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    #[allow(missing_docs)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&self, label: &str, entries: &[TestEntry]) {
        let suffix = match entries.len() {
            1 => "",
            _ => "s",
        };
        log::info!("{}: running {} test{}", label, entries.len(), suffix);
    }

    fn test_run_ended(&self, report: &Report) {
        let summary = report.summary();
        if report.is_passed() {
            log::info!(
                "{}: ok. {} passed; {} failed; {} total",
                report.label(),
                summary.passed,
                summary.failed,
                summary.total
            );
        } else {
            log::error!(
                "{}: FAILED. {} passed; {} failed; {} total",
                report.label(),
                summary.passed,
                summary.failed,
                summary.total
            );
        }
    }

    fn test_case_starting(&self, index: usize, entry: &TestEntry) {
        log::info!("start {}: {}", index, entry.description());
    }

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        match summary.outcome() {
            Outcome::Passed => log::info!("test {} passed", summary.index()),
            Outcome::Failed(failure) => {
                log::error!("test {} failed: {}", summary.index(), failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::TestBench;
    use std::{cell::RefCell, sync::Once};

    thread_local! {
        static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(vec![]);
    }

    struct Capture;

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if record.target().ends_with("reporter::log") {
                RECORDS.with(|records| {
                    records
                        .borrow_mut()
                        .push((record.level(), record.args().to_string()))
                });
            }
        }

        fn flush(&self) {}
    }

    fn install_capture() {
        static CAPTURE: Capture = Capture;
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    #[test]
    fn emits_run_events() {
        install_capture();

        let mut bench = TestBench::new("logged");
        bench.add_test("passes", || ());
        bench.add_test("panics", || -> () { panic!("kaboom") });
        bench.run_with(LogReporter::new());

        let records = RECORDS.with(|records| records.borrow_mut().split_off(0));
        let messages: Vec<_> = records.iter().map(|(_, msg)| msg.as_str()).collect();
        assert_eq!(messages[0], "logged: running 2 tests");
        assert_eq!(messages[1], "start 0: passes");
        assert_eq!(messages[2], "test 0 passed");
        assert_eq!(messages[3], "start 1: panics");
        assert!(messages[4].starts_with("test 1 failed: kaboom"), "{}", messages[4]);
        assert_eq!(messages[5], "logged: FAILED. 1 passed; 1 failed; 2 total");
        assert_eq!(messages.len(), 6);

        assert_eq!(records[4].0, log::Level::Error);
        assert_eq!(records[5].0, log::Level::Error);
    }
}
