use std::{cell::RefCell, rc::Rc};
use termcolor::NoColor;
use testbench::{ConsoleReporter, RunSummary, TestBench, TestEntry};

fn summary(passed: usize, failed: usize, total: usize) -> RunSummary {
    RunSummary {
        passed,
        failed,
        total,
    }
}

fn run_captured(bench: &mut TestBench) -> (RunSummary, String) {
    let reporter = ConsoleReporter::new(NoColor::new(Vec::new()));
    let report = bench.run_with(&reporter);
    let output = String::from_utf8(reporter.into_inner().into_inner()).unwrap();
    (report.summary(), output)
}

#[test]
fn empty_bench() {
    let mut bench = TestBench::new("empty");
    let (summary_, output) = run_captured(&mut bench);
    assert_eq!(summary_, summary(0, 0, 0));
    assert!(output.starts_with("empty\n"));
}

#[test]
fn single_passing_test() {
    let mut bench = TestBench::new("one");
    bench.add_test("returns normally", || ());
    assert_eq!(run_captured(&mut bench).0, summary(1, 0, 1));
}

#[test]
fn single_failing_test_reports_message() {
    let mut bench = TestBench::new("one");
    bench.add_test("raises", || Err::<(), _>(anyhow::anyhow!("boom")));

    let (summary_, output) = run_captured(&mut bench);
    assert_eq!(summary_, summary(0, 1, 1));
    assert!(output.contains("boom"), "output: {}", output);
    assert!(output.contains("test 0: raises ... FAILED"), "output: {}", output);
}

#[test]
fn panicking_test_is_a_failure() {
    let mut bench = TestBench::new("one");
    bench.add_test("panics", || -> () { panic!("kaboom") });
    bench.add_test("after", || ());

    let reporter = ConsoleReporter::new(NoColor::new(Vec::new()));
    let report = bench.run_with(&reporter);
    let output = String::from_utf8(reporter.into_inner().into_inner()).unwrap();

    assert_eq!(report.summary(), summary(1, 1, 2));
    assert!(!report.results()[0].outcome().is_passed());
    assert!(report.results()[1].outcome().is_passed());

    let message = report.results()[0].outcome().failure().unwrap().to_string();
    assert!(message.contains("kaboom"), "message: {}", message);
    assert!(output.contains("test 0: panics ... FAILED"), "output: {}", output);
    assert!(output.contains("---- test 0: panics ----\nkaboom"), "output: {}", output);
}

#[test]
fn failure_in_the_middle_does_not_stop_the_run() {
    let calls = Rc::new(RefCell::new(vec![]));
    let mut bench = TestBench::new("three");
    for i in 0..3 {
        let calls = calls.clone();
        bench.add_test(format!("test {}", i), move || {
            calls.borrow_mut().push(i);
            if i == 1 {
                Err(anyhow::anyhow!("second fails"))
            } else {
                Ok(())
            }
        });
    }

    let (summary_, output) = run_captured(&mut bench);
    assert_eq!(summary_, summary(2, 1, 3));
    assert_eq!(*calls.borrow(), vec![0, 1, 2]);
    assert!(output.contains("second fails"));
    assert!(output.ends_with("test result: FAILED. 2 passed; 1 failed; 3 total\n"));
}

fn noop() {}

fn panics() {
    panic!("t2 panics")
}

fn fails() -> anyhow::Result<()> {
    anyhow::bail!("nope")
}

#[test]
fn batch_registration_matches_sequential_registration() {
    let mut batched = TestBench::new("bench");
    batched
        .add_tests(vec![("t1", noop as fn()), ("t2", panics as fn())])
        .unwrap();

    let mut sequential = TestBench::new("bench");
    sequential.add_test("t1", noop);
    sequential.add_test("t2", panics);

    let batched_descriptions: Vec<_> = batched
        .entries()
        .iter()
        .map(|e| e.description())
        .collect();
    let sequential_descriptions: Vec<_> = sequential
        .entries()
        .iter()
        .map(|e| e.description())
        .collect();
    assert_eq!(batched_descriptions, sequential_descriptions);

    let (batched_summary, _) = run_captured(&mut batched);
    let (sequential_summary, _) = run_captured(&mut sequential);
    assert_eq!(batched_summary, sequential_summary);
    assert_eq!(batched_summary, summary(1, 1, 2));
}

#[test]
fn batch_of_prepared_entries() {
    let mut bench = TestBench::new("bench");
    bench
        .add_tests(vec![
            TestEntry::new("t1", noop),
            TestEntry::new("t2", fails),
            TestEntry::new("t3", || vec![0u8]),
        ])
        .unwrap();

    let descriptions: Vec<_> = bench.entries().iter().map(|e| e.description()).collect();
    assert_eq!(descriptions, vec!["t1", "t2", "t3"]);

    let (summary_, output) = run_captured(&mut bench);
    assert_eq!(summary_, summary(2, 1, 3));
    assert!(output.contains("nope"), "output: {}", output);
}

#[test]
fn batches_accumulate_with_single_registrations() {
    let mut bench = TestBench::new("bench");
    bench.add_test("first", noop);
    bench
        .add_tests(vec![
            ("second", fails as fn() -> anyhow::Result<()>),
            ("third", fails as fn() -> anyhow::Result<()>),
        ])
        .unwrap();
    bench.add_test("fourth", || Some(0));

    assert_eq!(bench.len(), 4);
    assert_eq!(run_captured(&mut bench).0, summary(2, 2, 4));
}

#[test]
fn repeated_runs_are_independent() {
    let mut bench = TestBench::new("bench");
    bench.add_test("passes", || true);
    bench.add_test("fails", fails);

    let first = run_captured(&mut bench);
    let second = run_captured(&mut bench);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.0.passed + first.0.failed, bench.len());
}
