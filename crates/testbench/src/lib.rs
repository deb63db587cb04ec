/*!
A minimal test aggregation harness.

A [`TestBench`] collects named, zero-argument procedures and runs them one
after another in registration order. A procedure passes when it returns
normally and fails when it returns an error or panics. Every entry runs on
every run, regardless of how the earlier ones ended.

```
use testbench::{RunSummary, TestBench};

let mut bench = TestBench::new("arithmetic");
bench.add_test("addition", || assert_eq!(1 + 1, 2));
bench.add_test("parsing", || "42".parse::<u32>().map(drop));

let report = bench.run_with(testbench::LogReporter::new());
assert_eq!(
    report.summary(),
    RunSummary { passed: 2, failed: 0, total: 2 }
);
```
!*/

#![doc(html_root_url = "https://docs.rs/testbench/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

mod bench;
mod cli;
mod entry;
mod error;
mod global;
mod report;
mod reporter;
mod runner;
mod termination;

pub use crate::{
    bench::TestBench,
    cli::{Args, ColorConfig, ExitStatus, OutputFormat},
    entry::{IntoTestEntry, RawEntry, TestEntry, TestFn},
    error::{MalformedEntryError, MalformedReason},
    report::{Failure, Outcome, Report, RunSummary, TestCaseSummary},
    reporter::{ConsoleReporter, LogReporter, Reporter},
    runner::run_main,
    termination::Termination,
};
