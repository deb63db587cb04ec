use crate::{
    bench::TestBench,
    cli::{Args, ExitStatus},
    reporter::ConsoleReporter,
};
use termcolor::WriteColor;

/// Run a bench as the main body of a test process.
///
/// The command line is parsed from the environment, the entries are run
/// (or listed, with `--list`) on stdout, and the resulting exit status is
/// returned to the caller.
pub fn run_main(mut bench: TestBench) -> ExitStatus {
    let args = match Args::from_env() {
        Ok(args) => args,
        Err(st) => return st,
    };
    let reporter = ConsoleReporter::from_args(&args);
    run_main_inner(&mut bench, &args, &reporter)
}

fn run_main_inner<W>(
    bench: &mut TestBench,
    args: &Args,
    reporter: &ConsoleReporter<W>,
) -> ExitStatus
where
    W: WriteColor,
{
    if args.list_tests {
        return match reporter.print_list(bench.entries()) {
            Ok(()) => ExitStatus::OK,
            Err(err) => {
                log::error!("failed to print the test list: {}", err);
                ExitStatus::FAILED
            }
        };
    }

    bench.run_with(reporter).status()
}

/// Generate a `main` function that builds a bench and runs it.
///
/// The argument is a path to a function returning a [`TestBench`]. This is
/// intended for test targets declared with `harness = false`.
///
/// [`TestBench`]: crate::TestBench
#[macro_export]
macro_rules! test_main {
    ($build:path) => {
        fn main() {
            $crate::run_main($build()).exit();
        }
    };
}
