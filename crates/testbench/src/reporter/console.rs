use crate::{
    cli::{Args, ColorConfig, OutputFormat},
    entry::TestEntry,
    report::{Report, TestCaseSummary},
    reporter::Reporter,
};
use std::{cell::RefCell, fmt, io};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn status_label(passed: bool) -> Colored<&'static str> {
    if passed {
        colored("ok").fg(Color::Green)
    } else {
        colored("FAILED").fg(Color::Red)
    }
}

/// A reporter that renders a run as console text.
pub struct ConsoleReporter<W = StandardStream> {
    stream: RefCell<W>,
    format: OutputFormat,
}

impl ConsoleReporter {
    /// Create a reporter writing to stdout.
    pub fn stdout(color: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color))
    }

    /// Create a stdout reporter configured by command line arguments.
    pub fn from_args(args: &Args) -> Self {
        let color = match args.color {
            ColorConfig::Auto => ColorChoice::Auto,
            ColorConfig::Always => ColorChoice::Always,
            ColorConfig::Never => ColorChoice::Never,
        };
        Self::stdout(color).format(args.format)
    }
}

impl<W> ConsoleReporter<W>
where
    W: WriteColor,
{
    /// Create a reporter writing to an arbitrary stream.
    pub fn new(stream: W) -> Self {
        Self {
            stream: RefCell::new(stream),
            format: OutputFormat::Pretty,
        }
    }

    /// Set the output format.
    pub fn format(self, format: OutputFormat) -> Self {
        Self { format, ..self }
    }

    /// Consume the reporter and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }

    fn print_run_starting(&self, w: &mut W, label: &str, num_tests: usize) -> io::Result<()> {
        writeln!(w, "{}", label)?;
        writeln!(w)?;
        if self.format == OutputFormat::Pretty {
            let suffix = match num_tests {
                1 => "",
                _ => "s",
            };
            writeln!(w, "running {} test{}", num_tests, suffix)?;
        }
        Ok(())
    }

    fn print_test_case_starting(
        &self,
        w: &mut W,
        index: usize,
        entry: &TestEntry,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Pretty {
            write!(w, "test {}: {} ... ", index, entry.description())?;
            w.flush()?;
        }
        Ok(())
    }

    fn print_test_case_summary(&self, w: &mut W, summary: &TestCaseSummary) -> io::Result<()> {
        let passed = summary.outcome().is_passed();
        match self.format {
            OutputFormat::Pretty => {
                status_label(passed).fmt_colored(w)?;
                writeln!(w)?;
            }
            OutputFormat::Terse => {
                if passed {
                    colored(".").fmt_colored(w)?;
                } else {
                    colored("F").fg(Color::Red).fmt_colored(w)?;
                }
                writeln!(w, " {}: {}", summary.index(), summary.description())?;
            }
        }
        w.flush()
    }

    fn print_summary(&self, w: &mut W, report: &Report) -> io::Result<()> {
        if !report.is_passed() {
            writeln!(w)?;
            writeln!(w, "failures:")?;
            for result in report.failures() {
                writeln!(
                    w,
                    "---- test {}: {} ----",
                    result.index(),
                    result.description()
                )?;
                if let Some(failure) = result.outcome().failure() {
                    writeln!(w, "{}", failure)?;
                }
                writeln!(w)?;
            }

            writeln!(w)?;
            writeln!(w, "failures:")?;
            for result in report.failures() {
                writeln!(w, "    {}: {}", result.index(), result.description())?;
            }
        }

        let summary = report.summary();
        writeln!(w)?;
        write!(w, "test result: ")?;
        status_label(report.is_passed()).fmt_colored(w)?;
        write!(w, ".")?;
        writeln!(
            w,
            " {passed} passed; {failed} failed; {total} total",
            passed = summary.passed,
            failed = summary.failed,
            total = summary.total,
        )?;
        w.flush()
    }

    /// Print the ordinals and descriptions of the entries without running them.
    pub fn print_list(&self, entries: &[TestEntry]) -> io::Result<()> {
        let mut w = self.stream.borrow_mut();
        for (index, entry) in entries.iter().enumerate() {
            writeln!(w, "{}: {}", index, entry.description())?;
        }
        if self.format == OutputFormat::Pretty {
            if !entries.is_empty() {
                writeln!(w)?;
            }
            let suffix = match entries.len() {
                1 => "",
                _ => "s",
            };
            writeln!(w, "{} test{}", entries.len(), suffix)?;
        }
        w.flush()
    }
}

impl<W> fmt::Debug for ConsoleReporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleReporter")
            .field("format", &self.format)
            .finish()
    }
}

impl<W> Reporter for ConsoleReporter<W>
where
    W: WriteColor,
{
    fn test_run_starting(&self, label: &str, entries: &[TestEntry]) {
        let mut w = self.stream.borrow_mut();
        let _ = self.print_run_starting(&mut *w, label, entries.len());
    }

    fn test_run_ended(&self, report: &Report) {
        let mut w = self.stream.borrow_mut();
        let _ = self.print_summary(&mut *w, report);
    }

    fn test_case_starting(&self, index: usize, entry: &TestEntry) {
        let mut w = self.stream.borrow_mut();
        let _ = self.print_test_case_starting(&mut *w, index, entry);
    }

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        let mut w = self.stream.borrow_mut();
        let _ = self.print_test_case_summary(&mut *w, summary);
    }
}
