//! Definition of command line interface.

use crate::cli::exit_status::ExitStatus;
use getopts::Options;
use std::{path::Path, str::FromStr};

/// Command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Print the entries instead of running them.
    pub list_tests: bool,
    /// Coloring of the console output.
    pub color: ColorConfig,
    /// Layout of the console output.
    pub format: OutputFormat,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            list_tests: false,
            color: ColorConfig::Auto,
            format: OutputFormat::Pretty,
        }
    }
}

impl Args {
    /// Parse command line arguments.
    pub fn from_env() -> Result<Self, ExitStatus> {
        Self::parse_from(std::env::args())
    }

    /// Parse the given arguments. The first item is the program name.
    pub fn parse_from<I>(args: I) -> Result<Self, ExitStatus>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let parser = Parser::new(&args[..]);
        match parser.parse() {
            Ok(Some(args)) => Ok(args),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ColorConfig {
    #[allow(missing_docs)]
    Auto,
    #[allow(missing_docs)]
    Always,
    #[allow(missing_docs)]
    Never,
}

impl FromStr for ColorConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(anyhow::anyhow!(
                "argument for --color must be auto, always, or never (was {})",
                v
            )),
        }
    }
}

/// The layout of the console output.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// One line per entry.
    Pretty,
    /// A status mark, the ordinal and the description per entry.
    Terse,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(OutputFormat::Pretty),
            "terse" => Ok(OutputFormat::Terse),
            v => Err(anyhow::anyhow!(
                "argument for --format must be pretty or terse (was {})",
                v
            )),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List all tests without running them");
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );
        opts.optopt(
            "",
            "format",
            "Configure formatting of output:
                pretty = print one line per test (default);
                terse  = print a status mark before each test;",
            "pretty|terse",
        );
        opts.optflag("q", "quiet", "Use the terse output format");

        // The following options and flags are reserved for keeping the compatibility with
        // the built-in test harness.
        opts.optflag("", "ignored", "");
        opts.optflag("", "exact", "");
        opts.optflag("", "test", "");
        opts.optflag("", "bench", "");
        opts.optflag("", "nocapture", "");
        opts.optopt("", "logfile", "", "PATH");
        opts.optopt("", "test-threads", "", "n_threads");
        opts.optopt("Z", "", "", "unstable-options");

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.get(0).map_or("testbench", String::as_str);
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS]", progname);
        eprintln!(
            r#"{usage}
Every registered test runs on every invocation, in registration order."#,
            usage = self.opts.usage(&message)
        );
    }

    fn parse(&self) -> anyhow::Result<Option<Args>> {
        let args = &self.args[..];

        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        if let Some(free) = matches.free.get(0) {
            anyhow::bail!("unexpected argument: {} (tests cannot be filtered)", free);
        }

        let list_tests = matches.opt_present("list");
        let color = matches.opt_get("color")?.unwrap_or(ColorConfig::Auto);
        let format = if matches.opt_present("q") {
            OutputFormat::Terse
        } else {
            matches.opt_get("format")?.unwrap_or(OutputFormat::Pretty)
        };

        Ok(Some(Args {
            list_tests,
            color,
            format,
        }))
    }
}
