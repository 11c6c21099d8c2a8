//! Command-line surface shared by the `newline` and `trailingspace` binaries.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::ProcessingOptions;
use crate::error::{WhitespaceError, WhitespaceResult};
use crate::transform::{FileTransform, NewlineNormalizer, TrailingWhitespaceStripper};
use crate::walker;

/// Version injected at build time, `dev` otherwise
pub const VERSION: &str = match option_env!("WHITESPACE_TOOLS_VERSION") {
    Some(version) => version,
    None => "dev",
};

/// Commit injected at build time, `unknown` otherwise
pub const COMMIT: &str = match option_env!("WHITESPACE_TOOLS_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[arg(
        short = 'i',
        long = "include-hidden",
        visible_alias = "hidden",
        short_alias = 'a',
        help = "Process files in hidden directories recursively"
    )]
    pub include_hidden: bool,

    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "PATTERN",
        action = ArgAction::Append,
        help = "Exclude files or directories matching a glob pattern (repeatable)"
    )]
    pub exclude: Vec<String>,

    #[arg(short = 'v', long = "version", help = "Print version information and exit")]
    pub version: bool,

    #[arg(
        value_name = "target",
        help = "File or directory to process (default: current directory)"
    )]
    pub targets: Vec<PathBuf>,
}

impl Cli {
    /// The single target, defaulting to the current directory
    pub fn target(&self) -> WhitespaceResult<PathBuf> {
        match self.targets.as_slice() {
            [] => Ok(PathBuf::from(".")),
            [target] => Ok(target.clone()),
            _ => Err(WhitespaceError::Usage("too many arguments".to_string())),
        }
    }

    pub fn options(&self) -> ProcessingOptions {
        ProcessingOptions::new()
            .include_hidden(self.include_hidden)
            .excludes(self.exclude.iter().cloned())
    }
}

/// The two programs built on the shared core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Newline,
    Trailingspace,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Newline => "newline",
            Tool::Trailingspace => "trailingspace",
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Tool::Newline => "Ensures files end with exactly one newline.",
            Tool::Trailingspace => "Removes trailing whitespace from end of lines.",
        }
    }

    pub fn transform(self) -> &'static dyn FileTransform {
        match self {
            Tool::Newline => &NewlineNormalizer,
            Tool::Trailingspace => &TrailingWhitespaceStripper,
        }
    }

    pub fn version_line(self) -> String {
        format!("{} {} (commit: {})", self.name(), VERSION, COMMIT)
    }

    fn after_help(self) -> String {
        let name = self.name();
        let single = match self {
            Tool::Newline => "Rewrites the file to end with exactly one newline",
            Tool::Trailingspace => "Strips trailing spaces and tabs from every line",
        };

        format!(
            "BEHAVIOR:\n  \
             If target is a single file: {single}\n  \
             If target is a directory: Processes all text files recursively\n\n  \
             Hidden directories are skipped by default unless:\n  \
             - The target directory itself is hidden, OR\n  \
             - The --include-hidden flag is used\n\n\
             EXAMPLES:\n  \
             {name} file.txt            # Process a single file\n  \
             {name} src/                # Process all files in src/ (skip hidden dirs)\n  \
             {name} --include-hidden .  # Process all files including hidden dirs\n  \
             {name} -e '*.log' -e build .  # Skip log files and build directories"
        )
    }

    fn command(self) -> clap::Command {
        Cli::command()
            .name(self.name())
            .bin_name(self.name())
            .about(self.about())
            .after_help(self.after_help())
    }

    /// Parse arguments from the process environment
    pub fn parse(self) -> Result<Cli, clap::Error> {
        self.parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(self, args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        Cli::from_arg_matches(&matches)
    }

    /// Execute parsed arguments: print the version or walk the target
    pub fn execute(self, cli: &Cli) -> WhitespaceResult<()> {
        if cli.version {
            println!("{}", self.version_line());
            return Ok(());
        }

        let target = cli.target()?;
        walker::walk(&target, &cli.options(), self.transform())
    }

    /// Entry point for the binaries
    pub fn run(self) -> ExitCode {
        init_tracing();

        let cli = match self.parse() {
            Ok(cli) => cli,
            Err(err) => return self.report_parse_error(err),
        };

        match self.execute(&cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                display_error(&err);
                if matches!(err, WhitespaceError::Usage(_)) {
                    eprintln!("\n{}", self.command().render_usage());
                }
                ExitCode::FAILURE
            }
        }
    }

    fn report_parse_error(self, err: clap::Error) -> ExitCode {
        // Help output is not a failure
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }
}

/// Print a top-level error as `Error: <message>`
pub fn display_error(err: &WhitespaceError) {
    eprintln!("{} {}", error_label(std::io::stderr().is_terminal()), err);
}

/// Colour only when the label lands on a terminal
fn error_label(color: bool) -> String {
    if color {
        "Error:".bright_red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
