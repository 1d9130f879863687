// logmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the logmask application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "logmask",
    author = "Logmask Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask sensitive data in log files",
    long_about = "Logmask applies an ordered list of regular-expression rules to log files or whole directory trees, replacing emails, tokens, passwords and other sensitive substrings with placeholders. Masked copies mirror the input layout under an output directory, and every run produces a JSON report with per-rule match counts.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `logmask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks a file or a directory tree into an output directory.
    #[command(about = "Mask a file or a directory tree into an output directory.")]
    Mask(MaskCommand),

    /// Validates a rule file and lists every problem found.
    #[command(about = "Validate a rule file and list every problem found.")]
    Validate(ValidateCommand),

    /// Writes the built-in rule set to a file as a starting point.
    #[command(name = "init-rules", about = "Write the built-in rule set to a file as a starting point.")]
    InitRules(InitRulesCommand),
}

/// Where the rules for a `mask` run come from. Exactly one is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RulesArgs {
    /// Path to a JSON rule file.
    #[arg(long = "rules", short = 'r', value_name = "FILE", env = "LOGMASK_RULES", help = "Path to a JSON rule file.")]
    pub rules: Option<PathBuf>,

    /// Use the built-in rule set.
    #[arg(long = "default-rules", help = "Use the built-in rule set instead of a rule file.")]
    pub default_rules: bool,
}

/// Arguments for the `mask` command.
#[derive(Args, Debug)]
pub struct MaskCommand {
    /// A single file or a directory to mask.
    #[arg(long, short = 'i', value_name = "PATH", help = "Input file or directory.")]
    pub input: PathBuf,

    /// Root directory for masked files and the run report.
    #[arg(long, short = 'o', value_name = "DIR", help = "Output directory for masked files and the run report.")]
    pub output: PathBuf,

    #[command(flatten)]
    pub rules: RulesArgs,

    /// Inserted before each output file's extension.
    #[arg(long, short = 's', value_name = "SUFFIX", default_value = "_masked", help = "Suffix inserted before each output file's extension (empty for none).")]
    pub suffix: String,

    /// Count matches without writing masked files.
    #[arg(long = "dry-run", short = 'n', help = "Count matches without writing masked files. The run report is still written.")]
    pub dry_run: bool,

    /// Skip the JSON run report.
    #[arg(long = "no-report", help = "Do not write the JSON run report.")]
    pub no_report: bool,

    /// Suppress the per-rule summary table.
    #[arg(long = "no-summary", help = "Suppress the per-rule summary table.")]
    pub no_summary: bool,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// The rule file to check.
    #[arg(value_name = "FILE")]
    pub rules: PathBuf,
}

/// Arguments for the `init-rules` command.
#[derive(Args, Debug)]
pub struct InitRulesCommand {
    /// Destination of the rule file.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long, short = 'f', help = "Overwrite the file if it already exists.")]
    pub force: bool,
}
