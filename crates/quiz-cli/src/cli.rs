//! CLI argument definitions for the Quiz DSL toolchain.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "quiz-dsl",
    version,
    about = "Quiz DSL toolchain - validate, convert and grade quiz documents",
    long_about = "Work with Quiz DSL documents.\n\n\
                  Validates documents against the quiz schema, converts between\n\
                  the DSL and the block-editor representation, and grades answer\n\
                  submissions into result documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a quiz document and report schema violations.
    Validate(ValidateArgs),

    /// Convert between the DSL and the editor block representation.
    Convert(ConvertArgs),

    /// Grade an answer submission against a quiz document.
    Grade(GradeArgs),

    /// List every validation error code with its message.
    Codes,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the quiz document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reject top-level JSON that is not an object or array.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the input document (quiz DSL or editor blocks, per --to).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Conversion target.
    #[arg(long = "to", value_enum)]
    pub to: ConvertTargetArg,

    /// Pretty-print the output JSON.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Write the output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GradeArgs {
    /// Path to the quiz document (JSON).
    #[arg(value_name = "QUIZ")]
    pub quiz: PathBuf,

    /// Path to the answers file, a JSON object keyed by question id.
    #[arg(long = "answers", value_name = "PATH")]
    pub answers: PathBuf,

    /// Write the result document to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the result JSON.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConvertTargetArg {
    /// Quiz DSL document to editor blocks.
    Blocks,
    /// Editor blocks to a quiz DSL document.
    Dsl,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
