//! CLI argument definitions for the roster tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "School sign-up roster tools",
    long_about = "Split raw sign-up form exports into normalized rosters,\n\
                  merge student preferences, assign students to classes, and\n\
                  render per-class and per-teacher Markdown lists."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a raw sign-up form export into adult and student rosters.
    SplitForm(SplitFormArgs),

    /// Merge the student roster with sign-up preferences by full name.
    MergePreferences(MergePreferencesArgs),

    /// Assign students to classes from their stated interests.
    Assign(AssignArgs),

    /// Render the per-class and per-teacher Markdown lists.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct SplitFormArgs {
    /// Path to the raw sign-up form export.
    #[arg(value_name = "FORM_CSV")]
    pub form: PathBuf,

    /// Directory for the timestamped adults and students files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct MergePreferencesArgs {
    /// Student roster CSV (first_name, last_name, ...).
    #[arg(
        long = "roster",
        value_name = "PATH",
        default_value = "student_list.csv"
    )]
    pub roster: PathBuf,

    /// Student preferences CSV carrying a full_name column.
    #[arg(
        long = "preferences",
        value_name = "PATH",
        default_value = "student_preferences.csv"
    )]
    pub preferences: PathBuf,

    /// Directory for the timestamped merged and unmatched files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct AssignArgs {
    /// Student roster CSV (first_name, last_name, grade, teacher, stream).
    #[arg(
        long = "roster",
        value_name = "PATH",
        default_value = "student_list.csv"
    )]
    pub roster: PathBuf,

    /// Student preferences CSV with student_interest_* columns.
    #[arg(
        long = "preferences",
        value_name = "PATH",
        default_value = "student_preferences.csv"
    )]
    pub preferences: PathBuf,

    /// Class catalog CSV.
    #[arg(
        long = "catalog",
        value_name = "PATH",
        default_value = "class_catalog.csv"
    )]
    pub catalog: PathBuf,

    /// Session to assign.
    #[arg(long = "session", default_value_t = 1)]
    pub session: i32,

    /// RNG seed for reproducible shuffles; omitted means a fresh shuffle.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory for final_assignments.csv.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Class catalog CSV.
    #[arg(
        long = "catalog",
        value_name = "PATH",
        default_value = "class_catalog.csv"
    )]
    pub catalog: PathBuf,

    /// Adult class assignment CSV.
    #[arg(
        long = "adults",
        value_name = "PATH",
        default_value = "adult_class_assignments.csv"
    )]
    pub adults: PathBuf,

    /// Final student assignment CSV.
    #[arg(
        long = "assignments",
        value_name = "PATH",
        default_value = "final_assignments.csv"
    )]
    pub assignments: PathBuf,

    /// Directory for class_list.md and teacher_list.md.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
