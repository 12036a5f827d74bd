use crate::shell::WrapperShell;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Jump to your development projects via intuitive search
///
/// Scans the configured roots for VCS-managed project directories, filters
/// them by PATTERN, and records the chosen project for the `dj` shell
/// wrapper (see `--init`) to jump to.
#[derive(Parser, Debug)]
#[command(name = "devjump")]
#[command(author, version, about)]
pub struct Cli {
    /// Project search pattern (regular expression); matches everything
    /// when omitted
    #[arg(value_name = "PATTERN", default_value = "")]
    pub pattern: String,

    /// List matching projects without committing a selection
    #[arg(short, long)]
    pub list: bool,

    /// Reuse the previously committed selection without scanning
    #[arg(short, long)]
    pub previous: bool,

    /// Color listed git projects by working-tree status
    #[arg(short, long)]
    pub status: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the shell wrapper function and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub init: Option<WrapperShell>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
