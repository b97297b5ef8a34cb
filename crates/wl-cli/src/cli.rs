//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Daily time report from a plain-text work log.
///
/// Reads dated headings, timed events and their notes, then prints the time
/// worked per finished day and in total.
#[derive(Debug, Parser)]
#[command(name = "wl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// The work log to read. Defaults to `log_path` from the config.
    pub log: Option<PathBuf>,
}
