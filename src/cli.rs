//! Command-line interface definition for w-extract
//!
//! Provides argument parsing and mode resolution.

use crate::pattern::Mode;
use clap::Parser;
use std::path::PathBuf;

/// Build custom wordlists from a list of URLs
///
/// Extracts path segments (default), parameter names, or parameter values
/// to aid in web discovery and exploitation efforts.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "w-extract",
    author = "m0h1nd4",
    version,
    about = "Build custom wordlists from path segments, parameter names, or values found in URLs",
    long_about = r#"
Build custom wordlists by extracting path segments (default behavior),
parameter names, or parameter values from a list of URLs.

EXAMPLES:
    # Path segments, sorted and unique
    w-extract urls.txt

    # Parameter names
    w-extract urls.txt -p

    # Parameter values, URL-decoded first
    w-extract urls.txt -v -u

    # Everything, with occurrence counts, written to a file
    w-extract urls.txt -A -c -o counts.txt

MODE PRIORITY:
    -p wins over -v, -v wins over -A, and without any of them path segments
    are extracted.
"#
)]
pub struct Args {
    /// File containing the list of URLs
    #[arg(value_name = "FILEPATH")]
    pub filepath: PathBuf,

    /// Extract parameter names
    #[arg(short = 'p', long)]
    pub parameters: bool,

    /// Extract parameter values
    #[arg(short = 'v', long)]
    pub values: bool,

    /// Extract path segments, parameter names, and parameter values
    #[arg(short = 'A', long)]
    pub all: bool,

    /// Count occurrences of extracted items
    #[arg(short = 'c', long)]
    pub count: bool,

    /// URL-decode the input before extracting
    #[arg(short = 'u', long)]
    pub urldecode: bool,

    /// Write output to this file instead of stdout (overwritten)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Print a run summary to stderr
    #[arg(long)]
    pub stats: bool,

    /// Quiet mode - errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the extraction mode: parameters > values > all > path
    pub fn mode(&self) -> Mode {
        if self.parameters {
            Mode::ParamName
        } else if self.values {
            Mode::ParamValue
        } else if self.all {
            Mode::All
        } else {
            Mode::Path
        }
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
