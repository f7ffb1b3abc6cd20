//! Error types for the extraction pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure aborts the run; nothing is recovered locally.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Cannot read input file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input file {path:?} is not valid UTF-8: {reason}")]
    Malformed { path: PathBuf, reason: &'static str },

    #[error("Invalid extraction pattern")]
    Pattern(#[from] regex::Error),

    #[error("Cannot write output to {destination}")]
    Write {
        destination: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
