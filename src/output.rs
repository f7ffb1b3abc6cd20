//! Output management module
//!
//! Writes the wordlist or frequency table to stdout or a file with buffering.

use crate::aggregate::FrequencyTable;
use crate::error::{ExtractError, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Default buffer size for writing (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Where results go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Sink {
    #[default]
    Stdout,
    /// Created or truncated
    File(PathBuf),
}

impl Sink {
    pub fn from_outfile(outfile: Option<PathBuf>) -> Self {
        outfile.map_or(Self::Stdout, Self::File)
    }

    /// Open a buffered writer for this sink
    pub fn open(&self) -> Result<OutputWriter<Box<dyn Write>>> {
        let inner: Box<dyn Write> = match self {
            Self::Stdout => Box::new(io::stdout().lock()),
            Self::File(path) => {
                let file: File = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|source| self.write_error(source))?;
                Box::new(file)
            }
        };

        Ok(OutputWriter::new(inner, self.to_string()))
    }

    fn write_error(&self, source: io::Error) -> ExtractError {
        ExtractError::Write {
            destination: self.to_string(),
            source,
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Line writer with buffering
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    destination: String,
    lines_written: u64,
    bytes_written: u64,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(inner: W, destination: String) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, inner),
            destination,
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write one `<word>` line per entry
    pub fn write_wordlist(&mut self, words: &[&str]) -> Result<()> {
        for word in words {
            self.write_line(word)?;
        }
        Ok(())
    }

    /// Write one `<count> <word>` line per entry
    pub fn write_counts(&mut self, table: &FrequencyTable<'_>) -> Result<()> {
        for (word, count) in table.iter() {
            self.write_line(&format!("{} {}", count, word))?;
        }
        Ok(())
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| self.error(e))?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to the destination
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.error(e))
    }

    /// Flush and give back the underlying writer
    pub fn finish(self) -> Result<W> {
        let destination = self.destination;
        self.writer.into_inner().map_err(|e| ExtractError::Write {
            destination,
            source: e.into_error(),
        })
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn error(&self, source: io::Error) -> ExtractError {
        ExtractError::Write {
            destination: self.destination.clone(),
            source,
        }
    }
}
