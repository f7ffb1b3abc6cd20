//! Core processing engine
//!
//! Runs the pipeline once: load, optionally decode, extract, aggregate, write.
//! The sink is opened only after aggregation, so a failing stage writes nothing.

use crate::aggregate::{build_wordlist, count_words};
use crate::cli::Args;
use crate::decode::percent_decode;
use crate::error::Result;
use crate::loader::read_input;
use crate::output::{OutputWriter, Sink};
use crate::pattern::{Extractor, Mode};
use crate::report::{print_success, RunStats};

use bytesize::ByteSize;
use std::io::Write;
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub mode: Mode,
    pub count: bool,
    pub url_decode: bool,
    pub sink: Sink,
    pub quiet: bool,
    pub stats: bool,
}

impl ExtractConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.filepath.clone(),
            mode: args.mode(),
            count: args.count,
            url_decode: args.urldecode,
            sink: Sink::from_outfile(args.outfile.clone()),
            quiet: args.quiet,
            stats: args.stats,
        }
    }
}

/// Main processor
pub struct Processor {
    config: ExtractConfig,
    extractor: Extractor,
}

impl Processor {
    pub fn new(config: ExtractConfig) -> Result<Self> {
        let extractor = Extractor::new(config.mode)?;
        Ok(Self { config, extractor })
    }

    /// Run the pipeline against the configured input and sink
    pub fn run(&self) -> Result<RunStats> {
        let text = read_input(&self.config.input)?;
        let stats = self.process(&text, || self.config.sink.open())?;

        if let Sink::File(path) = &self.config.sink {
            if !self.config.quiet {
                print_success(&format!("Output written to: {:?}", path));
            }
        }
        if self.config.stats && !self.config.quiet {
            stats.print_summary();
        }

        Ok(stats)
    }

    /// Run every stage after loading against `text`.
    ///
    /// `open` is called once the result is complete.
    pub fn process<W, F>(&self, text: &str, open: F) -> Result<RunStats>
    where
        W: Write,
        F: FnOnce() -> Result<OutputWriter<W>>,
    {
        let mut stats = RunStats::new();
        stats.record_input(text);

        let text = if self.config.url_decode {
            log::debug!("Percent-decoding input");
            percent_decode(text)
        } else {
            text.into()
        };

        let mut matches = Vec::new();
        for (category, captures) in self.extractor.extract_by_category(&text) {
            log::debug!("Found {} {}", captures.len(), category.label());
            stats.record_matches(category, &captures);
            matches.extend(captures);
        }

        let mut writer = if self.config.count {
            let table = count_words(&matches);
            let mut writer = open()?;
            writer.write_counts(&table)?;
            writer
        } else {
            let words = build_wordlist(&matches);
            let mut writer = open()?;
            writer.write_wordlist(&words)?;
            writer
        };

        writer.flush()?;
        stats.entries_written = writer.lines_written();
        log::debug!(
            "Wrote {} entries ({}) to {}",
            stats.entries_written,
            ByteSize(writer.bytes_written()),
            self.config.sink
        );
        writer.finish()?;

        Ok(stats)
    }
}
