//! Status display module
//!
//! Styled status lines and the run summary. Everything here goes to stderr so
//! it never mixes with the wordlist on stdout.

use crate::pattern::Category;
use bytesize::ByteSize;
use colored::*;
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    eprintln!("  {} {}", "•".green(), text);
}

/// Statistics for one run
#[derive(Debug)]
pub struct RunStats {
    pub input_bytes: u64,
    pub input_lines: u64,
    /// Raw captures per category, empty ones included
    pub matches: Vec<(Category, u64)>,
    pub empty_captures: u64,
    pub entries_written: u64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            input_bytes: 0,
            input_lines: 0,
            matches: Vec::new(),
            empty_captures: 0,
            entries_written: 0,
            start_time: Instant::now(),
        }
    }

    /// Record size and line count of the loaded text
    pub fn record_input(&mut self, text: &str) {
        self.input_bytes = text.len() as u64;
        self.input_lines = memchr::memchr_iter(b'\n', text.as_bytes()).count() as u64;
        if !text.is_empty() && !text.ends_with('\n') {
            self.input_lines += 1;
        }
    }

    /// Record the captures of one category
    pub fn record_matches(&mut self, category: Category, captures: &[&str]) {
        self.matches.push((category, captures.len() as u64));
        self.empty_captures += captures.iter().filter(|c| c.is_empty()).count() as u64;
    }

    pub fn total_matches(&self) -> u64 {
        self.matches.iter().map(|(_, n)| n).sum()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                    EXTRACTION COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Input size:     ".green(), ByteSize(self.input_bytes));
        eprintln!("  {} {}", "Input lines:    ".green(), format_number(self.input_lines));
        eprintln!();

        for (category, count) in &self.matches {
            eprintln!("  {} {}", format!("{:<16}", category.label()).green(), format_number(*count));
        }
        eprintln!("  {} {}", "Empty captures: ".yellow(), format_number(self.empty_captures));
        eprintln!(
            "  {} {}",
            "Entries written:".green().bold(),
            format_number(self.entries_written).green().bold()
        );

        eprintln!();
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        eprintln!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 1 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }

    #[test]
    fn test_record_input() {
        let mut stats = RunStats::new();

        stats.record_input("/a/\n/b/\n/c/");
        assert_eq!(stats.input_lines, 3);
        assert_eq!(stats.input_bytes, 11);

        stats.record_input("/a/\n");
        assert_eq!(stats.input_lines, 1);

        stats.record_input("");
        assert_eq!(stats.input_lines, 0);
    }

    #[test]
    fn test_record_matches() {
        let mut stats = RunStats::new();

        stats.record_matches(Category::Path, &["users"]);
        stats.record_matches(Category::ParamName, &["", "id", "name"]);

        assert_eq!(stats.total_matches(), 4);
        assert_eq!(stats.empty_captures, 1);
    }
}
