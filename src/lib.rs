//! # w-extract
//!
//! Builds wordlists from a list of URLs for web discovery.
//!
//! ## Features
//!
//! - **Path segments**: `/users/` yields `users` (default)
//! - **Parameter names**: `?id=5&name=bob` yields `id`, `name`
//! - **Parameter values**: `?id=5&name=bob` yields `5`, `bob`
//! - **Counting**: occurrence counts instead of a unique sorted list
//! - **URL decoding**: percent-escapes are decoded before extraction
//!
//! ## Usage
//!
//! ```bash
//! # Path segments
//! w-extract urls.txt
//!
//! # Parameter names with counts, written to a file
//! w-extract urls.txt -p -c -o names.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use w_extract::aggregate::build_wordlist;
//! use w_extract::pattern::{Extractor, Mode};
//!
//! let extractor = Extractor::new(Mode::ParamName).unwrap();
//! let matches = extractor.extract("/users/?name=bob&id=5");
//! assert_eq!(build_wordlist(&matches), vec!["id", "name"]);
//! ```

pub mod aggregate;
pub mod cli;
pub mod decode;
pub mod error;
pub mod loader;
pub mod output;
pub mod pattern;
pub mod processor;
pub mod report;

pub use cli::Args;
pub use error::ExtractError;
pub use pattern::{Extractor, Mode};
pub use processor::{ExtractConfig, Processor};
