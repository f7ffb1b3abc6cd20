//! Extraction patterns and the extractor
//!
//! Each category of token is pulled out of the input by one fixed regex.
//! The capture of group 1 is the extracted token.

use crate::error::Result;
use regex::Regex;
use std::fmt;

/// Fixed extraction patterns
pub mod patterns {
    /// Leading slashes, a word run, optional trailing slashes: `/users/` -> `users`
    pub const PATH: &str = r"/+([\w\-_]+)/*";

    /// A lone `?`, or a word run right before `=`: `?id=5&name=x` -> ``, `id`, `name`
    pub const PARAM_NAME: &str = r"[?]+|[&]*([\w\-_]+)=";

    /// A word run right after `=`: `id=5` -> `5`
    pub const PARAM_VALUE: &str = r"=+([\w\-_]+)";
}

/// Kind of token a single pattern extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Path,
    ParamName,
    ParamValue,
}

impl Category {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Path => patterns::PATH,
            Self::ParamName => patterns::PARAM_NAME,
            Self::ParamValue => patterns::PARAM_VALUE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Path => "path segments",
            Self::ParamName => "parameter names",
            Self::ParamValue => "parameter values",
        }
    }
}

/// What to extract for a run, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Path,
    ParamName,
    ParamValue,
    /// Path segments, then parameter names, then parameter values
    All,
}

impl Mode {
    /// Categories applied by this mode, in output order
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Path => &[Category::Path],
            Self::ParamName => &[Category::ParamName],
            Self::ParamValue => &[Category::ParamValue],
            Self::All => &[Category::Path, Category::ParamName, Category::ParamValue],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Path => "path",
            Self::ParamName => "param_name",
            Self::ParamValue => "param_value",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

/// Compiled patterns for one mode
#[derive(Debug)]
pub struct Extractor {
    regexes: Vec<(Category, Regex)>,
}

impl Extractor {
    pub fn new(mode: Mode) -> Result<Self> {
        let regexes = mode
            .categories()
            .iter()
            .map(|&category| Ok((category, Regex::new(category.pattern())?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regexes })
    }

    /// All captures for every category, concatenated in category order.
    ///
    /// A match whose capture group did not participate yields `""`.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regexes
            .iter()
            .flat_map(|(_, regex)| captures(regex, text))
            .collect()
    }

    /// Captures grouped by category, in category order
    pub fn extract_by_category<'t>(&self, text: &'t str) -> Vec<(Category, Vec<&'t str>)> {
        self.regexes
            .iter()
            .map(|(category, regex)| (*category, captures(regex, text)))
            .collect()
    }
}

fn captures<'t>(regex: &Regex, text: &'t str) -> Vec<&'t str> {
    regex
        .captures_iter(text)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .collect()
}
