//! Output options for the CSV writer.
//!
//! `Options` always carries every setting. Callers that only care about a
//! few of them build an `OptionOverrides` (or deserialize one from YAML) and
//! merge it onto the defaults.

use serde::{Deserialize, Serialize};

/// Fully resolved output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Emit a header line of column names before the records
    pub header: bool,
    /// Separator between values on a line
    pub delimiter: String,
    /// Wraps every value
    pub quote: String,
    /// Inserted before each quote found inside a value
    pub escape: String,
    /// Terminates every line
    pub new_line: String,
    /// Print progress and a summary to stderr
    pub logging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            header: true,
            delimiter: ",".to_string(),
            quote: "\"".to_string(),
            escape: "\"".to_string(),
            new_line: "\n".to_string(),
            logging: false,
        }
    }
}

impl Options {
    /// Defaults with `overrides` applied on top
    pub fn with_overrides(overrides: &OptionOverrides) -> Self {
        let mut options = Self::default();
        options.apply(overrides);
        options
    }

    /// Patch the fields that `overrides` sets, leaving the rest untouched
    pub fn apply(&mut self, overrides: &OptionOverrides) {
        if let Some(header) = overrides.header {
            self.header = header;
        }
        if let Some(ref delimiter) = overrides.delimiter {
            self.delimiter = delimiter.clone();
        }
        if let Some(ref quote) = overrides.quote {
            self.quote = quote.clone();
        }
        if let Some(ref escape) = overrides.escape {
            self.escape = escape.clone();
        }
        if let Some(ref new_line) = overrides.new_line {
            self.new_line = new_line.clone();
        }
        if let Some(logging) = overrides.logging {
            self.logging = logging;
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    pub fn with_escape(mut self, escape: impl Into<String>) -> Self {
        self.escape = escape.into();
        self
    }

    pub fn with_new_line(mut self, new_line: impl Into<String>) -> Self {
        self.new_line = new_line.into();
        self
    }

    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }
}

/// Partial options; unset fields fall back to whatever they are applied onto
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    pub header: Option<bool>,
    pub delimiter: Option<String>,
    pub quote: Option<String>,
    pub escape: Option<String>,
    pub new_line: Option<String>,
    pub logging: Option<bool>,
}

impl OptionOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn merge(mut self, other: OptionOverrides) -> Self {
        if other.header.is_some() {
            self.header = other.header;
        }
        if other.delimiter.is_some() {
            self.delimiter = other.delimiter;
        }
        if other.quote.is_some() {
            self.quote = other.quote;
        }
        if other.escape.is_some() {
            self.escape = other.escape;
        }
        if other.new_line.is_some() {
            self.new_line = other.new_line;
        }
        if other.logging.is_some() {
            self.logging = other.logging;
        }
        self
    }
}

/// Expand `\n`, `\r`, `\t` and `\\` escapes typed on a command line
pub fn unescape_separator(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
