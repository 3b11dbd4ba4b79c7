use crate::error::{Error, Result};

/// Smallest accepted indentation unit, in spaces.
pub const MIN_INDENT: usize = 2;
/// Largest accepted indentation unit, in spaces.
pub const MAX_INDENT: usize = 256;

pub const DEFAULT_INDENT: usize = 2;
pub const DEFAULT_DELIMITER: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Width of one indentation unit in spaces (default: 2, minimum: 2)
    pub indent: usize,
    /// Separator placed between key segments of a flattened path (default: `/`)
    pub delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Options {
    /// Build options and validate them in one step.
    pub fn new(indent: usize, delimiter: impl Into<String>) -> Result<Self> {
        let options = Self {
            indent,
            delimiter: delimiter.into(),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent < MIN_INDENT {
            return Err(Error::config(format!(
                "indent must be >= {MIN_INDENT}, got {}",
                self.indent
            )));
        }
        if self.indent > MAX_INDENT {
            return Err(Error::config(format!(
                "indent must be <= {MAX_INDENT}, got {}",
                self.indent
            )));
        }
        if self.delimiter.is_empty() {
            return Err(Error::config("delimiter must not be empty"));
        }
        Ok(())
    }

    /// The indentation unit as the literal run of spaces searched for in key prefixes.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }
}
