//! Indentation depth and key path tracking.
use crate::decode::classifier::trim_control;
use crate::error::{Error, Result};
use crate::options::DEFAULT_DELIMITER;

/// Depth of a key line from its raw prefix.
///
/// This is positional, not a count of units: with `p` the UTF-16 offset of
/// the last `unit` occurrence in `prefix`, depth is `p / 2 + 1`, or 0 when the
/// unit does not occur. Keys whose own text contains `unit` and units wider
/// than two spaces both produce depths that do not match visual nesting.
/// The resulting paths are part of the output format.
pub fn depth_of(prefix: &str, unit: &str) -> usize {
    match prefix.rfind(unit) {
        Some(byte_pos) => prefix[..byte_pos].encode_utf16().count() / 2 + 1,
        None => 0,
    }
}

/// Active key segments, one per depth.
///
/// Owned by a single decoder and cleared around every decode.
#[derive(Debug, Clone)]
pub struct PathTracker {
    segments: Vec<String>,
    delimiter: String,
}

impl Default for PathTracker {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl PathTracker {
    pub fn new(delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(Error::config("delimiter must not be empty"));
        }
        Ok(Self {
            segments: Vec::new(),
            delimiter,
        })
    }

    /// Record `key` at `depth` and return the joined path.
    ///
    /// A depth inside the current chain replaces that segment and drops
    /// everything below it. Any depth at or past the end appends one segment;
    /// skipped depths are not padded.
    pub fn create_key_path(&mut self, depth: usize, key: &str) -> String {
        let key = trim_control(key);
        if depth < self.segments.len() {
            self.segments.truncate(depth + 1);
            key.clone_into(&mut self.segments[depth]);
        } else {
            self.segments.push(key.to_string());
        }
        self.segments.join(&self.delimiter)
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}
