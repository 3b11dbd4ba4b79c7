use std::convert::Infallible;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::decode::classifier::{LineKind, classify};
use crate::decode::path::{PathTracker, depth_of};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::source;
use crate::value::{Document, YamlValue};

/// Flattening decoder.
///
/// Options are validated once, at construction. Each decode borrows the
/// decoder mutably because the path tracker is rewritten line by line; run
/// independent decoders for parallel work.
#[derive(Debug, Clone)]
pub struct Decoder {
    options: Options,
    unit: String,
    tracker: PathTracker,
}

#[derive(Debug)]
enum State {
    Idle,
    Collecting { path: String, items: Vec<String> },
}

/// Per-decode working set.
#[derive(Debug)]
struct Pass {
    document: Document,
    current_path: String,
    state: State,
}

impl Pass {
    fn new() -> Self {
        Self {
            document: Document::new(),
            current_path: String::new(),
            state: State::Idle,
        }
    }

    fn push_item(&mut self, item: &str) {
        if let State::Collecting { items, .. } = &mut self.state {
            items.push(item.to_string());
        } else {
            self.state = State::Collecting {
                path: self.current_path.clone(),
                items: vec![item.to_string()],
            };
        }
    }

    /// Move a pending, non-empty sequence into the document.
    fn commit(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Idle);
        if let State::Collecting { path, items } = state {
            if !items.is_empty() {
                debug!(path = %path, items = items.len(), "committing sequence");
                self.document.insert(path, YamlValue::List(items));
            }
        }
    }

    fn finish(mut self) -> Document {
        self.commit();
        self.document
    }
}

impl Default for Decoder {
    fn default() -> Self {
        let options = Options::default();
        Self {
            unit: options.indent_unit(),
            tracker: PathTracker::default(),
            options,
        }
    }
}

impl Decoder {
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        let tracker = PathTracker::new(options.delimiter.clone())?;
        Ok(Self {
            unit: options.indent_unit(),
            tracker,
            options,
        })
    }

    /// Default delimiter, custom indentation width.
    pub fn with_indent(indent: usize) -> Result<Self> {
        Self::new(Options::default().with_indent(indent))
    }

    /// Default indentation width, custom delimiter.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self> {
        Self::new(Options::default().with_delimiter(delimiter))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Decode lines that are already in memory. Never fails.
    pub fn decode_lines<I, S>(&mut self, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let result: core::result::Result<Document, Infallible> =
            self.run(lines.into_iter().map(Ok));
        match result {
            Ok(document) => document,
            Err(never) => match never {},
        }
    }

    pub fn decode_str(&mut self, input: &str) -> Document {
        self.decode_lines(source::split_lines(input))
    }

    /// Decode lines from a fallible source. The first read error aborts the
    /// decode and is returned as [`Error::SourceUnavailable`].
    pub fn decode<I, S>(&mut self, lines: I) -> Result<Document>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        self.run(lines).map_err(Error::from)
    }

    pub fn decode_reader<R: Read>(&mut self, reader: R) -> Result<Document> {
        self.decode(source::lines(reader))
    }

    pub fn decode_file(&mut self, path: impl AsRef<Path>) -> Result<Document> {
        let file = source::open_file(path.as_ref())?;
        self.decode_reader(file)
    }

    #[cfg(feature = "encoding")]
    pub fn decode_reader_with_encoding<R: Read>(
        &mut self,
        reader: R,
        encoding: &str,
    ) -> Result<Document> {
        let lines = source::lines_with_encoding(reader, encoding)?;
        self.decode(lines)
    }

    #[cfg(feature = "encoding")]
    pub fn decode_file_with_encoding(
        &mut self,
        path: impl AsRef<Path>,
        encoding: &str,
    ) -> Result<Document> {
        let file = source::open_file(path.as_ref())?;
        self.decode_reader_with_encoding(file, encoding)
    }

    /// Like [`Decoder::decode`], but any failure yields an empty document.
    pub fn decode_or_empty<I, S>(&mut self, lines: I) -> Document
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        or_empty(self.decode(lines))
    }

    pub fn decode_reader_or_empty<R: Read>(&mut self, reader: R) -> Document {
        or_empty(self.decode_reader(reader))
    }

    pub fn decode_file_or_empty(&mut self, path: impl AsRef<Path>) -> Document {
        or_empty(self.decode_file(path))
    }

    #[cfg(feature = "encoding")]
    pub fn decode_reader_with_encoding_or_empty<R: Read>(
        &mut self,
        reader: R,
        encoding: &str,
    ) -> Document {
        or_empty(self.decode_reader_with_encoding(reader, encoding))
    }

    #[cfg(feature = "encoding")]
    pub fn decode_file_with_encoding_or_empty(
        &mut self,
        path: impl AsRef<Path>,
        encoding: &str,
    ) -> Document {
        or_empty(self.decode_file_with_encoding(path, encoding))
    }

    fn run<I, S, E>(&mut self, lines: I) -> core::result::Result<Document, E>
    where
        I: IntoIterator<Item = core::result::Result<S, E>>,
        S: AsRef<str>,
    {
        self.tracker.clear();
        let mut pass = Pass::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.tracker.clear();
                    return Err(e);
                }
            };
            self.step(&mut pass, idx + 1, line.as_ref());
        }
        let document = pass.finish();
        self.tracker.clear();
        debug!(entries = document.len(), "decoded document");
        Ok(document)
    }

    fn step(&mut self, pass: &mut Pass, line_no: usize, line: &str) {
        match classify(line) {
            LineKind::Skip => {}
            LineKind::SequenceItem(item) => {
                trace!(line = line_no, item, "sequence item");
                pass.push_item(item);
            }
            LineKind::KeyLine { prefix, value } => {
                pass.commit();
                let depth = depth_of(prefix, &self.unit);
                pass.current_path = self.tracker.create_key_path(depth, prefix);
                trace!(line = line_no, depth, path = %pass.current_path, "key line");
                if let Some(value) = value {
                    pass.document.insert(pass.current_path.clone(), value.into_owned());
                }
            }
        }
    }
}

fn or_empty(result: Result<Document>) -> Document {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "decode failed, returning empty document");
        Document::new()
    })
}
