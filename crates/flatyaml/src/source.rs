//! Line sources: files and readers turned into a stream of text lines.
//!
//! Plain sources are read as UTF-8; invalid bytes surface as an
//! [`io::ErrorKind::InvalidData`] read error. With the `encoding` feature a
//! source can instead be transcoded from any WHATWG-labelled encoding, in
//! which case malformed sequences become U+FFFD instead of failing.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

#[cfg(feature = "encoding")]
use encoding_rs::Encoding;
#[cfg(feature = "encoding")]
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};

/// Open `path` for reading, naming the path in any error.
pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path).map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))
}

/// Lines of a UTF-8 reader. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn lines<R: Read>(reader: R) -> Lines<BufReader<R>> {
    Lines {
        reader: BufReader::new(reader),
        skip_lf: false,
        done: false,
    }
}

/// Iterator returned by [`lines`].
///
/// Stops after the first read error.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    /// The previous line ended in `\r`; a `\n` right after it belongs to that terminator.
    skip_lf: bool,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let mut seen = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                if !seen {
                    return Ok(None);
                }
                break;
            }
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            seen = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    break;
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
        String::from_utf8(buf)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Lines of in-memory text, with the same terminators as [`lines`].
pub fn split_lines(input: &str) -> StrLines<'_> {
    StrLines { rest: input }
}

#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for StrLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let line = &self.rest[..pos];
                let terminator = if self.rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Resolve an encoding label such as `"utf-8"`, `"latin1"` or `"Shift_JIS"`.
#[cfg(feature = "encoding")]
pub fn lookup_encoding(label: &str) -> io::Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported encoding label: {label:?}"),
        )
    })
}

/// Wrap `reader` so it yields UTF-8 transcoded from `label`.
///
/// A leading BOM is stripped. The label stays authoritative even when a BOM
/// for a different encoding is present.
#[cfg(feature = "encoding")]
pub fn transcode<R: Read>(reader: R, label: &str) -> io::Result<DecodeReaderBytes<R, Vec<u8>>> {
    let encoding = lookup_encoding(label)?;
    Ok(DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding))
        .strip_bom(true)
        .build(reader))
}

/// Lines of `reader` decoded from the encoding named by `label`.
#[cfg(feature = "encoding")]
pub fn lines_with_encoding<R: Read>(
    reader: R,
    label: &str,
) -> io::Result<Lines<BufReader<DecodeReaderBytes<R, Vec<u8>>>>> {
    Ok(lines(transcode(reader, label)?))
}
