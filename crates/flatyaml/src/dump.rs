//! Passthrough printer: the document's meaningful lines, comments and blank
//! lines removed, otherwise untouched.

use std::io::{Read, Write};
use std::path::Path;

use crate::decode::classifier::is_skipped;
use crate::error::Result;
use crate::source;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Join the kept lines with [`LINE_SEPARATOR`]; no trailing separator.
pub fn dump_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        let line = line.as_ref();
        if is_skipped(line) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(LINE_SEPARATOR);
        }
        out.push_str(line);
    }
    out
}

/// Stream the kept lines of `reader` to `writer`, ending with one separator.
pub fn dump_reader<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    write_kept(source::lines(reader), writer)
}

pub fn dump_file<W: Write>(path: impl AsRef<Path>, writer: W) -> Result<()> {
    let file = source::open_file(path.as_ref())?;
    dump_reader(file, writer)
}

#[cfg(feature = "encoding")]
pub fn dump_reader_with_encoding<R: Read, W: Write>(
    reader: R,
    encoding: &str,
    writer: W,
) -> Result<()> {
    write_kept(source::lines_with_encoding(reader, encoding)?, writer)
}

fn write_kept<I, W>(lines: I, mut writer: W) -> Result<()>
where
    I: IntoIterator<Item = std::io::Result<String>>,
    W: Write,
{
    let mut first = true;
    for line in lines {
        let line = line?;
        if is_skipped(&line) {
            continue;
        }
        if !first {
            writer.write_all(LINE_SEPARATOR.as_bytes())?;
        }
        writer.write_all(line.as_bytes())?;
        first = false;
    }
    writer.write_all(LINE_SEPARATOR.as_bytes())?;
    writer.flush()?;
    Ok(())
}
