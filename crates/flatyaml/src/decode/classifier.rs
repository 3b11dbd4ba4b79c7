//! Line classification: every raw line is a skip, a sequence item or a key line.
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line or `#` comment.
    Skip,
    /// `- item` line. The value is empty when the line does not split into
    /// exactly two `-` fields.
    SequenceItem(&'a str),
    /// Anything else. `prefix` is the first `:` field exactly as written,
    /// leading whitespace included; `value` is the trimmed, unquoted second
    /// field when the line has one.
    KeyLine {
        prefix: &'a str,
        value: Option<Cow<'a, str>>,
    },
}

/// Split on `sep`, then drop trailing empty fields.
///
/// `"a:"` yields `["a"]`, `"a: "` yields `["a", " "]` and `":"` yields nothing.
pub fn split_fields(line: &str, sep: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(sep).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Trim characters at or below U+0020 from both ends.
#[inline]
pub fn trim_control(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut start = 0usize;
    let mut end = bytes.len();
    while start < end && bytes[start] <= b' ' {
        start += 1;
    }
    while end > start && bytes[end - 1] <= b' ' {
        end -= 1;
    }
    &s[start..end]
}

/// True for lines the decoder ignores entirely.
#[inline]
pub fn is_skipped(line: &str) -> bool {
    let body = trim_control(line);
    body.is_empty() || body.starts_with('#')
}

pub fn classify(line: &str) -> LineKind<'_> {
    if is_skipped(line) {
        return LineKind::Skip;
    }
    let fields = split_fields(line, ':');
    let prefix = fields.first().copied().unwrap_or("");
    if trim_control(prefix).starts_with('-') {
        let items = split_fields(line, '-');
        let value = if items.len() == 2 {
            trim_control(items[1])
        } else {
            ""
        };
        return LineKind::SequenceItem(value);
    }
    let value = fields.get(1).map(|raw| unquote(trim_control(raw)));
    LineKind::KeyLine { prefix, value }
}

fn unquote(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(s.replace('"', ""))
    } else {
        Cow::Borrowed(s)
    }
}

pub fn scan(input: &str) -> Vec<LineKind<'_>> {
    iter(input).collect()
}

pub fn iter(input: &str) -> impl Iterator<Item = LineKind<'_>> {
    crate::source::split_lines(input).map(classify)
}
