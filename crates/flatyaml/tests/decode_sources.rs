use std::io::{self, Cursor, Read, Write};

use flatyaml::{Decoder, Document, Error, Options};
use tempfile::NamedTempFile;

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device gone"))
    }
}

/// Hands out one byte per read so terminators straddle buffer refills.
struct ByteAtATime<R>(R);

impl<R: Read> Read for ByteAtATime<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(1);
        self.0.read(&mut buf[..n])
    }
}

#[test]
fn decode_from_reader() -> Result<(), Box<dyn std::error::Error>> {
    let mut decoder = Decoder::default();
    let out = decoder.decode_reader(Cursor::new("a:\n  b: 1\n"))?;
    assert_eq!(out.get_scalar("a/b"), Some("1"));
    Ok(())
}

#[test]
fn decode_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "db:\n  hosts:\n    - one\n    - two\n")?;

    let mut decoder = Decoder::default();
    let out = decoder.decode_file(tmp.path())?;
    assert_eq!(
        out.get_list("db/hosts"),
        Some(&["one".to_string(), "two".to_string()][..])
    );

    let out = flatyaml::decode_from_file(tmp.path(), &Options::default())?;
    assert_eq!(out.len(), 1);
    Ok(())
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");

    let mut decoder = Decoder::default();
    let err = decoder.decode_file(&missing).unwrap_err();
    match err {
        Error::SourceUnavailable(e) => {
            assert_eq!(e.kind(), io::ErrorKind::NotFound);
            assert!(e.to_string().contains("absent.yaml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_failure_is_source_unavailable() {
    let mut decoder = Decoder::default();
    let err = decoder.decode_reader(FailingReader).unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable(_)));
    assert!(err.to_string().contains("device gone"));
}

#[test]
fn invalid_utf8_is_source_unavailable() {
    let mut decoder = Decoder::default();
    let err = flatyaml::decode_from_reader(Cursor::new(b"k: caf\xe9\n".to_vec()), &Options::default())
        .unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable(ref e) if e.kind() == io::ErrorKind::InvalidData));
    // the decoder is still usable afterwards
    assert_eq!(decoder.decode_str("k: v").get_scalar("k"), Some("v"));
}

#[test]
fn failure_mid_stream_resets_path_state() {
    let lines: Vec<io::Result<&str>> = vec![Ok("a: 1"), Err(io::Error::other("boom")), Ok("b: 2")];
    let mut decoder = Decoder::default();
    assert!(decoder.decode(lines).is_err());

    // without a reset, "a" would still be the depth-0 ancestor
    let out = decoder.decode_str("  c: 3\n");
    assert_eq!(out.get_scalar("c"), Some("3"));
    assert!(out.get("a/c").is_none());
}

#[test]
fn or_empty_swallows_every_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut decoder = Decoder::default();

    assert!(decoder.decode_file_or_empty(dir.path().join("none.yaml")).is_empty());
    assert!(decoder.decode_reader_or_empty(FailingReader).is_empty());
    let lines: Vec<io::Result<String>> = vec![Ok("a: 1".into()), Err(io::Error::other("x"))];
    assert!(decoder.decode_or_empty(lines).is_empty());
}

#[test]
fn or_empty_passes_successful_decodes_through() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "k: v\n")?;
    let mut decoder = Decoder::default();
    let out = decoder.decode_file_or_empty(tmp.path());
    assert_eq!(out.get_scalar("k"), Some("v"));
    Ok(())
}

#[test]
fn lone_carriage_return_ends_a_line() -> Result<(), Box<dyn std::error::Error>> {
    let mut decoder = Decoder::default();
    let out = decoder.decode_reader(Cursor::new("a:\r  b: 1\rc: 2\r"))?;
    let expected: Document = [("a/b", "1"), ("c", "2")].into_iter().collect();
    assert_eq!(out, expected);
    Ok(())
}

#[test]
fn mixed_terminators_across_reads() -> Result<(), Box<dyn std::error::Error>> {
    let input = "a:\r\n  l:\r    - x\n    - y\r\n\r\nc: 2";
    let mut decoder = Decoder::default();
    let out = decoder.decode_reader(ByteAtATime(Cursor::new(input)))?;
    assert_eq!(out.get_list("a/l"), Some(&["x".to_string(), "y".to_string()][..]));
    assert_eq!(out.get_scalar("c"), Some("2"));

    let from_str = decoder.decode_str(input);
    assert_eq!(out, from_str);
    Ok(())
}

#[test]
fn reader_lines_match_line_reader_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let lines = flatyaml::source::lines(ByteAtATime(Cursor::new("a\r\rb\r\n\nc\r")))
        .collect::<io::Result<Vec<String>>>()?;
    assert_eq!(lines, ["a", "", "b", "", "c"]);

    let split: Vec<&str> = flatyaml::source::split_lines("a\r\rb\r\n\nc\r").collect();
    assert_eq!(split, ["a", "", "b", "", "c"]);
    Ok(())
}
