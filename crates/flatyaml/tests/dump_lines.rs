use std::io::Cursor;

use flatyaml::dump::{LINE_SEPARATOR, dump_file, dump_lines, dump_reader};

#[test]
fn dump_lines_drops_comments_and_blanks() {
    let out = dump_lines(["# header", "", "a: 1", "  # inner", "  b: 2", "   "]);
    assert_eq!(out, format!("a: 1{LINE_SEPARATOR}  b: 2"));
}

#[test]
fn dump_lines_of_nothing_is_empty() {
    assert_eq!(dump_lines(["# only", ""]), "");
}

#[test]
fn dump_reader_ends_with_separator() -> Result<(), Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    dump_reader(Cursor::new("a:\n\n  - x\n"), &mut out)?;
    assert_eq!(String::from_utf8(out)?, format!("a:{LINE_SEPARATOR}  - x{LINE_SEPARATOR}"));
    Ok(())
}

#[test]
fn dump_reader_of_comments_prints_one_separator() -> Result<(), Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    dump_reader(Cursor::new("# nothing\n"), &mut out)?;
    assert_eq!(String::from_utf8(out)?, LINE_SEPARATOR);
    Ok(())
}

#[test]
fn dump_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    assert!(dump_file(dir.path().join("gone.yaml"), &mut out).is_err());
    assert!(out.is_empty());
}
