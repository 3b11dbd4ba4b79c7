#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use flatyaml::{Decoder, Options};

#[derive(Arbitrary, Debug)]
struct Input {
    indent: u16,
    delimiter: String,
    lines: Vec<String>,
}

fuzz_target!(|input: Input| {
    let options = Options::default()
        .with_indent(input.indent as usize)
        .with_delimiter(input.delimiter);
    let valid = options.validate().is_ok();
    match Decoder::new(options) {
        Ok(mut decoder) => {
            assert!(valid);
            let doc = decoder.decode_lines(&input.lines);
            let meaningful = input
                .lines
                .iter()
                .filter(|l| !flatyaml::decode::classifier::is_skipped(l))
                .count();
            assert!(doc.len() <= meaningful);
        }
        Err(_) => assert!(!valid),
    }
});
