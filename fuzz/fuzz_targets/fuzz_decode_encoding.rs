#![no_main]
use libfuzzer_sys::fuzz_target;
use flatyaml::Decoder;

const LABELS: [&str; 4] = ["utf-8", "windows-1252", "utf-16le", "shift_jis"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, bytes)) = data.split_first() else {
        return;
    };
    let label = LABELS[selector as usize % LABELS.len()];
    let mut decoder = Decoder::default();
    // transcoding replaces malformed input, so only the plain UTF-8 path may fail
    let doc = decoder.decode_reader_with_encoding(std::io::Cursor::new(bytes), label);
    assert!(doc.is_ok());
    let _ = decoder.decode_reader_or_empty(std::io::Cursor::new(bytes));
});
