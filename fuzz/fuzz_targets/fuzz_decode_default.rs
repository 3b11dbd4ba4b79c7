#![no_main]
use libfuzzer_sys::fuzz_target;
use flatyaml::Decoder;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut decoder = Decoder::default();
        let first = decoder.decode_str(s);
        let second = decoder.decode_str(s);
        assert_eq!(first, second, "decoder state leaked between runs");
    }
});
