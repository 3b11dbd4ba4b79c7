#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod decode;
pub mod source;
pub mod dump;

pub use crate::decode::Decoder;
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Document, YamlValue};

use std::io::Read;
use std::path::Path;

pub fn decode_from_str(s: &str, options: &Options) -> Result<Document> {
    let mut decoder = Decoder::new(options.clone())?;
    Ok(decoder.decode_str(s))
}

pub fn decode_from_reader<R: Read>(reader: R, options: &Options) -> Result<Document> {
    Decoder::new(options.clone())?.decode_reader(reader)
}

pub fn decode_from_file(path: impl AsRef<Path>, options: &Options) -> Result<Document> {
    Decoder::new(options.clone())?.decode_file(path)
}
