//! Decoding pipeline: classify each line, track the key path, collect sequences.

pub mod classifier;
pub mod decoder;
pub mod path;

pub use decoder::Decoder;
