use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected decoder options. Raised before any input is read.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The line source could not be opened, read or transcoded.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] io::Error),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
