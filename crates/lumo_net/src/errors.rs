//! Error results that can be returned from the lumo net module
use thiserror::Error;

/// Serious errors and errors from third-party libraries
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),

    #[error("failed to parse url: {0}")]
    Url(#[from] url::ParseError),

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("status {0} while loading {1}")]
    BadStatus(u16, String),
}
