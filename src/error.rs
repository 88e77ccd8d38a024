//! Error types for the album catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No album carries the requested id. The id is kept for logging only;
    /// clients always see the same wording.
    #[error("album not found")]
    NotFound(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedRequest(err.to_string())
    }
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound(id.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedRequest(msg.into())
    }
}
