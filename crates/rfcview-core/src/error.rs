//! Error types for rfcview core

use thiserror::Error;

/// Result type alias using rfcview's Error
pub type Result<T> = std::result::Result<T, Error>;

/// rfcview error types
///
/// Only structural damage to the index is an error. Withdrawn numbers,
/// dangling references and empty filters are expressed through the shape
/// of the output instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed record header: {0}")]
    MalformedRecordHeader(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedRecordHeader("Obsoletes RFC0001".to_string());
        assert_eq!(err.to_string(), "Malformed record header: Obsoletes RFC0001");
    }
}
