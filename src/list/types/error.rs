//! Error types for the list.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Failed to encode list: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode list: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ListError {
    /// Returns true if this error came from decoding a serialized list.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, ListError::Decode(_))
    }

    /// Returns true if this error came from encoding a list.
    pub fn is_encode_error(&self) -> bool {
        matches!(self, ListError::Encode(_))
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ListError>;
