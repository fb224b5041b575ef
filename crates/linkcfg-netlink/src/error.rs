//! Error types for attribute stream operations.
//!
//! All errors implement `std::error::Error` via `thiserror`.

use thiserror::Error;

/// Result type alias for attribute stream operations.
pub type AttrResult<T> = Result<T, AttrError>;

/// Errors that can occur while encoding or decoding an attribute stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttrError {
    /// The buffer is not a parsable attribute sequence, or a value did
    /// not match its attribute's declared width.
    #[error("malformed attribute stream: {message}")]
    MalformedStream {
        /// What the reader rejected.
        message: String,
    },

    /// The encoder rejected an attribute write.
    #[error("attribute encoding failed: {message}")]
    EncodingFailure {
        /// What the writer rejected.
        message: String,
    },
}

impl AttrError {
    /// Creates a malformed-stream error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedStream {
            message: message.into(),
        }
    }

    /// Creates an encoding-failure error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::EncodingFailure {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the decode path.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AttrError::MalformedStream { .. })
    }

    /// Returns true if this error came from the encode path.
    pub fn is_encoding_failure(&self) -> bool {
        matches!(self, AttrError::EncodingFailure { .. })
    }
}
