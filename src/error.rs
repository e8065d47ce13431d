//! Error types for varnote.
//!
//! Classification itself is total and never fails; errors only arise at the
//! crate's outer surfaces (reading input files, encoding JSON output).

use thiserror::Error;

/// Main error type for varnote operations.
#[derive(Error, Debug)]
pub enum VarnoteError {
    /// IO error (for file operations).
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON encoding error.
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl From<std::io::Error> for VarnoteError {
    fn from(err: std::io::Error) -> Self {
        VarnoteError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VarnoteError {
    fn from(err: serde_json::Error) -> Self {
        VarnoteError::Json {
            msg: err.to_string(),
        }
    }
}
