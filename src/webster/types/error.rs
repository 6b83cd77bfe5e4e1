//! Custom error types for the webster-reader crate.

use thiserror::Error;

use super::models::IntegrityViolation;

/// The primary error type for all operations in this crate.
///
/// A lookup that finds nothing is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum WebsterError {
    /// An error originating from I/O operations on the corpus.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The encoding label is not known to `encoding_rs`.
    #[error("Unknown text encoding label: {0}")]
    UnknownEncoding(String),

    /// The corpus is read one byte per character, so multi-byte encodings are refused.
    #[error("Encoding {0} is not a single-byte encoding")]
    MultiByteEncoding(&'static str),

    /// A bulk validation walk hit an integrity violation.
    #[error("Integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),
}

/// A convenience `Result` type alias using the crate's `WebsterError` type.
pub type Result<T> = std::result::Result<T, WebsterError>;
