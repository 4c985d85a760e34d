//! Error types for telecom identifier parsing

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, InvalidDataError>;

/// Validation failure for an identifier value.
///
/// Carries the identifier kind and the raw input that was rejected, so
/// the caller can log exactly what arrived off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid data for {kind}: {bytes:02x?}")]
pub struct InvalidDataError {
    /// Identifier kind that rejected the input ("TBCD", "E164", ...)
    pub kind: &'static str,
    /// The offending bytes or text
    pub bytes: Vec<u8>,
}

impl InvalidDataError {
    pub(crate) fn new(kind: &'static str, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }
}
