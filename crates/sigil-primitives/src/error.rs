//! Common error type for primitive parsing

use thiserror::Error;

/// Error returned when parsing a fixed-width byte type from text or slices
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// Input was not valid hex
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Input had the wrong byte length
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required byte length
        expected: usize,
        /// Length actually supplied
        got: usize,
    },
}
