//! ABI resolution error types

use thiserror::Error;

/// Error type for interface resolution and value reshaping
///
/// Every failure is terminal for the call that produced it; there is no
/// global error state and no retry.
#[derive(Debug, Error)]
pub enum AbiError {
    /// No fragment matches the requested name, selector, topic, or kind
    #[error("not found: {0}")]
    NotFound(String),

    /// A fragment record lacks a usable name or parameter list
    #[error("missing parameters: {0}")]
    MissingParameters(String),

    /// A value map is missing a required key, or value counts do not line
    /// up with the parameter list
    #[error("name mismatch: {0}")]
    NameMismatch(String),

    /// Unrecognized or malformed type string in the interface description
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// Calldata or event payload that cannot belong to the resolved fragment
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Failure propagated from the external binary codec
    #[error("codec error: {0}")]
    Codec(String),

    /// Interface description could not be deserialized
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::Serialization(e.to_string())
    }
}
