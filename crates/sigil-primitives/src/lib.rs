//! # sigil-primitives
//!
//! Primitive byte types shared across the sigil workspace.
//!
//! The textual form of each type is a boundary contract: lowercase hex with
//! a `0x` prefix. `Selector` renders to 8 hex characters, `H256` to 64.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod hash;
mod selector;

pub use address::Address;
pub use error::PrimitiveError;
pub use hash::{Topic, H256};
pub use selector::Selector;

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Render arbitrary bytes as a `0x`-prefixed lowercase hex string.
pub fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
