//! Selector and topic derivation from canonical signatures

use sigil_crypto::keccak256;
use sigil_primitives::{Selector, H256};

/// Derive the 4-byte selector of a canonical signature
///
/// First 4 bytes of `keccak256(utf8(signature))`.
pub fn selector_of(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[..4]);
    Selector::from_bytes(bytes)
}

/// Derive the 32-byte event topic of a canonical signature
///
/// The full `keccak256(utf8(signature))` digest.
pub fn topic_of(signature: &str) -> H256 {
    keccak256(signature.as_bytes())
}
