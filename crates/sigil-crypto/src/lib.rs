//! # sigil-crypto
//!
//! The hash primitive boundary for sigil.
//!
//! Selector and topic derivation treat `keccak256` as an external,
//! deterministic primitive; the implementation is the `sha3` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
