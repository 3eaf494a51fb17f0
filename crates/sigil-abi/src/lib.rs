//! # sigil-abi
//!
//! Contract interface resolution and value reshaping.
//!
//! ## Features
//!
//! - **Interface**: fragment registry resolving functions, events, the
//!   constructor, and errors by name, selector, or topic
//! - **Signatures**: canonical `name(type1,type2,...)` rendering and
//!   keccak-derived selectors/topics
//! - **Coder**: calldata and event encode/decode over an injected binary
//!   codec
//! - **Values**: reshaping between name-addressed maps and the positional
//!   sequences the codec requires
//!
//! The binary ABI layout rules themselves live behind the [`Codec`] trait;
//! the default implementation delegates to the `ethabi` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigil_abi::{Address, Coder, EthabiCodec, Interface, Value, U256};
//!
//! # fn main() -> Result<(), sigil_abi::AbiError> {
//! let interface = Interface::parse(
//!     r#"[
//!         {"type": "function", "name": "transfer",
//!          "inputs": [{"name": "to", "type": "address"},
//!                     {"name": "amount", "type": "uint256"}],
//!          "outputs": [{"name": "", "type": "bool"}]}
//!     ]"#,
//! )?;
//! let coder = Coder::new(interface, EthabiCodec);
//!
//! let to = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
//! let data = coder.encode_function_data(
//!     "transfer",
//!     &[Value::Address(to), Value::Uint(U256::from(1000u64))],
//! )?;
//!
//! // Calldata layout: 4-byte selector followed by the encoded arguments
//! assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
//! assert_eq!(data.len(), 68);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
mod coder;
mod error;
pub mod event;
mod fragment;
mod param;
mod registry;
pub mod selector;
pub mod signature;
pub mod value;

pub use codec::{Codec, MockCodec};
pub use coder::Coder;
pub use error::AbiError;
pub use event::EncodedEvent;
pub use fragment::{Fragment, FragmentKind, JsonFragment};
pub use param::{JsonParam, Param, ParamType};
pub use registry::Interface;
pub use selector::{selector_of, topic_of};
pub use signature::{canonical_type, signature};
pub use value::{to_value_map, to_values, Value, ValueMap};

#[cfg(feature = "ethabi")]
pub use codec::EthabiCodec;

// Re-export primitives for convenience
pub use sigil_primitives::{to_hex_string, Address, Selector, Topic, H256, U256};
