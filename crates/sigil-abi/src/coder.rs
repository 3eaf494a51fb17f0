//! Encode/decode façade over an interface and an injected binary codec

use bytes::Bytes;
use sigil_crypto::keccak256;
use sigil_primitives::{Selector, H256};
use tracing::debug;

use crate::codec::Codec;
use crate::event::{merge, split, EncodedEvent};
use crate::fragment::Fragment;
use crate::param::{Param, ParamType};
use crate::registry::Interface;
use crate::value::{to_value_map, to_values, Value, ValueMap};
use crate::AbiError;

/// Encode/decode coordinator for one contract interface
///
/// Owns the fragment registry and the injected binary codec for its
/// lifetime. Every operation is a pure synchronous computation over
/// immutable data, so a `Coder` can be shared across threads without
/// synchronization whenever its codec can.
#[derive(Debug, Clone)]
pub struct Coder<C> {
    interface: Interface,
    codec: C,
}

impl<C: Codec> Coder<C> {
    /// Create a coder over an interface with an explicit codec
    pub fn new(interface: Interface, codec: C) -> Self {
        Coder { interface, codec }
    }

    /// The underlying fragment registry
    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    // ==================== Function paths ====================

    /// Encode calldata for a function: selector followed by the encoded
    /// arguments
    pub fn encode_function_data(&self, name: &str, values: &[Value]) -> Result<Bytes, AbiError> {
        let fragment = self.interface.function(name)?;
        debug!("Encoding call to {}", name);
        self.encode_with_selector(fragment, values)
    }

    /// Encode calldata from a name-addressed value map
    pub fn encode_function_data_named(
        &self,
        name: &str,
        values: &ValueMap,
    ) -> Result<Bytes, AbiError> {
        let fragment = self.interface.function(name)?;
        let ordered = to_values(values, fragment.inputs())?;
        debug!("Encoding call to {}", name);
        self.encode_with_selector(fragment, &ordered)
    }

    /// Decode calldata against a function's inputs
    ///
    /// Verifies the leading 4 bytes against the function's selector before
    /// handing the remainder to the codec.
    pub fn decode_function_data(&self, name: &str, data: &[u8]) -> Result<Vec<Value>, AbiError> {
        let fragment = self.interface.function(name)?;
        let selector = fragment_selector(fragment)?;
        if data.len() < Selector::LEN {
            return Err(AbiError::InvalidData(format!(
                "calldata shorter than a selector: {} bytes",
                data.len()
            )));
        }
        if &data[..Selector::LEN] != selector.as_bytes() {
            return Err(AbiError::InvalidData(format!(
                "selector mismatch: expected {}, got 0x{}",
                selector,
                hex::encode(&data[..Selector::LEN])
            )));
        }
        self.decode_params(fragment.inputs(), &data[Selector::LEN..])
    }

    /// Decode calldata into a name-addressed value map
    pub fn decode_function_data_named(
        &self,
        name: &str,
        data: &[u8],
    ) -> Result<ValueMap, AbiError> {
        let fragment = self.interface.function(name)?;
        let values = self.decode_function_data(name, data)?;
        to_value_map(values, fragment.inputs())
    }

    /// Decode a function's return data against its outputs
    pub fn decode_function_output(&self, name: &str, data: &[u8]) -> Result<Vec<Value>, AbiError> {
        let fragment = self.interface.function(name)?;
        self.decode_params(fragment.outputs(), data)
    }

    /// Decode return data into a name-addressed value map
    pub fn decode_function_output_named(
        &self,
        name: &str,
        data: &[u8],
    ) -> Result<ValueMap, AbiError> {
        let fragment = self.interface.function(name)?;
        let values = self.decode_function_output(name, data)?;
        to_value_map(values, fragment.outputs())
    }

    // ==================== Constructor and error paths ====================

    /// Encode constructor arguments (no selector prefix)
    pub fn encode_constructor(&self, values: &[Value]) -> Result<Bytes, AbiError> {
        let fragment = self.interface.constructor()?;
        let encoded = self.codec.encode(&kinds_of(fragment.inputs()), values)?;
        Ok(Bytes::from(encoded))
    }

    /// Encode revert data for an error: selector followed by the encoded
    /// arguments
    pub fn encode_error_data(&self, name: &str, values: &[Value]) -> Result<Bytes, AbiError> {
        let fragment = self.interface.error_fragment(name)?;
        self.encode_with_selector(fragment, values)
    }

    /// Decode revert data against an error's inputs, verifying its selector
    pub fn decode_error_data(&self, name: &str, data: &[u8]) -> Result<Vec<Value>, AbiError> {
        let fragment = self.interface.error_fragment(name)?;
        let selector = fragment_selector(fragment)?;
        if data.len() < Selector::LEN || &data[..Selector::LEN] != selector.as_bytes() {
            return Err(AbiError::InvalidData(format!(
                "revert data does not carry selector {}",
                selector
            )));
        }
        self.decode_params(fragment.inputs(), &data[Selector::LEN..])
    }

    // ==================== Event paths ====================

    /// Encode an event into its topic list and data payload
    ///
    /// Topic zero is the event topic. Each indexed parameter is encoded on
    /// its own to fill one topic slot, in declaration order; dynamic
    /// indexed values are carried as the hash of their encoding, since a
    /// topic holds exactly 32 bytes. Non-indexed parameters are encoded
    /// together as the data payload.
    pub fn encode_event(&self, name: &str, values: &ValueMap) -> Result<EncodedEvent, AbiError> {
        let fragment = self.interface.event(name)?;
        let topic0 = fragment_topic(fragment)?;
        let ordered = to_values(values, fragment.inputs())?;
        debug!("Encoding event {}", name);

        let mut topics = vec![topic0];
        let mut data_kinds = Vec::new();
        let mut data_values = Vec::new();

        for (param, value) in fragment.inputs().iter().zip(ordered) {
            if param.indexed {
                let single = [value];
                let encoded = self
                    .codec
                    .encode(std::slice::from_ref(&param.kind), &single)?;
                topics.push(topic_entry(&encoded));
            } else {
                data_kinds.push(param.kind.clone());
                data_values.push(value);
            }
        }

        let data = self.codec.encode(&data_kinds, &data_values)?;
        Ok(EncodedEvent {
            topics,
            data: Bytes::from(data),
        })
    }

    /// Decode an event's topics and data back into declaration order
    ///
    /// Topic zero must equal the event topic and the remaining entries
    /// must align one-to-one with the indexed parameters. A dynamic
    /// indexed parameter decodes to the raw 32-byte topic (the hash of the
    /// original value, which is all the log carries).
    pub fn decode_event(
        &self,
        name: &str,
        topics: &[H256],
        data: &[u8],
    ) -> Result<Vec<Value>, AbiError> {
        let fragment = self.interface.event(name)?;
        self.decode_event_fragment(fragment, topics, data)
    }

    /// Decode an event into a name-addressed value map
    pub fn decode_event_named(
        &self,
        name: &str,
        topics: &[H256],
        data: &[u8],
    ) -> Result<ValueMap, AbiError> {
        let fragment = self.interface.event(name)?;
        let values = self.decode_event_fragment(fragment, topics, data)?;
        to_value_map(values, fragment.inputs())
    }

    /// Resolve a raw log by its topic zero and decode it
    pub fn decode_log(
        &self,
        topics: &[H256],
        data: &[u8],
    ) -> Result<(&Fragment, Vec<Value>), AbiError> {
        let topic0 = topics
            .first()
            .ok_or_else(|| AbiError::InvalidData("log has no topics".to_string()))?;
        let fragment = self.interface.event_by_topic(*topic0)?;
        let values = self.decode_event_fragment(fragment, topics, data)?;
        Ok((fragment, values))
    }

    // ==================== Internals ====================

    fn encode_with_selector(
        &self,
        fragment: &Fragment,
        values: &[Value],
    ) -> Result<Bytes, AbiError> {
        let selector = fragment_selector(fragment)?;
        let encoded = self.codec.encode(&kinds_of(fragment.inputs()), values)?;
        let mut out = Vec::with_capacity(Selector::LEN + encoded.len());
        out.extend_from_slice(selector.as_bytes());
        out.extend(encoded);
        Ok(Bytes::from(out))
    }

    fn decode_params(&self, params: &[Param], data: &[u8]) -> Result<Vec<Value>, AbiError> {
        self.codec.decode(&kinds_of(params), data)
    }

    fn decode_event_fragment(
        &self,
        fragment: &Fragment,
        topics: &[H256],
        data: &[u8],
    ) -> Result<Vec<Value>, AbiError> {
        let topic0 = fragment_topic(fragment)?;
        match topics.first() {
            Some(first) if *first == topic0 => {}
            _ => {
                return Err(AbiError::InvalidData(format!(
                    "topic zero does not match event topic {}",
                    topic0
                )))
            }
        }

        let (indexed_params, data_params) = split(fragment.inputs());
        if topics.len() != indexed_params.len() + 1 {
            return Err(AbiError::InvalidData(format!(
                "expected {} topics, got {}",
                indexed_params.len() + 1,
                topics.len()
            )));
        }

        let mut indexed_values = Vec::with_capacity(indexed_params.len());
        for (param, topic) in indexed_params.iter().zip(&topics[1..]) {
            if param.kind.is_dynamic() {
                // Only the hash survives in the topic slot
                indexed_values.push(Value::FixedBytes(topic.as_bytes().to_vec()));
            } else {
                let decoded = self
                    .codec
                    .decode(std::slice::from_ref(&param.kind), topic.as_bytes())?;
                let value = decoded.into_iter().next().ok_or_else(|| {
                    AbiError::Codec(format!("codec returned no value for {}", param.name))
                })?;
                indexed_values.push(value);
            }
        }

        let data_kinds: Vec<ParamType> = data_params.iter().map(|p| p.kind.clone()).collect();
        let data_values = self.codec.decode(&data_kinds, data)?;

        merge(fragment.inputs(), indexed_values, data_values)
    }
}

fn kinds_of(params: &[Param]) -> Vec<ParamType> {
    params.iter().map(|p| p.kind.clone()).collect()
}

fn fragment_selector(fragment: &Fragment) -> Result<Selector, AbiError> {
    fragment.selector().ok_or_else(|| {
        AbiError::MissingParameters("fragment has no selector".to_string())
    })
}

fn fragment_topic(fragment: &Fragment) -> Result<H256, AbiError> {
    fragment.topic().ok_or_else(|| {
        AbiError::MissingParameters("fragment has no topic".to_string())
    })
}

// A topic slot holds exactly 32 bytes: static encodings fit as-is, dynamic
// encodings are reduced to their hash.
fn topic_entry(encoded: &[u8]) -> H256 {
    if encoded.len() == H256::LEN {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(encoded);
        H256::from_bytes(buf)
    } else {
        keccak256(encoded)
    }
}
