//! Decoded values and the name-addressed/positional reshaping

use std::collections::BTreeMap;

use sigil_primitives::{Address, U256};

use crate::param::Param;
use crate::AbiError;

/// One decoded or to-be-encoded ABI value
///
/// This is the positional representation the external binary codec
/// consumes and produces. Signed integers are carried as their 256-bit
/// two's-complement form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer
    Uint(U256),
    /// Signed integer, two's complement
    Int(U256),
    /// Boolean
    Bool(bool),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Fixed-size bytes (1-32)
    FixedBytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic array
    Array(Vec<Value>),
    /// Fixed-size array
    FixedArray(Vec<Value>),
    /// Tuple (struct)
    Tuple(Vec<Value>),
}

impl Value {
    /// Create a uint value from a machine integer
    pub fn uint(value: u64) -> Self {
        Value::Uint(U256::from(value))
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }
}

/// Name-addressed value collection, keyed by top-level parameter name
pub type ValueMap = BTreeMap<String, Value>;

/// Zip positional values with top-level parameter names
///
/// If two top-level parameters share a name, the later value wins
/// (last-write-wins, deterministic). Fails if the value count does not
/// match the parameter count.
pub fn to_value_map(values: Vec<Value>, params: &[Param]) -> Result<ValueMap, AbiError> {
    if values.len() != params.len() {
        return Err(AbiError::NameMismatch(format!(
            "expected {} values, got {}",
            params.len(),
            values.len()
        )));
    }
    let mut map = ValueMap::new();
    for (param, value) in params.iter().zip(values) {
        map.insert(param.name.clone(), value);
    }
    Ok(map)
}

/// Reorder a name-addressed map into the positional sequence the codec
/// requires, following parameter declaration order
///
/// A key missing from the map fails eagerly with
/// [`AbiError::NameMismatch`]; there is no placeholder value to forward.
pub fn to_values(map: &ValueMap, params: &[Param]) -> Result<Vec<Value>, AbiError> {
    params
        .iter()
        .map(|param| {
            map.get(&param.name).cloned().ok_or_else(|| {
                AbiError::NameMismatch(format!("value map has no entry for {}", param.name))
            })
        })
        .collect()
}
