//! Binary codec seam
//!
//! The binary ABI layout rules (padding, offset tables, head/tail layout
//! for dynamic types) live entirely behind the [`Codec`] trait. The
//! default implementation delegates to the `ethabi` crate; tests can
//! substitute [`MockCodec`].

use crate::param::ParamType;
use crate::value::Value;
use crate::AbiError;

/// External binary ABI codec (object-safe)
///
/// Implementations honor the Ethereum ABI static/dynamic layout rules;
/// this crate treats them as a black box over positional value sequences.
pub trait Codec: Send + Sync {
    /// Encode a positional value sequence against the given types
    fn encode(&self, kinds: &[ParamType], values: &[Value]) -> Result<Vec<u8>, AbiError>;

    /// Decode a byte payload into a positional value sequence
    fn decode(&self, kinds: &[ParamType], data: &[u8]) -> Result<Vec<Value>, AbiError>;
}

/// Mock codec for testing: returns canned bytes and values
#[derive(Debug, Clone, Default)]
pub struct MockCodec {
    encoded: Vec<u8>,
    decoded: Vec<Value>,
}

impl MockCodec {
    /// Create a mock codec returning empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bytes every `encode` call returns
    pub fn with_encoded(mut self, bytes: Vec<u8>) -> Self {
        self.encoded = bytes;
        self
    }

    /// Set the values every `decode` call returns
    pub fn with_decoded(mut self, values: Vec<Value>) -> Self {
        self.decoded = values;
        self
    }
}

impl Codec for MockCodec {
    fn encode(&self, kinds: &[ParamType], values: &[Value]) -> Result<Vec<u8>, AbiError> {
        if kinds.len() != values.len() {
            return Err(AbiError::Codec(format!(
                "expected {} values, got {}",
                kinds.len(),
                values.len()
            )));
        }
        Ok(self.encoded.clone())
    }

    fn decode(&self, _kinds: &[ParamType], _data: &[u8]) -> Result<Vec<Value>, AbiError> {
        Ok(self.decoded.clone())
    }
}

/// Codec backed by the `ethabi` crate
#[cfg(feature = "ethabi")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EthabiCodec;

#[cfg(feature = "ethabi")]
impl Codec for EthabiCodec {
    fn encode(&self, kinds: &[ParamType], values: &[Value]) -> Result<Vec<u8>, AbiError> {
        if kinds.len() != values.len() {
            return Err(AbiError::Codec(format!(
                "expected {} values, got {}",
                kinds.len(),
                values.len()
            )));
        }
        let tokens: Vec<ethabi::Token> = values.iter().map(lower::to_token).collect();
        Ok(ethabi::encode(&tokens))
    }

    fn decode(&self, kinds: &[ParamType], data: &[u8]) -> Result<Vec<Value>, AbiError> {
        let lowered: Vec<ethabi::ParamType> = kinds.iter().map(lower::to_param_type).collect();
        let tokens =
            ethabi::decode(&lowered, data).map_err(|e| AbiError::Codec(e.to_string()))?;
        Ok(tokens.into_iter().map(lower::from_token).collect())
    }
}

#[cfg(feature = "ethabi")]
mod lower {
    //! Lowering between the crate's model and ethabi's

    use sigil_primitives::{Address, U256};

    use crate::param::ParamType;
    use crate::value::Value;

    pub fn to_param_type(kind: &ParamType) -> ethabi::ParamType {
        match kind {
            ParamType::Address => ethabi::ParamType::Address,
            ParamType::Uint(bits) => ethabi::ParamType::Uint(*bits),
            ParamType::Int(bits) => ethabi::ParamType::Int(*bits),
            ParamType::Bool => ethabi::ParamType::Bool,
            ParamType::Bytes => ethabi::ParamType::Bytes,
            ParamType::FixedBytes(size) => ethabi::ParamType::FixedBytes(*size),
            ParamType::String => ethabi::ParamType::String,
            ParamType::Tuple(components) => ethabi::ParamType::Tuple(
                components.iter().map(|p| to_param_type(&p.kind)).collect(),
            ),
            ParamType::Array(inner) => {
                ethabi::ParamType::Array(Box::new(to_param_type(inner)))
            }
            ParamType::FixedArray(inner, arity) => {
                ethabi::ParamType::FixedArray(Box::new(to_param_type(inner)), *arity)
            }
        }
    }

    pub fn to_token(value: &Value) -> ethabi::Token {
        match value {
            Value::Address(addr) => {
                ethabi::Token::Address(ethabi::Address::from_slice(addr.as_bytes()))
            }
            Value::Uint(v) => ethabi::Token::Uint(to_u256(v)),
            Value::Int(v) => ethabi::Token::Int(to_u256(v)),
            Value::Bool(b) => ethabi::Token::Bool(*b),
            Value::Bytes(data) => ethabi::Token::Bytes(data.clone()),
            Value::FixedBytes(data) => ethabi::Token::FixedBytes(data.clone()),
            Value::String(s) => ethabi::Token::String(s.clone()),
            Value::Array(values) => {
                ethabi::Token::Array(values.iter().map(to_token).collect())
            }
            Value::FixedArray(values) => {
                ethabi::Token::FixedArray(values.iter().map(to_token).collect())
            }
            Value::Tuple(values) => {
                ethabi::Token::Tuple(values.iter().map(to_token).collect())
            }
        }
    }

    pub fn from_token(token: ethabi::Token) -> Value {
        match token {
            ethabi::Token::Address(addr) => Value::Address(Address::from_bytes(addr.0)),
            ethabi::Token::Uint(v) => Value::Uint(from_u256(&v)),
            ethabi::Token::Int(v) => Value::Int(from_u256(&v)),
            ethabi::Token::Bool(b) => Value::Bool(b),
            ethabi::Token::Bytes(data) => Value::Bytes(data),
            ethabi::Token::FixedBytes(data) => Value::FixedBytes(data),
            ethabi::Token::String(s) => Value::String(s),
            ethabi::Token::Array(tokens) => {
                Value::Array(tokens.into_iter().map(from_token).collect())
            }
            ethabi::Token::FixedArray(tokens) => {
                Value::FixedArray(tokens.into_iter().map(from_token).collect())
            }
            ethabi::Token::Tuple(tokens) => {
                Value::Tuple(tokens.into_iter().map(from_token).collect())
            }
        }
    }

    // The two U256 types may come from different crate versions; cross the
    // boundary as 32 big-endian bytes.
    fn to_u256(value: &U256) -> ethabi::Uint {
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        ethabi::Uint::from_big_endian(&buf)
    }

    fn from_u256(value: &ethabi::Uint) -> U256 {
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        U256::from_big_endian(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_primitives::{Address, U256};

    #[test]
    fn test_mock_codec_returns_canned_output() {
        let codec = MockCodec::new()
            .with_encoded(vec![0xaa; 32])
            .with_decoded(vec![Value::Bool(true)]);

        let encoded = codec.encode(&[ParamType::Bool], &[Value::Bool(true)]).unwrap();
        assert_eq!(encoded, vec![0xaa; 32]);

        let decoded = codec.decode(&[ParamType::Bool], &[]).unwrap();
        assert_eq!(decoded, vec![Value::Bool(true)]);
    }

    #[test]
    fn test_mock_codec_count_mismatch() {
        let codec = MockCodec::new();
        assert!(matches!(
            codec.encode(&[ParamType::Bool], &[]),
            Err(AbiError::Codec(_))
        ));
    }

    #[cfg(feature = "ethabi")]
    mod ethabi_codec {
        use super::super::*;
        use super::*;

        #[test]
        fn test_encode_transfer_args() {
            let codec = EthabiCodec;
            let to = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
            let encoded = codec
                .encode(
                    &[ParamType::Address, ParamType::Uint(256)],
                    &[Value::Address(to), Value::Uint(U256::from(1000u64))],
                )
                .unwrap();

            assert_eq!(encoded.len(), 64);
            // Address right-aligned in the first slot
            assert_eq!(&encoded[12..32], to.as_bytes());
            // 1000 = 0x03e8 at the tail of the second slot
            assert_eq!(&encoded[62..64], &[0x03, 0xe8]);
        }

        #[test]
        fn test_round_trip_mixed_types() {
            let codec = EthabiCodec;
            let kinds = vec![
                ParamType::Uint(256),
                ParamType::String,
                ParamType::Array(Box::new(ParamType::Bool)),
            ];
            let values = vec![
                Value::Uint(U256::from(42u64)),
                Value::string("hello"),
                Value::Array(vec![Value::Bool(true), Value::Bool(false)]),
            ];

            let encoded = codec.encode(&kinds, &values).unwrap();
            let decoded = codec.decode(&kinds, &encoded).unwrap();
            assert_eq!(decoded, values);
        }

        #[test]
        fn test_round_trip_tuple() {
            use crate::param::Param;

            let codec = EthabiCodec;
            let kinds = vec![ParamType::Tuple(vec![
                Param::new("a", ParamType::Uint(256)),
                Param::new("b", ParamType::Address),
            ])];
            let values = vec![Value::Tuple(vec![
                Value::Uint(U256::from(7u64)),
                Value::Address(Address::ZERO),
            ])];

            let encoded = codec.encode(&kinds, &values).unwrap();
            let decoded = codec.decode(&kinds, &encoded).unwrap();
            assert_eq!(decoded, values);
        }

        #[test]
        fn test_decode_truncated_data_fails() {
            let codec = EthabiCodec;
            let result = codec.decode(&[ParamType::Uint(256)], &[0u8; 4]);
            assert!(matches!(result, Err(AbiError::Codec(_))));
        }

        #[test]
        fn test_count_mismatch() {
            let codec = EthabiCodec;
            assert!(matches!(
                codec.encode(&[ParamType::Bool], &[]),
                Err(AbiError::Codec(_))
            ));
        }
    }
}
