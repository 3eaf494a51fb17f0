//! Parameter model: the recursive description of one ABI value slot

use serde::Deserialize;

use crate::AbiError;

/// Closed sum of ABI parameter types
///
/// Tuples carry their component parameters (names included, for the
/// name-addressed value paths); arrays carry only the element type.
/// Values of this type are immutable once built from the interface
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Address (20 bytes)
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Tuple with named components
    Tuple(Vec<Param>),
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array with arity fixed at construction
    FixedArray(Box<ParamType>, usize),
}

/// One typed slot within a fragment's inputs or outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Slot name, used as the value-map key; may be empty for outputs
    pub name: String,
    /// Parameter type
    pub kind: ParamType,
    /// Whether an event carries this parameter in a topic slot
    pub indexed: bool,
}

impl Param {
    /// Create a non-indexed parameter
    pub fn new(name: impl Into<String>, kind: ParamType) -> Self {
        Param {
            name: name.into(),
            kind,
            indexed: false,
        }
    }

    /// Create an indexed event parameter
    pub fn indexed(name: impl Into<String>, kind: ParamType) -> Self {
        Param {
            name: name.into(),
            kind,
            indexed: true,
        }
    }

    /// Build a parameter from its JSON interface record
    pub fn from_json(raw: &JsonParam) -> Result<Self, AbiError> {
        let components = match &raw.components {
            Some(list) => Some(
                list.iter()
                    .map(Param::from_json)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };
        let kind = ParamType::parse(&raw.kind, components)?;
        Ok(Param {
            name: raw.name.clone(),
            kind,
            indexed: raw.indexed.unwrap_or(false),
        })
    }
}

impl ParamType {
    /// Parse a type string (e.g. `uint256`, `tuple[2][]`, `bytes32`)
    ///
    /// Array suffixes apply left to right: `uint256[3][]` is a dynamic
    /// array of fixed three-element arrays. Tuple base types require a
    /// `components` list; every other base type must not have one.
    /// Unrecognized base types are rejected here, never at signature time.
    pub fn parse(s: &str, components: Option<Vec<Param>>) -> Result<ParamType, AbiError> {
        let s = s.trim();
        let (base, suffixes) = match s.find('[') {
            Some(i) => (&s[..i], &s[i..]),
            None => (s, ""),
        };

        let mut kind = if base == "tuple" {
            let components = components.ok_or_else(|| {
                AbiError::InvalidType("tuple type without components".to_string())
            })?;
            ParamType::Tuple(components)
        } else {
            if components.is_some() {
                return Err(AbiError::InvalidType(format!(
                    "components on non-tuple type: {}",
                    base
                )));
            }
            Self::parse_elementary(base)?
        };

        let mut rest = suffixes;
        while !rest.is_empty() {
            let close = rest.find(']').ok_or_else(|| {
                AbiError::InvalidType(format!("unterminated array suffix in {}", s))
            })?;
            if !rest.starts_with('[') {
                return Err(AbiError::InvalidType(format!("malformed array suffix in {}", s)));
            }
            let arity = &rest[1..close];
            kind = if arity.is_empty() {
                ParamType::Array(Box::new(kind))
            } else {
                let n: usize = arity
                    .parse()
                    .map_err(|_| AbiError::InvalidType(format!("invalid array size: {}", arity)))?;
                if n == 0 {
                    return Err(AbiError::InvalidType(format!("zero-size array in {}", s)));
                }
                ParamType::FixedArray(Box::new(kind), n)
            };
            rest = &rest[close + 1..];
        }

        Ok(kind)
    }

    fn parse_elementary(s: &str) -> Result<ParamType, AbiError> {
        if s == "address" {
            return Ok(ParamType::Address);
        }
        if s == "bool" {
            return Ok(ParamType::Bool);
        }
        if s == "string" {
            return Ok(ParamType::String);
        }
        if s == "bytes" {
            return Ok(ParamType::Bytes);
        }

        // uint<N>
        if let Some(rest) = s.strip_prefix("uint") {
            return Ok(ParamType::Uint(Self::parse_bits(s, rest)?));
        }

        // int<N>
        if let Some(rest) = s.strip_prefix("int") {
            return Ok(ParamType::Int(Self::parse_bits(s, rest)?));
        }

        // bytes<N>
        if let Some(rest) = s.strip_prefix("bytes") {
            let size: usize = rest
                .parse()
                .map_err(|_| AbiError::InvalidType(format!("invalid bytes size: {}", rest)))?;
            if size == 0 || size > 32 {
                return Err(AbiError::InvalidType(format!("bytes size out of range: {}", size)));
            }
            return Ok(ParamType::FixedBytes(size));
        }

        Err(AbiError::InvalidType(format!("unknown type: {}", s)))
    }

    fn parse_bits(full: &str, rest: &str) -> Result<usize, AbiError> {
        if rest.is_empty() {
            return Ok(256);
        }
        let bits: usize = rest
            .parse()
            .map_err(|_| AbiError::InvalidType(format!("invalid integer width: {}", full)))?;
        if bits == 0 || bits > 256 || bits % 8 != 0 {
            return Err(AbiError::InvalidType(format!("integer width out of range: {}", full)));
        }
        Ok(bits)
    }

    /// Check if this type is dynamic (variable encoded length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(components) => components.iter().any(|p| p.kind.is_dynamic()),
            _ => false,
        }
    }
}

/// Raw JSON parameter record: `{name, type, components?, indexed?}`
#[derive(Debug, Clone, Deserialize)]
pub struct JsonParam {
    /// Parameter name; outputs are often unnamed
    #[serde(default)]
    pub name: String,
    /// Type string, e.g. `uint256` or `tuple[]`
    #[serde(rename = "type")]
    pub kind: String,
    /// Component records for tuple types
    #[serde(default)]
    pub components: Option<Vec<JsonParam>>,
    /// Topic-carried event parameter
    #[serde(default)]
    pub indexed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elementary() {
        assert_eq!(ParamType::parse("address", None).unwrap(), ParamType::Address);
        assert_eq!(ParamType::parse("uint256", None).unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("uint", None).unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("uint8", None).unwrap(), ParamType::Uint(8));
        assert_eq!(ParamType::parse("int128", None).unwrap(), ParamType::Int(128));
        assert_eq!(ParamType::parse("bool", None).unwrap(), ParamType::Bool);
        assert_eq!(ParamType::parse("bytes", None).unwrap(), ParamType::Bytes);
        assert_eq!(ParamType::parse("bytes32", None).unwrap(), ParamType::FixedBytes(32));
        assert_eq!(ParamType::parse("string", None).unwrap(), ParamType::String);
    }

    #[test]
    fn test_parse_rejects_unknown_base() {
        assert!(matches!(
            ParamType::parse("uint257", None),
            Err(AbiError::InvalidType(_))
        ));
        assert!(matches!(
            ParamType::parse("uint7", None),
            Err(AbiError::InvalidType(_))
        ));
        assert!(matches!(
            ParamType::parse("bytes33", None),
            Err(AbiError::InvalidType(_))
        ));
        assert!(matches!(
            ParamType::parse("bytes0", None),
            Err(AbiError::InvalidType(_))
        ));
        assert!(matches!(
            ParamType::parse("foo", None),
            Err(AbiError::InvalidType(_))
        ));
    }

    #[test]
    fn test_parse_array_suffixes() {
        assert_eq!(
            ParamType::parse("uint256[]", None).unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)))
        );
        assert_eq!(
            ParamType::parse("uint256[3]", None).unwrap(),
            ParamType::FixedArray(Box::new(ParamType::Uint(256)), 3)
        );
        // Suffixes apply left to right
        assert_eq!(
            ParamType::parse("uint256[3][]", None).unwrap(),
            ParamType::Array(Box::new(ParamType::FixedArray(
                Box::new(ParamType::Uint(256)),
                3
            )))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_arrays() {
        assert!(ParamType::parse("uint256[", None).is_err());
        assert!(ParamType::parse("uint256[x]", None).is_err());
        assert!(ParamType::parse("uint256[0]", None).is_err());
    }

    #[test]
    fn test_parse_tuple() {
        let components = vec![
            Param::new("a", ParamType::Uint(256)),
            Param::new("b", ParamType::Address),
        ];
        let kind = ParamType::parse("tuple", Some(components.clone())).unwrap();
        assert_eq!(kind, ParamType::Tuple(components.clone()));

        let kind = ParamType::parse("tuple[]", Some(components.clone())).unwrap();
        assert_eq!(
            kind,
            ParamType::Array(Box::new(ParamType::Tuple(components)))
        );
    }

    #[test]
    fn test_parse_tuple_requires_components() {
        assert!(matches!(
            ParamType::parse("tuple", None),
            Err(AbiError::InvalidType(_))
        ));
        assert!(matches!(
            ParamType::parse("uint256", Some(vec![])),
            Err(AbiError::InvalidType(_))
        ));
    }

    #[test]
    fn test_is_dynamic() {
        assert!(!ParamType::Address.is_dynamic());
        assert!(!ParamType::Uint(256).is_dynamic());
        assert!(!ParamType::FixedBytes(32).is_dynamic());

        assert!(ParamType::Bytes.is_dynamic());
        assert!(ParamType::String.is_dynamic());
        assert!(ParamType::Array(Box::new(ParamType::Uint(256))).is_dynamic());

        // Fixed array of a static type stays static, of a dynamic type turns dynamic
        assert!(!ParamType::FixedArray(Box::new(ParamType::Bool), 2).is_dynamic());
        assert!(ParamType::FixedArray(Box::new(ParamType::String), 2).is_dynamic());

        // Tuples inherit from their components
        assert!(!ParamType::Tuple(vec![Param::new("a", ParamType::Bool)]).is_dynamic());
        assert!(ParamType::Tuple(vec![Param::new("a", ParamType::Bytes)]).is_dynamic());
    }

    #[test]
    fn test_param_from_json() {
        let raw: JsonParam = serde_json::from_str(
            r#"{"name": "holder", "type": "address", "indexed": true}"#,
        )
        .unwrap();
        let param = Param::from_json(&raw).unwrap();
        assert_eq!(param.name, "holder");
        assert_eq!(param.kind, ParamType::Address);
        assert!(param.indexed);
    }

    #[test]
    fn test_param_from_json_nested_tuple() {
        let raw: JsonParam = serde_json::from_str(
            r#"{
                "name": "order",
                "type": "tuple[]",
                "components": [
                    {"name": "maker", "type": "address"},
                    {"name": "amounts", "type": "uint256[2]"}
                ]
            }"#,
        )
        .unwrap();
        let param = Param::from_json(&raw).unwrap();
        match &param.kind {
            ParamType::Array(inner) => match inner.as_ref() {
                ParamType::Tuple(components) => {
                    assert_eq!(components.len(), 2);
                    assert_eq!(components[0].name, "maker");
                    assert_eq!(
                        components[1].kind,
                        ParamType::FixedArray(Box::new(ParamType::Uint(256)), 2)
                    );
                }
                other => panic!("expected tuple element, got {:?}", other),
            },
            other => panic!("expected array, got {:?}", other),
        }
    }
}
