//! Canonical signature rendering
//!
//! The canonical signature `name(type1,type2,...)` is the pre-image for
//! selector and topic hashing. It is recomputed on demand; fragments never
//! store it.

use crate::param::{Param, ParamType};

/// Render the canonical type string of one parameter type
///
/// Tuples render as parenthesized component lists, arrays as `[n]` / `[]`
/// suffixes on their element type. The `indexed` flag never participates.
pub fn canonical_type(kind: &ParamType) -> String {
    match kind {
        ParamType::Address => "address".to_string(),
        ParamType::Uint(bits) => format!("uint{}", bits),
        ParamType::Int(bits) => format!("int{}", bits),
        ParamType::Bool => "bool".to_string(),
        ParamType::Bytes => "bytes".to_string(),
        ParamType::FixedBytes(size) => format!("bytes{}", size),
        ParamType::String => "string".to_string(),
        ParamType::Tuple(components) => {
            let inner: Vec<String> = components.iter().map(|p| canonical_type(&p.kind)).collect();
            format!("({})", inner.join(","))
        }
        ParamType::Array(inner) => format!("{}[]", canonical_type(inner)),
        ParamType::FixedArray(inner, arity) => format!("{}[{}]", canonical_type(inner), arity),
    }
}

/// Render the canonical signature of a named fragment
pub fn signature(name: &str, params: &[Param]) -> String {
    let types: Vec<String> = params.iter().map(|p| canonical_type(&p.kind)).collect();
    format!("{}({})", name, types.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_flat() {
        let params = vec![
            Param::new("to", ParamType::Address),
            Param::new("amount", ParamType::Uint(256)),
        ];
        assert_eq!(signature("transfer", &params), "transfer(address,uint256)");
    }

    #[test]
    fn test_signature_empty() {
        assert_eq!(signature("totalSupply", &[]), "totalSupply()");
    }

    #[test]
    fn test_signature_tuple() {
        let params = vec![Param::new(
            "pair",
            ParamType::Tuple(vec![
                Param::new("a", ParamType::Uint(256)),
                Param::new("b", ParamType::Address),
            ]),
        )];
        assert_eq!(signature("f", &params), "f((uint256,address))");
    }

    #[test]
    fn test_signature_fixed_array() {
        let params = vec![Param::new(
            "xs",
            ParamType::FixedArray(Box::new(ParamType::Uint(256)), 3),
        )];
        assert_eq!(signature("f", &params), "f(uint256[3])");
    }

    #[test]
    fn test_signature_dynamic_array_of_tuples() {
        let params = vec![Param::new(
            "flags",
            ParamType::Array(Box::new(ParamType::Tuple(vec![Param::new(
                "ok",
                ParamType::Bool,
            )]))),
        )];
        assert_eq!(signature("f", &params), "f((bool)[])");
    }

    #[test]
    fn test_indexed_does_not_change_rendering() {
        let plain = vec![Param::new("who", ParamType::Address)];
        let indexed = vec![Param::indexed("who", ParamType::Address)];
        assert_eq!(signature("Ping", &plain), signature("Ping", &indexed));
    }

    #[test]
    fn test_signature_deterministic() {
        let params = vec![Param::new(
            "xs",
            ParamType::Array(Box::new(ParamType::FixedBytes(8))),
        )];
        assert_eq!(signature("g", &params), signature("g", &params));
        assert_eq!(signature("g", &params), "g(bytes8[])");
    }
}
