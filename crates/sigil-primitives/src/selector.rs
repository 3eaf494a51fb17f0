//! 4-byte function/error selector type

use std::fmt;

use crate::PrimitiveError;

/// 4-byte identifier of a function or error, derived from its canonical
/// signature hash
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Size in bytes
    pub const LEN: usize = 4;

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Selector(bytes)
    }

    /// Create from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, PrimitiveError> {
        if slice.len() != Self::LEN {
            return Err(PrimitiveError::InvalidLength {
                expected: Self::LEN,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(slice);
        Ok(Selector(bytes))
    }

    /// Parse from hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| PrimitiveError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Selector(bytes)
    }
}

impl AsRef<[u8]> for Selector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_hex() {
        let sel = Selector::from_hex("0xa9059cbb").unwrap();
        assert_eq!(sel.as_bytes(), &[0xa9, 0x05, 0x9c, 0xbb]);

        let bare = Selector::from_hex("a9059cbb").unwrap();
        assert_eq!(sel, bare);
    }

    #[test]
    fn test_selector_hex_renders_8_chars() {
        let sel = Selector::from_bytes([0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(sel.to_hex(), "0x70a08231");
    }

    #[test]
    fn test_selector_wrong_length() {
        let result = Selector::from_hex("0xa9059c");
        assert!(matches!(
            result,
            Err(PrimitiveError::InvalidLength { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn test_selector_invalid_hex() {
        let result = Selector::from_hex("0xzzzzzzzz");
        assert!(matches!(result, Err(PrimitiveError::InvalidHex(_))));
    }
}
