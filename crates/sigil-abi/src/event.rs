//! Event field routing: splitting parameters between topics and data,
//! and merging decoded streams back into declaration order

use bytes::Bytes;
use sigil_primitives::H256;

use crate::param::Param;
use crate::value::Value;
use crate::AbiError;

/// An encoded event: topic list plus data payload
///
/// `topics[0]` is always the event topic; entries `1..` align one-to-one
/// with the event's indexed parameters in declaration order, so
/// `topics.len() == 1 + indexed count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEvent {
    /// Topic entries, event topic first
    pub topics: Vec<H256>,
    /// Encoded non-indexed parameters
    pub data: Bytes,
}

/// Partition event parameters into indexed and non-indexed groups
///
/// Relative order is preserved within each partition.
pub fn split(params: &[Param]) -> (Vec<&Param>, Vec<&Param>) {
    params.iter().partition(|p| p.indexed)
}

/// Reassemble decoded topic and data values into declaration order
///
/// Walks the full parameter list once, pulling the next indexed-decoded
/// value when the parameter is indexed and the next data-decoded value
/// otherwise. Both streams must be consumed exactly; a count mismatch on
/// either side fails instead of silently mispairing values, since
/// unrelated parameters frequently share encoded width.
pub fn merge(
    params: &[Param],
    indexed: Vec<Value>,
    data: Vec<Value>,
) -> Result<Vec<Value>, AbiError> {
    let mut indexed = indexed.into_iter();
    let mut data = data.into_iter();

    let mut out = Vec::with_capacity(params.len());
    for param in params {
        let value = if param.indexed {
            indexed.next().ok_or_else(|| {
                AbiError::NameMismatch(format!("no topic value left for {}", param.name))
            })?
        } else {
            data.next().ok_or_else(|| {
                AbiError::NameMismatch(format!("no data value left for {}", param.name))
            })?
        };
        out.push(value);
    }

    if indexed.next().is_some() {
        return Err(AbiError::NameMismatch(
            "more topic values than indexed parameters".to_string(),
        ));
    }
    if data.next().is_some() {
        return Err(AbiError::NameMismatch(
            "more data values than non-indexed parameters".to_string(),
        ));
    }

    Ok(out)
}
