// crates/fstvarint-core/src/varint/cursor.rs
//
// Walk a window of back-to-back varints, advancing by `consumed` each time.

use super::decode;
use crate::error::DecodeError;

#[derive(Clone, Debug)]
pub struct VarintCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> VarintCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Decode the varint at the current position and step past it.
    ///
    /// On error the position is left where it was.
    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let (value, consumed) = decode(self.remaining())?;
        self.pos += consumed;
        Ok(value)
    }

    /// Byte offset of the next varint within the window.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}

/// Yields one value per varint until the window is used up.
/// The first error is yielded once, then the iterator is fused.
impl Iterator for VarintCursor<'_> {
    type Item = Result<u64, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_empty() {
            return None;
        }
        let r = self.read_u64();
        if r.is_err() {
            self.failed = true;
        }
        Some(r)
    }
}

impl std::iter::FusedIterator for VarintCursor<'_> {}

/// Decode every varint in `bytes`, which must hold whole encodings only.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<u64>, DecodeError> {
    VarintCursor::new(bytes).collect()
}
