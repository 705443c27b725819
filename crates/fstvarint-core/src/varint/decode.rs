// crates/fstvarint-core/src/varint/decode.rs

use super::{
    CONTINUATION_BIT, LAST_GROUP_EXCESS, LAST_GROUP_SHIFT, MAX_ENCODED_LEN, PAYLOAD_BITS,
    PAYLOAD_MASK,
};
use crate::error::DecodeError;

pub(crate) enum Step {
    Done(u64),
    More,
}

/// Decoder state between bytes: the value so far and the shift of the next group.
pub(crate) struct Accumulator {
    value: u64,
    shift: u32,
}

impl Accumulator {
    pub(crate) const fn new() -> Self {
        Self { value: 0, shift: 0 }
    }

    /// Feed one byte.
    ///
    /// The 10th byte must terminate and may only carry bit 63; anything else
    /// would need more than 64 bits and is reported as overflow.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<Step, DecodeError> {
        let payload = byte & PAYLOAD_MASK;
        if self.shift == LAST_GROUP_SHIFT
            && (byte & CONTINUATION_BIT != 0 || payload & LAST_GROUP_EXCESS != 0)
        {
            return Err(DecodeError::Overflow);
        }

        self.value |= (payload as u64) << self.shift;

        if byte & CONTINUATION_BIT == 0 {
            return Ok(Step::Done(self.value));
        }
        self.shift += PAYLOAD_BITS;
        Ok(Step::More)
    }
}

/// Decode one varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed so the caller can step
/// past it; anything after the terminating byte is left untouched. At most
/// [`MAX_ENCODED_LEN`] bytes are examined.
///
/// Errors:
/// - [`DecodeError::Truncated`] if `bytes` ends before a byte with bit 7 clear.
/// - [`DecodeError::Overflow`] if the 10th byte still has bit 7 set, or carries
///   value bits above bit 63.
///
/// Redundant zero groups before the 10th byte (e.g. `[0x80, 0x00]`) are
/// accepted and counted in `consumed`.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut acc = Accumulator::new();
    for (i, &b) in bytes.iter().take(MAX_ENCODED_LEN).enumerate() {
        if let Step::Done(value) = acc.push(b)? {
            return Ok((value, i + 1));
        }
    }
    Err(DecodeError::Truncated)
}
