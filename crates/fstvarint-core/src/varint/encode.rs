// crates/fstvarint-core/src/varint/encode.rs

use std::fmt;
use std::ops::Deref;

use super::{encoded_len, CONTINUATION_BIT, MAX_ENCODED_LEN, PAYLOAD_BITS, PAYLOAD_MASK};
use crate::error::{Error, Result};

/// The canonical encoding of one u64: 1..=10 bytes held inline.
///
/// Derefs to `&[u8]` so it can be written, compared or copied like a slice.
/// Bytes past `len` are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedVarint {
    bytes: [u8; MAX_ENCODED_LEN],
    len: u8,
}

impl EncodedVarint {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl Deref for EncodedVarint {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for EncodedVarint {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for EncodedVarint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedVarint(")?;
        for (i, b) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

/// Encode `value` as its canonical varint. Never fails.
///
/// Emits the low 7 bits, shifts right by 7, and sets the continuation bit
/// while anything is left. Runs at least once (`0` encodes as `[0x00]`) and
/// at most [`MAX_ENCODED_LEN`] times.
pub fn encode(value: u64) -> EncodedVarint {
    let mut bytes = [0u8; MAX_ENCODED_LEN];
    let len = write_groups(value, &mut bytes);
    EncodedVarint {
        bytes,
        len: len as u8,
    }
}

/// Append the encoding of `value` to `out`. Returns the number of bytes written.
pub fn encode_into(value: u64, out: &mut Vec<u8>) -> usize {
    let enc = encode(value);
    out.extend_from_slice(&enc);
    enc.len()
}

/// Write the encoding of `value` to the front of `out`.
///
/// Nothing is written if `out` is shorter than [`encoded_len`] of `value`.
pub fn encode_to_slice(value: u64, out: &mut [u8]) -> Result<usize> {
    let needed = encoded_len(value);
    if out.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }
    let enc = encode(value);
    out[..needed].copy_from_slice(&enc);
    Ok(needed)
}

#[inline]
fn write_groups(mut value: u64, out: &mut [u8; MAX_ENCODED_LEN]) -> usize {
    // 10 shifts of 7 clear any u64, so `i` stays below MAX_ENCODED_LEN.
    let mut i = 0;
    loop {
        let mut byte = (value as u8) & PAYLOAD_MASK;
        value >>= PAYLOAD_BITS;
        let more = value != 0;
        if more {
            byte |= CONTINUATION_BIT;
        }
        out[i] = byte;
        i += 1;
        if !more {
            return i;
        }
    }
}
