// crates/fstvarint-core/src/varint/mod.rs
//
// Unsigned varint (LEB128) codec.
//
// Wire layout, little-endian group order:
//   byte[i] bit 7       : continuation (1 = more bytes follow)
//   byte[i] bits [6..0] : value bits [7*i .. 7*i+6]

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod length;
pub mod reader;

pub use cursor::{decode_all, VarintCursor};
pub use decode::decode;
pub use encode::{encode, encode_into, encode_to_slice, EncodedVarint};
pub use length::{encoded_len, LENGTH_THRESHOLDS};
pub use reader::VarintReader;

/// ceil(64 / 7): the longest encoding of a u64.
pub const MAX_ENCODED_LEN: usize = 10;

pub const CONTINUATION_BIT: u8 = 0x80;
pub const PAYLOAD_MASK: u8 = 0x7F;
pub const PAYLOAD_BITS: u32 = 7;

/// Shift of the 10th (last possible) group. Only bit 0 of its payload fits.
pub(crate) const LAST_GROUP_SHIFT: u32 = PAYLOAD_BITS * (MAX_ENCODED_LEN as u32 - 1);

/// Payload bits that must be zero in the 10th byte (bits 64..70 of the value).
pub(crate) const LAST_GROUP_EXCESS: u8 = PAYLOAD_MASK & !0x01;
