//! Unsigned LEB128 varints as used by FST trace files.
//!
//! Every timestamp, handle and length field in the container is one of these.
//! The codec is three pure functions: [`encode`], [`decode`] and
//! [`encoded_len`]. The cursor and reader helpers are built on top of them.

pub mod error;
pub mod varint;

pub use crate::error::{DecodeError, Error, Result};
pub use crate::varint::{
    decode, decode_all, encode, encode_into, encode_to_slice, encoded_len, EncodedVarint,
    VarintCursor, VarintReader, MAX_ENCODED_LEN,
};
