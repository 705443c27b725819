use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a varint could not be decoded. Both kinds are terminal for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended before a byte with the continuation bit clear.
    #[error("varint truncated: input ended before the terminating byte")]
    Truncated,

    /// More value bits than a u64 can hold.
    #[error("varint overflow: encoding exceeds 64 bits")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
