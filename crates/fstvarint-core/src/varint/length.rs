// crates/fstvarint-core/src/varint/length.rs

use super::{MAX_ENCODED_LEN, PAYLOAD_BITS};

/// `LENGTH_THRESHOLDS[k]` is the smallest value whose encoding takes `k + 1` bytes.
pub const LENGTH_THRESHOLDS: [u64; MAX_ENCODED_LEN] = [
    0,
    1 << 7,
    1 << 14,
    1 << 21,
    1 << 28,
    1 << 35,
    1 << 42,
    1 << 49,
    1 << 56,
    1 << 63,
];

/// Number of bytes [`encode`](super::encode) produces for `value`, without encoding it.
///
/// Equal to the recurrence `1` if `value < 2^7`, else `1 + encoded_len(value >> 7)`,
/// computed from the count of significant bits. Zero still counts as one bit.
#[inline]
pub const fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - (value | 1).leading_zeros()) as usize;
    (bits + PAYLOAD_BITS as usize - 1) / PAYLOAD_BITS as usize
}
