// crates/fstvarint-core/tests/varint_lengths.rs

use fstvarint_core::varint::LENGTH_THRESHOLDS;
use fstvarint_core::{encode, encoded_len, MAX_ENCODED_LEN};

#[test]
fn boundary_transitions() {
    for k in 1..MAX_ENCODED_LEN as u32 {
        let edge = 1u64 << (7 * k);
        assert_eq!(encoded_len(edge - 1), k as usize, "2^{} - 1", 7 * k);
        assert_eq!(encoded_len(edge), k as usize + 1, "2^{}", 7 * k);
        assert_eq!(encode(edge - 1).len(), k as usize);
        assert_eq!(encode(edge).len(), k as usize + 1);
    }
    assert_eq!(encoded_len(0), 1);
    assert_eq!(encoded_len(u64::MAX), 10);
}

#[test]
fn threshold_table_is_powers_of_128() {
    assert_eq!(LENGTH_THRESHOLDS[0], 0);
    for k in 1..MAX_ENCODED_LEN {
        assert_eq!(LENGTH_THRESHOLDS[k], 1u64 << (7 * k));
    }
}

#[test]
fn length_is_monotone_across_small_range() {
    let mut prev = encoded_len(0);
    for v in 1..=0x20_0000u64 {
        let cur = encoded_len(v);
        assert!(cur >= prev, "v={v}");
        assert!(cur <= prev + 1, "v={v}");
        prev = cur;
    }
}

#[test]
fn length_agrees_with_encode_on_dense_low_range() {
    for v in 0..0xFFFFu64 {
        assert_eq!(encoded_len(v), encode(v).len(), "v={v}");
    }
}
