// crates/fstvarint-core/tests/cursor_roundtrip.rs

use std::io::Cursor;

use fstvarint_core::{
    decode, decode_all, encode_into, DecodeError, Error, VarintCursor, VarintReader,
};

fn sample_values() -> Vec<u64> {
    vec![
        0,
        1,
        127,
        128,
        300,
        16_384,
        1 << 35,
        (1 << 56) - 1,
        1 << 63,
        u64::MAX,
    ]
}

fn concat(values: &[u64]) -> Vec<u8> {
    let mut out = Vec::new();
    for &v in values {
        encode_into(v, &mut out);
    }
    out
}

#[test]
fn cursor_walks_concatenated_fields() {
    let values = sample_values();
    let bytes = concat(&values);

    let mut c = VarintCursor::new(&bytes);
    let mut offset = 0;
    for &v in &values {
        assert_eq!(c.position(), offset);
        let (expect, consumed) = decode(&bytes[offset..]).unwrap();
        assert_eq!(c.read_u64(), Ok(v));
        assert_eq!(expect, v);
        offset += consumed;
    }
    assert!(c.is_empty());
    assert_eq!(c.position(), bytes.len());
}

#[test]
fn decode_all_collects_window() {
    let values = sample_values();
    assert_eq!(decode_all(&concat(&values)), Ok(values));
}

#[test]
fn decode_all_rejects_cut_window() {
    let mut bytes = concat(&sample_values());
    bytes.pop();
    assert_eq!(decode_all(&bytes), Err(DecodeError::Truncated));
}

#[test]
fn reader_agrees_with_slice_decoder() {
    let values = sample_values();
    let bytes = concat(&values);
    let mut src = Cursor::new(&bytes);
    for &v in &values {
        assert_eq!(src.read_varint().unwrap(), v);
    }
    assert!(matches!(
        src.read_varint(),
        Err(Error::Decode(DecodeError::Truncated))
    ));
}

#[test]
fn reader_rejects_oversized_last_group() {
    let mut bytes = vec![0xFFu8; 9];
    bytes.push(0x02);
    let mut src = bytes.as_slice();
    assert!(matches!(
        src.read_varint(),
        Err(Error::Decode(DecodeError::Overflow))
    ));
}
