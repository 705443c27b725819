// crates/fstvarint-core/src/varint/reader.rs

use std::io::{self, Read};

use super::decode::{Accumulator, Step};
use super::MAX_ENCODED_LEN;
use crate::error::{DecodeError, Error, Result};

/// Read one whole varint from any byte source.
///
/// Bytes are pulled one at a time, so nothing past the terminating byte is
/// consumed from the source. No state is kept between calls.
pub trait VarintReader {
    fn read_varint(&mut self) -> Result<u64>;
}

impl<R> VarintReader for R
where
    R: Read + ?Sized,
{
    fn read_varint(&mut self) -> Result<u64> {
        let mut acc = Accumulator::new();
        for _ in 0..MAX_ENCODED_LEN {
            let mut byte = 0u8;
            if let Err(e) = self.read_exact(std::slice::from_mut(&mut byte)) {
                return Err(match e.kind() {
                    io::ErrorKind::UnexpectedEof => DecodeError::Truncated.into(),
                    _ => Error::Io(e),
                });
            }
            if let Step::Done(value) = acc.push(byte)? {
                return Ok(value);
            }
        }
        // The 10th push always terminates or fails.
        Err(DecodeError::Overflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn stops_at_terminating_byte() {
        let mut src = Cursor::new(vec![0xAC, 0x02, 0x7F, 0x80]);
        assert_eq!(src.read_varint().unwrap(), 300);
        assert_eq!(src.position(), 2);
        assert_eq!(src.read_varint().unwrap(), 127);
        assert!(matches!(
            src.read_varint(),
            Err(Error::Decode(DecodeError::Truncated))
        ));
    }

    #[test]
    fn empty_source_is_truncated() {
        let mut src: &[u8] = &[];
        assert!(matches!(
            src.read_varint(),
            Err(Error::Decode(DecodeError::Truncated))
        ));
    }

    #[test]
    fn overflow_reads_no_more_than_ten_bytes() {
        let mut src = Cursor::new(vec![0x80u8; 12]);
        assert!(matches!(
            src.read_varint(),
            Err(Error::Decode(DecodeError::Overflow))
        ));
        assert_eq!(src.position(), 10);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
        }
    }

    #[test]
    fn other_io_errors_pass_through() {
        assert!(matches!(Broken.read_varint(), Err(Error::Io(_))));
    }
}
