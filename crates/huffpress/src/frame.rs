//! Frame layout.
//!
//! ```text
//! offset            size          field
//! 0                 2             tree_length (u16, big-endian)
//! 2                 tree_length   serialized tree
//! 2 + tree_length   1             padding count (0-7)
//! 3 + tree_length   remainder     packed code bits, MSB-first
//! ```

use huffpress_core::{Error, Result};

/// Fixed header bytes: tree length plus padding count.
pub const HEADER_SIZE: usize = 3;

/// Borrowed view of the parts of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Serialized tree.
    pub tree_bytes: &'a [u8],
    /// Filler bits at the end of `packed_bits`.
    pub padding_count: u8,
    /// Packed code bits, MSB-first.
    pub packed_bits: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Frame produced for empty input: no tree, no padding, no bits.
    pub const EMPTY: Frame<'static> = Frame {
        tree_bytes: &[],
        padding_count: 0,
        packed_bits: &[],
    };

    /// Total encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.tree_bytes.len() + self.packed_bits.len()
    }

    /// Write the frame into a new buffer.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let tree_length = u16::try_from(self.tree_bytes.len())
            .map_err(|_| Error::encoding_overflow(self.tree_bytes.len()))?;

        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&tree_length.to_be_bytes());
        out.extend_from_slice(self.tree_bytes);
        out.push(self.padding_count);
        out.extend_from_slice(self.packed_bits);
        Ok(out)
    }

    /// Split `data` into its parts.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::truncated(HEADER_SIZE, data.len()));
        }

        let tree_length = u16::from_be_bytes([data[0], data[1]]) as usize;
        let required = HEADER_SIZE + tree_length;
        if data.len() < required {
            return Err(Error::truncated(required, data.len()));
        }

        let (tree_bytes, rest) = data[2..].split_at(tree_length);
        Ok(Frame {
            tree_bytes,
            padding_count: rest[0],
            packed_bits: &rest[1..],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let frame = Frame {
            tree_bytes: &[0xAA, 0xBB],
            padding_count: 3,
            packed_bits: &[0x12, 0x34],
        };
        let bytes = frame.encode().unwrap();
        assert_eq!(bytes, vec![0x00, 0x02, 0xAA, 0xBB, 0x03, 0x12, 0x34]);
        assert_eq!(bytes.len(), frame.encoded_len());
        assert_eq!(Frame::parse(&bytes).unwrap(), frame);
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(Frame::EMPTY.encode().unwrap(), vec![0, 0, 0]);
        assert_eq!(Frame::parse(&[0, 0, 0]).unwrap(), Frame::EMPTY);
    }

    #[test]
    fn test_tree_length_is_big_endian() {
        let tree = vec![7u8; 0x0102];
        let frame = Frame {
            tree_bytes: &tree,
            padding_count: 0,
            packed_bits: &[],
        };
        let bytes = frame.encode().unwrap();
        assert_eq!(&bytes[..2], &[0x01, 0x02]);
    }

    #[test]
    fn test_encode_overflow() {
        let tree = vec![0u8; u16::MAX as usize + 1];
        let frame = Frame {
            tree_bytes: &tree,
            padding_count: 0,
            packed_bits: &[],
        };
        assert!(matches!(
            frame.encode(),
            Err(Error::EncodingOverflow { size: 65_536, max: 65_535 })
        ));
    }

    #[test]
    fn test_parse_short_header() {
        for len in 0..HEADER_SIZE {
            let data = vec![0u8; len];
            assert!(matches!(
                Frame::parse(&data),
                Err(Error::TruncatedFrame { required: 3, available }) if available == len
            ));
        }
    }

    #[test]
    fn test_parse_declared_length_too_long() {
        // Declares 10 tree bytes, carries 4.
        let data = [0x00, 0x0A, 1, 2, 3, 4];
        assert!(matches!(
            Frame::parse(&data),
            Err(Error::TruncatedFrame {
                required: 13,
                available: 6
            })
        ));
        // Tree present but padding byte missing.
        let data = [0x00, 0x02, 1, 2];
        assert!(matches!(
            Frame::parse(&data),
            Err(Error::TruncatedFrame { required: 5, available: 4 })
        ));
    }
}
