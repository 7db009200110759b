//! # Huffpress
//!
//! Static Huffman coding over in-memory byte buffers.
//!
//! Compression counts byte frequencies, builds a prefix-free code, packs the
//! input MSB-first and writes a self-describing frame:
//!
//! ```text
//! tree_length (u16 BE) | tree bytes | padding count (u8) | packed bits
//! ```
//!
//! Decompression splits the frame, restores the tree and walks it bit by bit.
//!
//! ## Degenerate input
//!
//! - Empty input produces the frame `[0, 0, 0]`.
//! - Input with one distinct byte codes it as the single bit `0`.
//!
//! Both can be turned into [`Error::UnsupportedInputShape`] through
//! [`HuffmanConfig`].
//!
//! ## Example
//!
//! ```ignore
//! use huffpress::HuffmanCodec;
//! use huffpress_core::{Codec, Compressor, Decompressor};
//!
//! let codec = HuffmanCodec::new();
//! let frame = codec.compress(b"abcabcabc")?;
//! assert_eq!(codec.decompress(&frame)?, b"abcabcabc");
//! ```

pub mod bits;
pub mod codec;
pub mod compress;
pub mod config;
pub mod decode;
pub mod decompress;
pub mod frame;
pub mod frequency;
pub mod serialize;
pub mod tree;

use huffpress_core::{Compressor, Decompressor};

// Re-export main types
pub use bits::{pack, unpack, PackedBits};
pub use codec::HuffmanCodec;
pub use compress::HuffmanCompressor;
pub use config::{EmptyInputPolicy, HuffmanConfig, SingleSymbolPolicy};
pub use decode::decode;
pub use decompress::HuffmanDecompressor;
pub use frame::Frame;
pub use frequency::FrequencyTable;
pub use huffpress_core::{CompressionStats, Error, InputShape, Result};
pub use serialize::{restore, serialize};
pub use tree::{build, CodeTable, HuffmanTree, Node, TreeBuilder};

/// Compress `input` with default settings.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    HuffmanCompressor::new().compress(input)
}

/// Decompress a frame produced by [`compress`].
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    HuffmanDecompressor::new().decompress(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_roundtrip() {
        let input = b"top-level helpers use the default configuration";
        let frame = compress(input).unwrap();
        assert_eq!(decompress(&frame).unwrap(), input);
    }

    #[test]
    fn test_degenerate_defaults() {
        assert_eq!(compress(b"").unwrap(), vec![0, 0, 0]);
        assert_eq!(decompress(&[0, 0, 0]).unwrap(), b"");
        assert_eq!(decompress(&compress(b"aaaa").unwrap()).unwrap(), b"aaaa");
    }

    #[test]
    fn test_abc_frame() {
        let frame = compress(b"abcabcabc").unwrap();
        let tree_length = u16::from_be_bytes([frame[0], frame[1]]) as usize;
        assert_eq!(frame.len(), 3 + tree_length + 2);
        assert_eq!(frame[2 + tree_length], 1);
    }

    #[test]
    fn test_codec_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HuffmanCodec>();
        assert_send_sync::<HuffmanCompressor>();
        assert_send_sync::<HuffmanDecompressor>();
    }
}
