//! Huffman decompressor implementation.

use huffpress_core::{Decompressor, Result};
use tracing::debug;

use crate::bits::unpack;
use crate::decode::decode;
use crate::frame::Frame;
use crate::serialize::restore;

/// Huffman decompressor.
///
/// Frames are self-describing, so there is nothing to configure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanDecompressor;

impl HuffmanDecompressor {
    /// Create a new decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for HuffmanDecompressor {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let frame = Frame::parse(input)?;
        let tree = restore(frame.tree_bytes)?;
        let bits = unpack(frame.packed_bits, frame.padding_count)?;
        let output = decode(&tree, bits)?;

        debug!(
            symbols = tree.symbols(),
            "decompressed {} -> {} bytes",
            input.len(),
            output.len()
        );
        Ok(output)
    }
}
