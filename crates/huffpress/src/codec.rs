//! Huffman codec (combined compressor + decompressor).

use huffpress_core::{Codec, CompressionStats, Compressor, Decompressor, Result};

use crate::compress::HuffmanCompressor;
use crate::config::HuffmanConfig;
use crate::decompress::HuffmanDecompressor;

/// Huffman codec combining compression and decompression.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    compressor: HuffmanCompressor,
    decompressor: HuffmanDecompressor,
}

impl HuffmanCodec {
    /// Create a new codec with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec whose compressor uses `config`.
    pub fn with_config(config: HuffmanConfig) -> Self {
        Self {
            compressor: HuffmanCompressor::with_config(config),
            decompressor: HuffmanDecompressor::new(),
        }
    }

    /// Compress and return the frame with its statistics.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        self.compressor.compress_with_stats(input)
    }
}

impl Compressor for HuffmanCodec {
    fn name(&self) -> &'static str {
        Compressor::name(&self.compressor)
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compressor.compress(input)
    }
}

impl Decompressor for HuffmanCodec {
    fn name(&self) -> &'static str {
        Decompressor::name(&self.decompressor)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompressor.decompress(input)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec::new()
    }
}
