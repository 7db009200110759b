//! Huffman compressor implementation.

use std::time::Instant;

use huffpress_core::{CompressionStats, Compressor, Error, InputShape, Result};
use tracing::debug;

use crate::bits::pack;
use crate::config::{EmptyInputPolicy, HuffmanConfig, SingleSymbolPolicy};
use crate::frame::Frame;
use crate::frequency::FrequencyTable;
use crate::serialize::serialize;
use crate::tree::build;

/// Huffman compressor.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCompressor {
    config: HuffmanConfig,
}

impl HuffmanCompressor {
    /// Create a new compressor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compressor with the given configuration.
    pub fn with_config(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// Compress `input` into a frame and report what went into it.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = Instant::now();
        let freq = FrequencyTable::count(input);

        if freq.is_empty() {
            if self.config.empty_input == EmptyInputPolicy::Reject {
                return Err(Error::unsupported_shape(InputShape::Empty));
            }
            let frame = Frame::EMPTY.encode()?;
            let stats = CompressionStats::from_operation(
                0,
                frame.len(),
                start.elapsed().as_micros() as u64,
            );
            debug!("empty input, wrote {}-byte frame", frame.len());
            return Ok((frame, stats));
        }

        if freq.distinct() == 1 && self.config.single_symbol == SingleSymbolPolicy::Reject {
            let byte = input[0];
            return Err(Error::unsupported_shape(InputShape::SingleSymbol(byte)));
        }

        let (tree, codes) = build(&freq)?;
        let packed = pack(input, &codes, self.config.filler_bit)?;
        let tree_bytes = serialize(&tree)?;

        let frame = Frame {
            tree_bytes: &tree_bytes,
            padding_count: packed.padding,
            packed_bits: &packed.bytes,
        }
        .encode()?;

        let stats = CompressionStats {
            distinct_symbols: freq.distinct(),
            tree_bytes: tree_bytes.len(),
            padding_bits: packed.padding,
            ..CompressionStats::from_operation(
                input.len(),
                frame.len(),
                start.elapsed().as_micros() as u64,
            )
        };
        debug!(
            symbols = stats.distinct_symbols,
            max_code_len = codes.max_code_len(),
            "compressed {}",
            stats.summary()
        );

        Ok((frame, stats))
    }
}

impl Compressor for HuffmanCompressor {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress_with_stats(input).map(|(frame, _)| frame)
    }
}
