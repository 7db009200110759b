//! Statistics for compression operations.

use crate::types::CompressionRatio;

/// Statistics from a single compression operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionStats {
    /// Original (uncompressed) size in bytes.
    pub original_size: usize,

    /// Compressed frame size in bytes.
    pub compressed_size: usize,

    /// Time taken in microseconds.
    pub time_us: u64,

    /// Number of distinct byte values in the input.
    pub distinct_symbols: usize,

    /// Size of the serialized tree inside the frame.
    pub tree_bytes: usize,

    /// Filler bits appended to the last packed byte.
    pub padding_bits: u8,
}

impl CompressionStats {
    /// Create stats from a completed operation.
    pub fn from_operation(original_size: usize, compressed_size: usize, time_us: u64) -> Self {
        CompressionStats {
            original_size,
            compressed_size,
            time_us,
            ..Default::default()
        }
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Get throughput in bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 * 1_000_000.0 / self.time_us as f64
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.throughput_bps() / 1_000_000.0
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }

    /// Get stats summary as string.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} bytes (ratio: {:.2}x, {} symbols, tree {} bytes, padding {} bits)",
            self.original_size,
            self.compressed_size,
            self.ratio().ratio(),
            self.distinct_symbols,
            self.tree_bytes,
            self.padding_bits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_operation() {
        let stats = CompressionStats::from_operation(2_000_000, 1_000_000, 1_000_000);
        assert_eq!(stats.ratio().ratio(), 2.0);
        assert!((stats.throughput_mbs() - 2.0).abs() < 1e-9);
        assert!((stats.savings_percent() - 50.0).abs() < 1e-9);
        assert_eq!(stats.distinct_symbols, 0);
    }

    #[test]
    fn test_zero_time() {
        let stats = CompressionStats::from_operation(10, 5, 0);
        assert_eq!(stats.throughput_bps(), 0.0);
    }

    #[test]
    fn test_summary() {
        let stats = CompressionStats {
            original_size: 9,
            compressed_size: 12,
            time_us: 3,
            distinct_symbols: 3,
            tree_bytes: 7,
            padding_bits: 1,
        };
        assert_eq!(
            stats.summary(),
            "9 -> 12 bytes (ratio: 0.75x, 3 symbols, tree 7 bytes, padding 1 bits)"
        );
    }
}
