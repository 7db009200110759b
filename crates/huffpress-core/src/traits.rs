//! Core traits for compression and decompression.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Compressor / Decompressor  (one-shot operations)
//!       ↓
//! Codec  (combined compress + decompress)
//! ```

use crate::error::Result;
use crate::types::CompressionRatio;

/// One-shot compression operations.
pub trait Compressor {
    /// Short algorithm name, used in logs.
    fn name(&self) -> &'static str;

    /// Compress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Data to compress
    ///
    /// # Returns
    /// The complete compressed frame.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// One-shot decompression operations.
pub trait Decompressor {
    /// Short algorithm name, used in logs.
    fn name(&self) -> &'static str;

    /// Decompress a complete frame in one shot.
    ///
    /// # Arguments
    /// * `input` - Compressed frame
    ///
    /// # Returns
    /// Decompressed data as a vector.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Combined codec for both compression and decompression.
pub trait Codec: Compressor + Decompressor {
    /// Create a new codec with default settings.
    fn new() -> Self
    where
        Self: Sized;

    /// Round-trip test: compress then decompress.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let compressed = self.compress(data)?;
        let decompressed = self.decompress(&compressed)?;
        Ok(data == decompressed.as_slice())
    }

    /// Get compression ratio for given data.
    fn measure_ratio(&self, data: &[u8]) -> Result<CompressionRatio> {
        let compressed = self.compress(data)?;
        Ok(CompressionRatio::new(data.len(), compressed.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stores input verbatim behind a one-byte marker.
    struct Stored;

    impl Compressor for Stored {
        fn name(&self) -> &'static str {
            "stored"
        }

        fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
            let mut out = Vec::with_capacity(input.len() + 1);
            out.push(0xAA);
            out.extend_from_slice(input);
            Ok(out)
        }
    }

    impl Decompressor for Stored {
        fn name(&self) -> &'static str {
            "stored"
        }

        fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
            match input.split_first() {
                Some((0xAA, rest)) => Ok(rest.to_vec()),
                _ => Err(crate::Error::corrupted("missing marker")),
            }
        }
    }

    impl Codec for Stored {
        fn new() -> Self {
            Stored
        }
    }

    #[test]
    fn test_default_helpers() {
        let codec = <Stored as Codec>::new();
        assert!(codec.verify_roundtrip(b"hello").unwrap());

        let ratio = codec.measure_ratio(b"hello").unwrap();
        assert_eq!(ratio.original_size, 5);
        assert_eq!(ratio.compressed_size, 6);
        assert!(!ratio.is_effective());
    }
}
