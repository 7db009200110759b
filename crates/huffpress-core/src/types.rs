//! Size comparison between an input buffer and its frame.

/// Input size against frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionRatio {
    /// Input size in bytes.
    pub original_size: usize,
    /// Frame size in bytes, header and tree included.
    pub compressed_size: usize,
}

impl CompressionRatio {
    pub fn new(original_size: usize, compressed_size: usize) -> Self {
        Self {
            original_size,
            compressed_size,
        }
    }

    /// `original / compressed`; 0 for an empty frame.
    pub fn ratio(&self) -> f64 {
        match self.compressed_size {
            0 => 0.0,
            frame => self.original_size as f64 / frame as f64,
        }
    }

    /// Frame bits spent per input byte. 8.0 means no gain.
    pub fn bits_per_byte(&self) -> f64 {
        match self.original_size {
            0 => 0.0,
            input => (self.compressed_size * 8) as f64 / input as f64,
        }
    }

    /// Percentage of the input size saved (negative when the frame grew).
    pub fn savings_percent(&self) -> f64 {
        match self.original_size {
            0 => 0.0,
            input => 100.0 - self.compressed_size as f64 * 100.0 / input as f64,
        }
    }

    pub fn bytes_saved(&self) -> isize {
        self.original_size as isize - self.compressed_size as isize
    }

    /// True when the frame is smaller than the input.
    pub fn is_effective(&self) -> bool {
        self.compressed_size < self.original_size
    }
}
