//! Error types for Huffman compression operations.

use core::fmt;

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Largest serialized tree the 2-byte frame length field can describe.
pub const MAX_TREE_BYTES: usize = u16::MAX as usize;

/// Degenerate input shapes the base Huffman construction cannot split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    /// Zero bytes, so zero symbols.
    Empty,
    /// A single distinct byte value, possibly repeated.
    SingleSymbol(u8),
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputShape::Empty => f.write_str("empty input"),
            InputShape::SingleSymbol(byte) => {
                write!(f, "single distinct byte 0x{:02x}", byte)
            }
        }
    }
}

/// Compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer or its source cannot be resolved.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialized tree does not fit the frame's 2-byte length field.
    #[error("encoding overflow: serialized tree is {size} bytes, limit is {max}")]
    EncodingOverflow { size: usize, max: usize },

    /// Frame is shorter than its own header declares.
    #[error("truncated frame: need {required} bytes, got {available}")]
    TruncatedFrame { required: usize, available: usize },

    /// Bitstream does not walk the tree consistently.
    #[error("malformed bitstream: {message}")]
    MalformedBitstream { message: String },

    /// Degenerate input rejected by the configured policy.
    #[error("unsupported input shape: {0}")]
    UnsupportedInputShape(InputShape),

    /// Serialized tree blob is corrupted or invalid.
    #[error("corrupted data: {message}")]
    CorruptedData {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error from an input provider or output consumer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Create an encoding overflow error for a tree of `size` bytes.
    pub fn encoding_overflow(size: usize) -> Self {
        Error::EncodingOverflow {
            size,
            max: MAX_TREE_BYTES,
        }
    }

    /// Create a truncated frame error.
    pub fn truncated(required: usize, available: usize) -> Self {
        Error::TruncatedFrame {
            required,
            available,
        }
    }

    /// Create a malformed bitstream error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedBitstream {
            message: message.into(),
        }
    }

    /// Create a malformed bitstream error with bit offset context.
    pub fn malformed_at(message: impl Into<String>, bit_offset: usize) -> Self {
        Error::MalformedBitstream {
            message: format!("{} at bit {}", message.into(), bit_offset),
        }
    }

    /// Create an unsupported input shape error.
    pub fn unsupported_shape(shape: InputShape) -> Self {
        Error::UnsupportedInputShape(shape)
    }

    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
            source: None,
        }
    }

    /// Create a corrupted data error wrapping its cause.
    pub fn corrupted_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::CorruptedData {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// True for errors raised while reading a frame rather than building one.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::TruncatedFrame { .. }
                | Error::MalformedBitstream { .. }
                | Error::CorruptedData { .. }
        )
    }

    /// Get error category for logs.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::EncodingOverflow { .. } => "encoding_overflow",
            Error::TruncatedFrame { .. } => "truncated_frame",
            Error::MalformedBitstream { .. } => "malformed_bitstream",
            Error::UnsupportedInputShape(_) => "unsupported_input_shape",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::Io(_) => "io_error",
        }
    }
}
