//! # Huffpress Core
//!
//! Core traits, error types and statistics for the huffpress Huffman engine.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use huffpress::HuffmanCodec;
//! use huffpress_core::{Codec, Compressor, Decompressor};
//!
//! let codec = HuffmanCodec::new();
//! let frame = codec.compress(data)?;
//! let original = codec.decompress(&frame)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, InputShape, Result, MAX_TREE_BYTES};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::CompressionRatio;
