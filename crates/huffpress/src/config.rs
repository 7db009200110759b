//! Compressor configuration.

use serde::{Deserialize, Serialize};

/// What to do with an input of zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Emit the 3-byte frame `[0, 0, 0]`.
    #[default]
    EmptyFrame,
    /// Fail with `UnsupportedInputShape`.
    Reject,
}

/// What to do with an input holding one distinct byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleSymbolPolicy {
    /// Code the byte as the single bit `0`.
    #[default]
    OneBitCode,
    /// Fail with `UnsupportedInputShape`.
    Reject,
}

/// Huffman compressor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanConfig {
    /// Bit value used to pad the last packed byte
    #[serde(default = "default_filler_bit")]
    pub filler_bit: bool,

    /// Empty input handling
    #[serde(default)]
    pub empty_input: EmptyInputPolicy,

    /// Single-symbol input handling
    #[serde(default)]
    pub single_symbol: SingleSymbolPolicy,
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self {
            filler_bit: default_filler_bit(),
            empty_input: EmptyInputPolicy::default(),
            single_symbol: SingleSymbolPolicy::default(),
        }
    }
}

impl HuffmanConfig {
    /// Reject both degenerate input shapes.
    pub fn strict() -> Self {
        Self {
            empty_input: EmptyInputPolicy::Reject,
            single_symbol: SingleSymbolPolicy::Reject,
            ..Self::default()
        }
    }

    /// Set the filler bit.
    pub fn with_filler_bit(mut self, bit: bool) -> Self {
        self.filler_bit = bit;
        self
    }

    /// Set the empty input policy.
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Set the single-symbol policy.
    pub fn with_single_symbol(mut self, policy: SingleSymbolPolicy) -> Self {
        self.single_symbol = policy;
        self
    }
}

fn default_filler_bit() -> bool {
    true
}
