//! Byte frequency counting.

/// Number of distinct byte symbols.
pub const MAX_SYMBOLS: usize = 256;

/// Occurrence counts per byte value, plus the order in which each byte was
/// first seen. The order drives the tree builder's tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; MAX_SYMBOLS],
    first_seen: Vec<u8>,
}

impl FrequencyTable {
    /// Count byte frequencies over `data`.
    pub fn count(data: &[u8]) -> Self {
        let mut counts = [0u64; MAX_SYMBOLS];
        let mut first_seen = Vec::new();

        for &byte in data {
            let slot = &mut counts[byte as usize];
            if *slot == 0 {
                first_seen.push(byte);
            }
            *slot += 1;
        }

        Self { counts, first_seen }
    }

    /// Occurrences of `byte`.
    #[inline]
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of distinct byte values present.
    pub fn distinct(&self) -> usize {
        self.first_seen.len()
    }

    /// True when no bytes were counted.
    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(byte, count)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.first_seen
            .iter()
            .map(move |&byte| (byte, self.counts[byte as usize]))
    }
}
