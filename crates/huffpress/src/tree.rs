//! Huffman tree construction and code assignment.
//!
//! The builder keeps a min-heap of candidates, each a sub-tree with its
//! aggregate frequency. Every step removes the two lightest candidates and
//! joins them under a new branch, prepending `0` to the codes of the first
//! and `1` to the codes of the second. Codes therefore come out of the same
//! pass that builds the tree; the most recently prepended bit is the first
//! bit of the final code.
//!
//! ## Tie-breaking
//!
//! Candidates are ordered by `(frequency, creation sequence)`. Leaves are
//! numbered in order of first appearance in the input and every merged
//! branch takes the next number after all existing candidates, so among
//! equal frequencies the oldest candidate is removed first. The rule is
//! fixed, which makes the produced frames byte-for-byte reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use bitvec::prelude::*;
use huffpress_core::{Error, InputShape, Result};
use tracing::trace;

use crate::frequency::{FrequencyTable, MAX_SYMBOLS};

/// A code path, first bit first.
pub type Code = BitVec<u8, Msb0>;

/// Borrowed view of a code path or bitstream.
pub type Bits = BitSlice<u8, Msb0>;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one original byte.
    Leaf(u8),
    /// Inner node; child 0 is reached on bit `0`, child 1 on bit `1`.
    Branch(Box<Node>, Box<Node>),
}

impl Node {
    /// Join two sub-trees under a new branch.
    pub fn branch(zero: Node, one: Node) -> Self {
        Node::Branch(Box::new(zero), Box::new(one))
    }

    /// Child selected by `bit`, or `None` for a leaf.
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(zero, one) => Some(if bit { one } else { zero }),
        }
    }

    /// Number of leaves under this node.
    pub fn leaves(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(_) => count += 1,
                Node::Branch(zero, one) => {
                    stack.push(one);
                    stack.push(zero);
                }
            }
        }
        count
    }
}

/// A complete Huffman tree.
///
/// The root is implicit: for two or more symbols the first bit of every code
/// selects one of the two top-level branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    /// No symbols at all.
    Empty,
    /// One distinct byte, coded as the single bit `0`.
    Single(u8),
    /// Two top-level branches selected by the first bit.
    Split { zero: Node, one: Node },
}

impl HuffmanTree {
    /// Number of distinct symbols the tree can emit.
    pub fn symbols(&self) -> usize {
        match self {
            HuffmanTree::Empty => 0,
            HuffmanTree::Single(_) => 1,
            HuffmanTree::Split { zero, one } => zero.leaves() + one.leaves(),
        }
    }

    /// Top-level branch selected by the first bit of a code.
    #[inline]
    pub fn root_child(&self, bit: bool) -> Option<&Node> {
        match self {
            HuffmanTree::Split { zero, one } => Some(if bit { one } else { zero }),
            _ => None,
        }
    }

    /// Derive the code table by walking the tree.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        match self {
            HuffmanTree::Empty => {}
            HuffmanTree::Single(byte) => table.codes[*byte as usize].push(false),
            HuffmanTree::Split { zero, one } => {
                let mut stack = vec![(one, bits![u8, Msb0; 1].to_bitvec())];
                stack.push((zero, bits![u8, Msb0; 0].to_bitvec()));

                while let Some((node, path)) = stack.pop() {
                    match node {
                        Node::Leaf(byte) => table.codes[*byte as usize] = path,
                        Node::Branch(z, o) => {
                            let mut one_path = path.clone();
                            one_path.push(true);
                            stack.push((&**o, one_path));

                            let mut zero_path = path;
                            zero_path.push(false);
                            stack.push((&**z, zero_path));
                        }
                    }
                }
            }
        }
        table
    }
}

/// Byte to code path mapping.
///
/// An empty path marks an absent byte; every present byte has a code of at
/// least one bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Code>,
}

impl CodeTable {
    fn new() -> Self {
        Self {
            codes: vec![Code::new(); MAX_SYMBOLS],
        }
    }

    /// Code path for `byte`, if it has one.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<&Bits> {
        let code = &self.codes[byte as usize];
        if code.is_empty() {
            None
        } else {
            Some(code.as_bitslice())
        }
    }

    /// Number of bytes with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }

    /// True if no byte has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_empty())
    }

    /// `(byte, code)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Bits)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(byte, code)| (byte as u8, code.as_bitslice()))
    }

    /// Longest code length in bits.
    pub fn max_code_len(&self) -> usize {
        self.codes.iter().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Total packed length in bits for data with these frequencies.
    pub fn encoded_bits(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .map(|(byte, count)| count * self.codes[byte as usize].len() as u64)
            .sum()
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Bits> = self.iter().map(|(_, code)| code).collect();
        codes.iter().enumerate().all(|(i, &a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, &b)| i == j || !b.starts_with(a))
        })
    }

    fn prepend(&mut self, symbols: &[u8], bit: bool) {
        for &byte in symbols {
            self.codes[byte as usize].insert(0, bit);
        }
    }
}

/// Builder candidate: a sub-tree with its aggregate frequency.
#[derive(Debug)]
struct Candidate {
    weight: u64,
    seq: usize,
    node: Node,
    symbols: Vec<u8>,
}

impl Candidate {
    fn key(&self) -> (u64, usize) {
        (self.weight, self.seq)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Weights combined by one builder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Weight of the candidate placed under bit `0`.
    pub zero_weight: u64,
    /// Weight of the candidate placed under bit `1`.
    pub one_weight: u64,
}

/// Incremental Huffman tree builder.
#[derive(Debug)]
pub struct TreeBuilder {
    heap: BinaryHeap<Reverse<Candidate>>,
    codes: CodeTable,
    next_seq: usize,
}

impl TreeBuilder {
    /// Seed the working set with one leaf per distinct byte.
    ///
    /// Needs at least two distinct bytes; fewer is reported as
    /// [`Error::UnsupportedInputShape`].
    pub fn new(freq: &FrequencyTable) -> Result<Self> {
        let mut symbols = freq.iter();
        match (symbols.next(), symbols.next()) {
            (None, _) => return Err(Error::unsupported_shape(InputShape::Empty)),
            (Some((byte, _)), None) => {
                return Err(Error::unsupported_shape(InputShape::SingleSymbol(byte)))
            }
            _ => {}
        }

        let heap: BinaryHeap<_> = freq
            .iter()
            .enumerate()
            .map(|(seq, (byte, weight))| {
                Reverse(Candidate {
                    weight,
                    seq,
                    node: Node::Leaf(byte),
                    symbols: vec![byte],
                })
            })
            .collect();
        let next_seq = heap.len();

        Ok(Self {
            heap,
            codes: CodeTable::new(),
            next_seq,
        })
    }

    /// Candidates still in the working set.
    pub fn remaining(&self) -> usize {
        self.heap.len()
    }

    /// Combine the two lightest candidates while more than two remain.
    ///
    /// Returns `None` once only the two top-level branches are left.
    pub fn step(&mut self) -> Option<Merge> {
        if self.heap.len() <= 2 {
            return None;
        }
        let (zero, one) = self.take_pair()?;
        let merge = Merge {
            zero_weight: zero.weight,
            one_weight: one.weight,
        };

        let mut symbols = zero.symbols;
        symbols.extend_from_slice(&one.symbols);
        let merged = Candidate {
            weight: zero.weight + one.weight,
            seq: self.next_seq,
            node: Node::branch(zero.node, one.node),
            symbols,
        };
        self.next_seq += 1;

        trace!(
            zero = merge.zero_weight,
            one = merge.one_weight,
            remaining = self.heap.len() + 1,
            "merged candidates"
        );
        self.heap.push(Reverse(merged));
        Some(merge)
    }

    /// Run the remaining steps and split the last two candidates into the
    /// tree's top-level branches.
    pub fn finish(mut self) -> Result<(HuffmanTree, CodeTable)> {
        while self.step().is_some() {}

        let (zero, one) = self
            .take_pair()
            .ok_or_else(|| Error::invalid_input("tree builder needs two candidates"))?;
        let tree = HuffmanTree::Split {
            zero: zero.node,
            one: one.node,
        };
        Ok((tree, self.codes))
    }

    /// Pop the two lightest candidates and prepend their branch bits.
    fn take_pair(&mut self) -> Option<(Candidate, Candidate)> {
        let Reverse(zero) = self.heap.pop()?;
        let Reverse(one) = self.heap.pop()?;
        self.codes.prepend(&zero.symbols, false);
        self.codes.prepend(&one.symbols, true);
        Some((zero, one))
    }
}

/// Build the Huffman tree and its code table.
///
/// A single distinct byte becomes [`HuffmanTree::Single`] with the one-bit
/// code `0`. An empty table is rejected.
pub fn build(freq: &FrequencyTable) -> Result<(HuffmanTree, CodeTable)> {
    match TreeBuilder::new(freq) {
        Ok(builder) => builder.finish(),
        Err(Error::UnsupportedInputShape(InputShape::SingleSymbol(byte))) => {
            let tree = HuffmanTree::Single(byte);
            let codes = tree.code_table();
            Ok((tree, codes))
        }
        Err(e) => Err(e),
    }
}
