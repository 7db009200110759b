//! Tree serialization.
//!
//! The tree is flattened into a pre-order token list and encoded with
//! bincode using varint integers. A `Branch` token is followed by its zero
//! sub-tree and then its one sub-tree. `Split` is written as a full tree
//! with an explicit root branch, `Single` as one leaf token and `Empty` as a
//! zero-length blob.

use bincode::Options;
use huffpress_core::{Error, Result, MAX_TREE_BYTES};
use serde::{Deserialize, Serialize};

use crate::frequency::MAX_SYMBOLS;
use crate::tree::{HuffmanTree, Node};

/// Most tokens a valid tree can produce: 256 leaves and 255 branches.
const MAX_TOKENS: usize = 2 * MAX_SYMBOLS - 1;

/// Pre-order tree token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Token {
    Branch,
    Leaf(u8),
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_varint_encoding()
}

/// Encode `tree` into an opaque blob of at most [`MAX_TREE_BYTES`] bytes.
pub fn serialize(tree: &HuffmanTree) -> Result<Vec<u8>> {
    let tokens = match tree {
        HuffmanTree::Empty => return Ok(Vec::new()),
        HuffmanTree::Single(byte) => vec![Token::Leaf(*byte)],
        HuffmanTree::Split { zero, one } => {
            let mut tokens = vec![Token::Branch];
            let mut stack = vec![one, zero];
            while let Some(node) = stack.pop() {
                match node {
                    Node::Leaf(byte) => tokens.push(Token::Leaf(*byte)),
                    Node::Branch(z, o) => {
                        tokens.push(Token::Branch);
                        stack.push(o);
                        stack.push(z);
                    }
                }
            }
            tokens
        }
    };

    let blob = options()
        .serialize(&tokens)
        .map_err(|e| Error::corrupted_with("tree serialization failed", *e))?;

    if blob.len() > MAX_TREE_BYTES {
        return Err(Error::encoding_overflow(blob.len()));
    }
    Ok(blob)
}

/// Rebuild a tree from a blob produced by [`serialize`].
pub fn restore(blob: &[u8]) -> Result<HuffmanTree> {
    if blob.is_empty() {
        return Ok(HuffmanTree::Empty);
    }

    let tokens: Vec<Token> = options()
        .with_limit(MAX_TREE_BYTES as u64)
        .reject_trailing_bytes()
        .deserialize(blob)
        .map_err(|e| Error::corrupted_with("undecodable tree blob", *e))?;

    if tokens.is_empty() {
        return Err(Error::corrupted("tree blob holds no tokens"));
    }
    if tokens.len() > MAX_TOKENS {
        return Err(Error::corrupted(format!(
            "tree has {} tokens, at most {} allowed",
            tokens.len(),
            MAX_TOKENS
        )));
    }

    let mut seen = [false; MAX_SYMBOLS];
    let mut stack: Vec<Node> = Vec::with_capacity(MAX_SYMBOLS);

    for token in tokens.iter().rev() {
        match *token {
            Token::Leaf(byte) => {
                if std::mem::replace(&mut seen[byte as usize], true) {
                    return Err(Error::corrupted(format!(
                        "leaf 0x{:02x} appears twice",
                        byte
                    )));
                }
                stack.push(Node::Leaf(byte));
            }
            Token::Branch => {
                let (Some(zero), Some(one)) = (stack.pop(), stack.pop()) else {
                    return Err(Error::corrupted("branch is missing a child"));
                };
                stack.push(Node::branch(zero, one));
            }
        }
    }

    let root = match (stack.pop(), stack.is_empty()) {
        (Some(root), true) => root,
        _ => return Err(Error::corrupted("token list is not a single tree")),
    };

    Ok(match root {
        Node::Leaf(byte) => HuffmanTree::Single(byte),
        Node::Branch(zero, one) => HuffmanTree::Split {
            zero: *zero,
            one: *one,
        },
    })
}
