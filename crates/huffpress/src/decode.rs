//! Tree-driven decoding of a bit sequence.

use huffpress_core::{Error, Result};

use crate::tree::{Bits, HuffmanTree, Node};

/// Walk `tree` bit by bit and collect the emitted bytes.
///
/// Every code must end exactly on a leaf. Running out of bits inside a
/// branch, a `1` under a single-symbol tree or any bit under an empty tree
/// is a [`Error::MalformedBitstream`]; no partial output is returned.
pub fn decode(tree: &HuffmanTree, bits: &Bits) -> Result<Vec<u8>> {
    match tree {
        HuffmanTree::Empty => {
            if bits.is_empty() {
                Ok(Vec::new())
            } else {
                Err(Error::malformed(format!(
                    "{} bits present for an empty tree",
                    bits.len()
                )))
            }
        }
        HuffmanTree::Single(byte) => match bits.first_one() {
            Some(offset) => Err(Error::malformed_at(
                "bit 1 under a single-symbol tree",
                offset,
            )),
            None => Ok(vec![*byte; bits.len()]),
        },
        HuffmanTree::Split { .. } => decode_split(tree, bits),
    }
}

fn decode_split(tree: &HuffmanTree, bits: &Bits) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bits.len() / 2);
    // None while at the implicit root.
    let mut cursor: Option<&Node> = None;

    for bit in bits.iter().by_vals() {
        let next = match cursor {
            None => tree.root_child(bit),
            Some(node) => node.child(bit),
        };
        match next {
            Some(Node::Leaf(byte)) => {
                out.push(*byte);
                cursor = None;
            }
            Some(node) => cursor = Some(node),
            None => return Err(Error::malformed("cursor left the tree")),
        }
    }

    if cursor.is_some() {
        return Err(Error::malformed_at(
            "ran out of bits inside a branch",
            bits.len(),
        ));
    }
    Ok(out)
}
