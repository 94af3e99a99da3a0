//! Encoding and decoding against a built code.
//!
//! Encoding is a table lookup per byte and consumes the [`CodeBook`];
//! decoding follows bits through the [`HuffmanTree`] directly, because a
//! prefix code is resolved by walking edges, not by table lookup.
//!
//! Bits are represented as one `u8` per bit, value 0 or 1.

use crate::code::CodeBook;
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Encode `word` by concatenating the code of each of its bytes.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] naming the first byte of `word` that
/// never occurred in the source text. The request fails as a whole; no
/// partial output is produced.
pub fn encode(word: &[u8], book: &CodeBook) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    for &symbol in word {
        match book.get(symbol) {
            Some(code) => bits.extend_from_slice(code),
            None => return Err(Error::UnknownSymbol(symbol)),
        }
    }
    Ok(bits)
}

/// Decode a bit sequence by walking `tree` from the root.
///
/// Bit 0 descends left and bit 1 descends right; landing on a leaf emits
/// its byte and resets the walk to the root. A tree whose root is itself a
/// leaf accepts only 0 bits, one decoded byte per bit.
///
/// # Errors
///
/// Returns [`Error::InvalidCode`] when a bit leads off the tree, and
/// [`Error::TruncatedCode`] when the input ends between code boundaries.
pub fn decode(bits: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut out = Vec::new();

    // Single-symbol tree: the root has no children to descend into, so
    // the only valid code is the policy code 0.
    if let Node::Leaf { symbol, .. } = root {
        for (offset, &bit) in bits.iter().enumerate() {
            if bit != 0 {
                return Err(Error::InvalidCode { offset });
            }
            out.push(*symbol);
        }
        return Ok(out);
    }

    let mut cursor = root;
    for &bit in bits {
        cursor = match cursor {
            Node::Internal { left, right, .. } => {
                if bit == 0 {
                    left
                } else {
                    right
                }
            }
            Node::Leaf { .. } => unreachable!("cursor resets to the root at every leaf"),
        };

        if let Node::Leaf { symbol, .. } = cursor {
            out.push(*symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(Error::TruncatedCode);
    }
    Ok(out)
}
