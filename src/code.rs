//! Code table derivation.
//!
//! The third build stage: one depth-first walk of the finished tree,
//! recording the root-to-leaf path of every byte. Left descents append a 0
//! bit, right descents a 1 bit. Leaf paths are prefix-free by construction,
//! so the resulting codes need no separate disambiguation.

use crate::tree::{HuffmanTree, Node};

/// Map from byte value to its prefix-free bit path.
///
/// Derived once per built tree by [`CodeBook::derive`] and read-only
/// afterwards. Every byte present in the source text has exactly one
/// non-empty code.
#[derive(Debug, Clone)]
pub struct CodeBook {
    // Indexed by byte value; the empty vector marks an absent byte. Codes
    // of present bytes are never empty (a lone root leaf gets [0]), so the
    // sentinel is unambiguous.
    codes: Vec<Vec<u8>>,
}

impl CodeBook {
    /// Derive the code of every leaf by walking `tree` depth first.
    ///
    /// A root that is itself a leaf gets the one-bit code `0`: the naive
    /// path would be empty, which cannot be encoded or decoded.
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut codes = vec![Vec::new(); 256];
        walk(tree.root(), Vec::new(), &mut codes);
        Self { codes }
    }

    /// Code for `symbol`, or `None` if it never occurred in the source.
    pub fn get(&self, symbol: u8) -> Option<&[u8]> {
        let code = &self.codes[symbol as usize];
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    /// Number of bytes that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }

    /// True when no byte has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_empty())
    }

    /// Coded bytes and their codes, in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(byte, code)| (byte as u8, code.as_slice()))
    }
}

fn walk(node: &Node, prefix: Vec<u8>, codes: &mut [Vec<u8>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = if prefix.is_empty() { vec![0] } else { prefix };
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            walk(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            walk(right, right_prefix, codes);
        }
    }
}
