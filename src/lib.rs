//! # Huffman Coding
//!
//! *Optimal prefix-free codes from byte frequencies.*
//!
//! ## Intuition First
//!
//! Imagine labelling boxes in a warehouse. If every label has the same
//! length, the labels on the most-used boxes are wastefully long. Give the
//! busiest boxes the shortest labels and the rare ones longer labels, and
//! the total reading time drops.
//!
//! Huffman coding does exactly this with bits: frequent bytes get short bit
//! strings, rare bytes get long ones. The trick is choosing labels so that
//! no label is the beginning of another (a *prefix-free* set), which lets a
//! reader split a stream of concatenated labels without any separators.
//!
//! ## The Problem
//!
//! A fixed-width code spends 8 bits on every byte regardless of how skewed
//! the distribution is. For text, where a handful of byte values carry most
//! of the mass, this leaves a large constant factor on the table. We want a
//! variable-length code that is unambiguous to decode and provably minimal
//! among symbol-by-symbol codes.
//!
//! ## Historical Context
//!
//! ```text
//! 1838  Morse       Shorter marks for frequent letters
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Top-down splitting: close, but suboptimal
//! 1952  Huffman     Bottom-up merging: optimal prefix codes
//! 1976  Rissanen    Arithmetic coding: fractional bits per symbol
//! 2014  Facebook    zstd pairs Huffman with newer entropy stages
//! ```
//!
//! David Huffman's key insight, in a 1952 MIT term paper, was to build the
//! code *bottom-up*: repeatedly merge the two least frequent symbols into a
//! combined pseudo-symbol. The greedy merge is provably optimal, where the
//! earlier top-down splitting approaches were not.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s$ with probabilities $p_s$, a code assigning length
//! $\ell_s$ to symbol $s$ has expected length
//!
//! ```text
//! L = \sum_s p_s \ell_s
//! ```
//!
//! Shannon's source coding theorem bounds any prefix-free code by the
//! entropy $H = -\sum_s p_s \log_2 p_s$, and the Huffman construction
//! achieves $H \le L < H + 1$.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ heap merges for $n$ distinct bytes.
//! - **Encode**: $O(1)$ table lookup per input byte.
//! - **Decode**: one tree edge per input bit.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: no frequencies means no tree; construction fails.
//! 2. **Unknown symbols**: a word containing a byte the source text never
//!    produced has no code, and the whole request is rejected.
//! 3. **Malformed bit streams**: decoding detects paths that fall off the
//!    tree and streams that end in the middle of a code.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`FrequencyTable`]: byte occurrence counts for a source text.
//! - [`HuffmanTree`]: the priority-merge construction, with a pinned FIFO
//!   tie-break so tree shape is deterministic.
//! - [`CodeBook`]: the byte-to-bits table derived from one tree walk.
//! - [`codec`]: encode against the book, decode against the tree.
//! - [`Session`]: an interactive encode/decode session with an activity
//!   log and a final textual report.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T., Thomas, J. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod report;
pub mod session;
pub mod tree;

pub use code::CodeBook;
pub use error::Error;
pub use freq::FrequencyTable;
pub use session::{Request, RequestError, Session};
pub use tree::HuffmanTree;
