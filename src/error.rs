//! Error types for Huffman coding sessions.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text contained no bytes, so no tree can be built.
    #[error("empty input: nothing to build a tree from")]
    EmptyInput,

    /// An encode request referenced a byte absent from the code book.
    #[error("unknown symbol: byte '{}' does not occur in the source text", .0.escape_ascii())]
    UnknownSymbol(u8),

    /// A decode walk fell off the tree.
    #[error("invalid code: bit at offset {offset} leads nowhere in the tree")]
    InvalidCode {
        /// Zero-based offset of the offending bit.
        offset: usize,
    },

    /// The decode input ended in the middle of a code.
    #[error("truncated code: bit sequence ends mid-path")]
    TruncatedCode,

    /// An I/O error occurred while reading the source or writing the report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
