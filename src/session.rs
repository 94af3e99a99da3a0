//! Interactive sessions: request parsing, session state, activity log.
//!
//! A session owns the long-lived tree and code book built from one source
//! text and answers encode/decode requests one at a time. Per-request
//! errors are surfaced to the caller and leave the session usable;
//! everything answered successfully lands in the activity log for the
//! final report.

use thiserror::Error;

use crate::code::CodeBook;
use crate::codec;
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::report;
use crate::tree::HuffmanTree;

/// One interactive request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Encode a word into its bit string.
    Encode(Vec<u8>),
    /// Decode a bit sequence back into text.
    Decode(Vec<u8>),
    /// End the session.
    Exit,
}

/// A request line that could not be understood.
///
/// Never fatal: the caller reports it and prompts again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The command word was not one of encode, decode or exit.
    #[error("unrecognized command {0:?}; expected encode, decode or exit")]
    UnrecognizedCommand(String),

    /// An encode request without a word to encode.
    #[error("encode needs a word, e.g. encode abba")]
    MissingWord,

    /// A decode request without a bit string.
    #[error("decode needs a bit string, e.g. decode 0110")]
    MissingBits,

    /// A decode argument with characters other than '0' and '1'.
    #[error("bit strings may only contain '0' and '1'")]
    NonBinary,

    /// An input line with no command on it.
    #[error("empty request")]
    Empty,
}

impl Request {
    /// Parse one input line.
    ///
    /// The command word is case-insensitive; everything after the first
    /// whitespace is the argument. `quit` is accepted as an alias for
    /// `exit`.
    pub fn parse(line: &str) -> std::result::Result<Request, RequestError> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "" => Err(RequestError::Empty),
            "encode" => {
                if argument.is_empty() {
                    Err(RequestError::MissingWord)
                } else {
                    Ok(Request::Encode(argument.as_bytes().to_vec()))
                }
            }
            "decode" => {
                if argument.is_empty() {
                    Err(RequestError::MissingBits)
                } else {
                    parse_bits(argument)
                        .map(Request::Decode)
                        .ok_or(RequestError::NonBinary)
                }
            }
            "exit" | "quit" => Ok(Request::Exit),
            _ => Err(RequestError::UnrecognizedCommand(command.to_string())),
        }
    }
}

/// Parse a '0'/'1' string into bits, `None` on any other character.
pub fn parse_bits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| match b {
            b'0' => Some(0),
            b'1' => Some(1),
            _ => None,
        })
        .collect()
}

/// Render bits as a '0'/'1' string.
pub fn format_bits(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// One successfully answered request, kept for the final report.
#[derive(Debug, Clone)]
pub enum Activity {
    /// A word was encoded into a bit string.
    Encoded {
        /// The word as typed.
        word: String,
        /// Its Huffman code.
        bits: String,
    },
    /// A bit string was decoded into text.
    Decoded {
        /// The bit string as typed.
        bits: String,
        /// The decoded text.
        text: String,
    },
}

/// A Huffman coding session.
///
/// Holds the frequency table, tree and code book built once from the
/// source text, plus the log of answered requests. All state after
/// construction is read-only except the log.
pub struct Session {
    freq: FrequencyTable,
    tree: HuffmanTree,
    book: CodeBook,
    log: Vec<Activity>,
}

impl Session {
    /// Build a session from raw source text: collect frequencies, build
    /// the tree, derive the code book.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyInput`] if `text` is empty.
    pub fn new(text: &[u8]) -> Result<Self> {
        let freq = FrequencyTable::collect(text);
        let tree = HuffmanTree::build(&freq)?;
        let book = CodeBook::derive(&tree);
        log::info!(
            "session ready: {} bytes, {} distinct symbols",
            freq.total(),
            freq.distinct()
        );
        Ok(Self {
            freq,
            tree,
            book,
            log: Vec::new(),
        })
    }

    /// Encode `word` and record the result in the activity log.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownSymbol`] for bytes outside the code
    /// book. Failed requests are not logged.
    pub fn encode_word(&mut self, word: &[u8]) -> Result<String> {
        let bits = format_bits(&codec::encode(word, &self.book)?);
        self.log.push(Activity::Encoded {
            word: String::from_utf8_lossy(word).into_owned(),
            bits: bits.clone(),
        });
        Ok(bits)
    }

    /// Decode `bits` and record the result in the activity log.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCode`] or
    /// [`crate::Error::TruncatedCode`] for malformed bit sequences. Failed
    /// requests are not logged.
    pub fn decode_bits(&mut self, bits: &[u8]) -> Result<String> {
        let text = codec::decode(bits, &self.tree)?;
        let text = String::from_utf8_lossy(&text).into_owned();
        self.log.push(Activity::Decoded {
            bits: format_bits(bits),
            text: text.clone(),
        });
        Ok(text)
    }

    /// The final textual report for this session.
    pub fn report(&self) -> String {
        report::render(&self.freq, &self.book, &self.log)
    }
}
