//! Final session report.
//!
//! Renders the per-byte frequencies, the probabilities, the full code
//! table, and the chronological activity log into one text document. The
//! byte-keyed sections iterate in ascending byte value so repeated runs
//! produce identical reports.

use std::fmt::Write as _;

use crate::code::CodeBook;
use crate::freq::FrequencyTable;
use crate::session::{format_bits, Activity};

/// Render the report.
///
/// Bytes print as ASCII escapes so control characters stay legible;
/// probabilities print with six decimal places.
pub fn render(freq: &FrequencyTable, book: &CodeBook, log: &[Activity]) -> String {
    let mut out = String::new();

    out.push_str("Character Frequencies:\n");
    for (symbol, count) in freq.iter() {
        let _ = writeln!(out, "'{}': {}", symbol.escape_ascii(), count);
    }

    out.push_str("\nCharacter Probabilities:\n");
    for (symbol, _) in freq.iter() {
        let _ = writeln!(
            out,
            "'{}': {:.6}",
            symbol.escape_ascii(),
            freq.probability(symbol)
        );
    }

    out.push_str("\nHuffman Codes:\n");
    for (symbol, code) in book.iter() {
        let _ = writeln!(out, "'{}': {}", symbol.escape_ascii(), format_bits(code));
    }

    for entry in log {
        match entry {
            Activity::Encoded { word, bits } => {
                let _ = writeln!(out, "\nEncoded '{word}' to Huffman code: {bits}");
            }
            Activity::Decoded { bits, text } => {
                let _ = writeln!(out, "\nDecoded Huffman code '{bits}' to text: {text}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HuffmanTree;

    fn fixtures(text: &[u8]) -> (FrequencyTable, CodeBook) {
        let freq = FrequencyTable::collect(text);
        let tree = HuffmanTree::build(&freq).unwrap();
        (freq, CodeBook::derive(&tree))
    }

    #[test]
    fn sections_appear_in_order() {
        let (freq, book) = fixtures(b"aab");
        let report = render(&freq, &book, &[]);
        let frequencies = report.find("Character Frequencies:").unwrap();
        let probabilities = report.find("Character Probabilities:").unwrap();
        let codes = report.find("Huffman Codes:").unwrap();
        assert!(frequencies < probabilities);
        assert!(probabilities < codes);
    }

    #[test]
    fn aab_report_lists_counts_probabilities_and_codes() {
        let (freq, book) = fixtures(b"aab");
        let report = render(&freq, &book, &[]);
        assert!(report.contains("'a': 2"));
        assert!(report.contains("'b': 1"));
        assert!(report.contains("'a': 0.666667"));
        assert!(report.contains("'b': 0.333333"));
        assert!(report.contains("'b': 0\n"));
        assert!(report.contains("'a': 1\n"));
    }

    #[test]
    fn control_characters_render_as_escapes() {
        let (freq, book) = fixtures(b"a\nb");
        let report = render(&freq, &book, &[]);
        assert!(report.contains("'\\n': 1"));
    }

    #[test]
    fn activity_log_renders_chronologically() {
        let (freq, book) = fixtures(b"aab");
        let log = vec![
            Activity::Encoded {
                word: "ab".into(),
                bits: "10".into(),
            },
            Activity::Decoded {
                bits: "01".into(),
                text: "ba".into(),
            },
        ];
        let report = render(&freq, &book, &log);
        let encoded = report.find("Encoded 'ab' to Huffman code: 10").unwrap();
        let decoded = report.find("Decoded Huffman code '01' to text: ba").unwrap();
        assert!(encoded < decoded);
    }
}
