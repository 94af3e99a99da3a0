use huffman::codec::{decode, encode};
use huffman::{CodeBook, FrequencyTable, HuffmanTree};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_words_drawn_from_the_text(
        text in prop::collection::vec(any::<u8>(), 1..200),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..64),
    ) {
        let freq = FrequencyTable::collect(&text);
        let tree = HuffmanTree::build(&freq).unwrap();
        let book = CodeBook::derive(&tree);

        // Words built from bytes of the text always have codes.
        let word: Vec<u8> = picks.iter().map(|ix| text[ix.index(text.len())]).collect();

        let bits = encode(&word, &book).unwrap();
        let decoded = decode(&bits, &tree).unwrap();
        prop_assert_eq!(word, decoded);
    }

    #[test]
    fn no_code_prefixes_another(
        text in prop::collection::vec(any::<u8>(), 2..200),
    ) {
        let freq = FrequencyTable::collect(&text);
        let tree = HuffmanTree::build(&freq).unwrap();
        let book = CodeBook::derive(&tree);

        let codes: Vec<(u8, &[u8])> = book.iter().collect();
        for (a, code_a) in &codes {
            for (b, code_b) in &codes {
                if a != b {
                    prop_assert!(
                        !code_b.starts_with(code_a),
                        "code of {} prefixes code of {}", a, b
                    );
                }
            }
        }
    }

    #[test]
    fn frequency_counts_sum_to_text_length(
        text in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let freq = FrequencyTable::collect(&text);
        let sum: u64 = freq.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(sum, text.len() as u64);
    }

    #[test]
    fn single_symbol_texts_still_roundtrip(
        symbol in any::<u8>(),
        text_len in 1usize..64,
        word_len in 0usize..32,
    ) {
        let text = vec![symbol; text_len];
        let freq = FrequencyTable::collect(&text);
        let tree = HuffmanTree::build(&freq).unwrap();
        let book = CodeBook::derive(&tree);

        let code = book.get(symbol).unwrap();
        prop_assert!(!code.is_empty());

        let word = vec![symbol; word_len];
        let bits = encode(&word, &book).unwrap();
        prop_assert_eq!(decode(&bits, &tree).unwrap(), word);
    }

    #[test]
    fn arbitrary_bit_noise_never_panics(
        text in prop::collection::vec(any::<u8>(), 1..100),
        noise in prop::collection::vec(0u8..2, 0..200),
    ) {
        let freq = FrequencyTable::collect(&text);
        let tree = HuffmanTree::build(&freq).unwrap();

        // Decoding noise may fail, but must fail with a reported error,
        // never a panic or a silent wrong answer on re-encode.
        let book = CodeBook::derive(&tree);
        if let Ok(decoded) = decode(&noise, &tree) {
            let bits = encode(&decoded, &book).unwrap();
            prop_assert_eq!(bits, noise);
        }
    }
}
