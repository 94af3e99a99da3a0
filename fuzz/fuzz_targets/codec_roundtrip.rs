#![no_main]
use huffman::codec::{decode, encode};
use huffman::{CodeBook, FrequencyTable, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (text, picks) = data;
    if text.is_empty() {
        return;
    }

    let freq = FrequencyTable::collect(&text);
    let tree = HuffmanTree::build(&freq).unwrap();
    let book = CodeBook::derive(&tree);

    // Words drawn from the text roundtrip exactly.
    let word: Vec<u8> = picks.iter().map(|&p| text[p as usize % text.len()]).collect();
    let bits = encode(&word, &book).unwrap();
    let decoded = decode(&bits, &tree).unwrap();
    assert_eq!(word, decoded);

    // Arbitrary bit noise must error cleanly, never panic.
    let noise: Vec<u8> = picks.iter().map(|&p| p & 1).collect();
    let _ = decode(&noise, &tree);
});
