//! Fuzz entry points for the jsonapi-core codec
//!
//! The libFuzzer targets in `fuzz/fuzz_targets` call into these functions.
//! From this directory:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run a target: cargo fuzz run fuzz_decoder (or fuzz_round_trip)

pub fn fuzz_decode(data: &[u8]) {
    use jsonapi_core::decoder::decode_document;

    // Try to decode - should never panic
    let _ = decode_document(data);
}

pub fn fuzz_round_trip(data: &[u8]) {
    use jsonapi_core::{decoder::decode_document, encoder::encode_document};

    // Anything that decodes must re-encode and decode to the same shape
    if let Ok(mut document) = decode_document(data) {
        let _ = document.verify_full_linkage(true);
        let encoded = encode_document(&document).expect("decoded document must encode");
        if let Ok(again) = decode_document(&encoded) {
            if !document.has_errors() {
                assert_eq!(again.shape(), document.shape());
            }
        }
    }
}
