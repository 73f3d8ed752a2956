#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Compress with the Vec-returning helper (handles bound calculation).
    // Fuzz inputs are far below the encoder's input cap, so this only
    // fails if the codec itself is broken.
    let compressed = lz4_block::encode_to_vec(data).expect("encode failed");

    // Decompress back, supplying the exact original length.
    let restored =
        lz4_block::decode_to_vec(&compressed, data.len()).expect("decode of own output failed");

    assert_eq!(
        restored,
        data,
        "block round-trip mismatch: {} bytes compressed to {} bytes",
        data.len(),
        compressed.len()
    );
});
