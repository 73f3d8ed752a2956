//! E2E Test Suite 01: Block One-Shot API
//!
//! Exercises the public crate surface end to end:
//! - worst_case_dst_len
//! - block_encode / encode_to_vec
//! - block_decode / decode_to_vec
//! - BlockError statuses across operations
//!
//! These tests drive the API exactly as a caller would: size the
//! destination with the worst case, compress, decompress, compare.

extern crate lz4_block;

use lz4_block::{
    block_decode, block_encode, decode_to_vec, encode_to_vec, worst_case_dst_len, BlockError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Round-trip `original` through the slice API and assert equality.
fn roundtrip(original: &[u8]) {
    let mut compressed = vec![0u8; worst_case_dst_len(original.len()).unwrap()];
    let n = block_encode(original, &mut compressed).expect("compression should succeed");

    let mut restored = vec![0u8; original.len()];
    let m = block_decode(&compressed[..n], &mut restored).expect("decompression should succeed");

    assert_eq!(m, original.len());
    assert_eq!(&restored[..m], original);
}

/// Deterministic pseudo-random bytes (no matches to speak of).
fn noise(len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let mut state = 0x9E37_79B9u32;
    for b in out.iter_mut() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        *b = (state >> 24) as u8;
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: round-trips across data shapes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn roundtrip_typical_text() {
    roundtrip(&b"The quick brown fox jumps over the lazy dog. ".repeat(20));
}

#[test]
fn roundtrip_incompressible_noise() {
    roundtrip(&noise(10_000));
}

#[test]
fn roundtrip_long_byte_runs() {
    roundtrip(&[0u8; 100_000]);
    roundtrip(&[0xFFu8; 313]);
}

#[test]
fn roundtrip_short_inputs() {
    for len in 0..=32 {
        roundtrip(&b"abcdabcdabcdabcdabcdabcdabcdabcd"[..len]);
    }
}

#[test]
fn roundtrip_periodic_patterns() {
    // Period lengths straddling the small-offset copy paths.
    for period in [1usize, 2, 3, 4, 5, 7, 8, 13, 64, 255] {
        let unit: Vec<u8> = (0..period).map(|i| (i * 37) as u8).collect();
        let mut data = Vec::new();
        while data.len() < 4096 {
            data.extend_from_slice(&unit);
        }
        roundtrip(&data);
    }
}

#[test]
fn roundtrip_crossing_the_64k_window() {
    // Repeats farther apart than MAX_DISTANCE cannot be referenced; the
    // encoder must fall back to fresh literals/matches and still round-trip.
    let mut data = noise(70_000);
    let head: Vec<u8> = data[..1000].to_vec();
    data.extend_from_slice(&head);
    roundtrip(&data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: worst_case_dst_len is always adequate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn worst_case_buffer_always_suffices() {
    for &size in &[0usize, 1, 10, 100, 1000, 10_000, 100_000] {
        let data = noise(size);
        let bound = worst_case_dst_len(size).unwrap();
        let mut dst = vec![0u8; bound];
        let n = block_encode(&data, &mut dst)
            .unwrap_or_else(|e| panic!("encode of {size} noise bytes failed: {e}"));
        assert!(
            n <= bound,
            "compressed size {n} exceeds bound {bound} for input size {size}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: error statuses through the public API
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_error_statuses() {
    let data = b"some plain input";
    let bound = worst_case_dst_len(data.len()).unwrap();

    let mut too_short = vec![0u8; bound - 1];
    assert_eq!(
        block_encode(data, &mut too_short),
        Err(BlockError::DstTooShort)
    );
    assert_eq!(
        block_encode(data, &mut too_short).unwrap_err().message(),
        "dst is too short"
    );
}

#[test]
fn decode_error_statuses() {
    let mut dst = [0u8; 16];
    assert_eq!(block_decode(&[], &mut dst), Err(BlockError::InvalidData));
    assert_eq!(
        block_decode(&[0x00, 0x00, 0x00], &mut dst),
        Err(BlockError::InvalidData)
    );

    // Valid block, too little room.
    let compressed = encode_to_vec(b"0123456789abcdef0123456789abcdef").unwrap();
    let mut tiny = [0u8; 4];
    assert_eq!(
        block_decode(&compressed, &mut tiny),
        Err(BlockError::DstTooShort)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: the Vec convenience layer agrees with the slice API
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn vec_helpers_roundtrip() {
    let original = b"helper layer: same bytes in, same bytes out".repeat(8);
    let compressed = encode_to_vec(&original).expect("encode_to_vec failed");
    let restored = decode_to_vec(&compressed, original.len()).expect("decode_to_vec failed");
    assert_eq!(restored, original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: calls are independent — concurrent use on disjoint buffers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn concurrent_roundtrips_on_disjoint_buffers() {
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data: Vec<u8> = (0..20_000)
                    .map(|i| (i as u8).wrapping_mul(seed.wrapping_add(3)))
                    .collect();
                let compressed = encode_to_vec(&data).expect("encode failed");
                let restored = decode_to_vec(&compressed, data.len()).expect("decode failed");
                assert_eq!(restored, data);
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker thread panicked");
    }
}
