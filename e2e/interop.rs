//! E2E Test Suite 02: Interoperability
//!
//! Proves that this codec speaks the same wire format as independent LZ4
//! implementations:
//! - our encoder's output decodes under `lz4_flex` (a separate pure-Rust
//!   conformant block codec),
//! - `lz4_flex` output decodes under our decoder,
//! - the seashells reference vector is reproduced byte for byte.

extern crate lz4_block;

use lz4_block::{block_decode, decode_to_vec, encode_to_vec};

// ─────────────────────────────────────────────────────────────────────────────
// Reference corpus and its known-good encoding
// ─────────────────────────────────────────────────────────────────────────────

/// 158 bytes of alliterative ASCII with plenty of short repeats.
const SEASHELLS: &str = concat!(
    "She sells sea shells by the sea shore.\n",
    "The shells she sells are surely seashells.\n",
    "So if she sells shells on the seashore,\n",
    "I'm sure she sells seashore shells.\n",
);

/// The 114-byte block this encoder produces for [`SEASHELLS`].
#[rustfmt::skip]
const SEASHELLS_BLOCK: [u8; 114] = [
    0xF1, 0x01, 0x53, 0x68, 0x65, 0x20, 0x73, 0x65,
    0x6C, 0x6C, 0x73, 0x20, 0x73, 0x65, 0x61, 0x20,
    0x73, 0x68, 0x0B, 0x00, 0x41, 0x62, 0x79, 0x20,
    0x74, 0x18, 0x00, 0x00, 0x12, 0x00, 0x60, 0x6F,
    0x72, 0x65, 0x2E, 0x0A, 0x54, 0x0F, 0x00, 0x02,
    0x1D, 0x00, 0x10, 0x73, 0x0B, 0x00, 0x01, 0x27,
    0x00, 0xA0, 0x61, 0x72, 0x65, 0x20, 0x73, 0x75,
    0x72, 0x65, 0x6C, 0x79, 0x3D, 0x00, 0x02, 0x3C,
    0x00, 0x70, 0x2E, 0x0A, 0x53, 0x6F, 0x20, 0x69,
    0x66, 0x2D, 0x00, 0x03, 0x26, 0x00, 0x02, 0x18,
    0x00, 0x34, 0x20, 0x6F, 0x6E, 0x54, 0x00, 0x01,
    0x53, 0x00, 0x51, 0x2C, 0x0A, 0x49, 0x27, 0x6D,
    0x3E, 0x00, 0x08, 0x2B, 0x00, 0x03, 0x1D, 0x00,
    0x90, 0x20, 0x73, 0x68, 0x65, 0x6C, 0x6C, 0x73,
    0x2E, 0x0A,
];

/// Mixed corpora for the cross-decoder tests.
fn corpora() -> Vec<Vec<u8>> {
    let mut noise = vec![0u8; 32_768];
    let mut state = 0x0BAD_5EEDu32;
    for b in noise.iter_mut() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        *b = (state >> 24) as u8;
    }
    vec![
        SEASHELLS.as_bytes().to_vec(),
        b"a".repeat(10_000),
        b"The quick brown fox jumps over the lazy dog. ".repeat(500),
        noise,
        (0u8..=255).cycle().take(70_000).collect(),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1 — the reference vector
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn seashells_encodes_to_reference_block() {
    let compressed = encode_to_vec(SEASHELLS.as_bytes()).expect("encode failed");
    assert_eq!(compressed.len(), 114);
    assert_eq!(compressed, SEASHELLS_BLOCK);
}

#[test]
fn seashells_reference_block_decodes_to_text() {
    let restored = decode_to_vec(&SEASHELLS_BLOCK, SEASHELLS.len()).expect("decode failed");
    assert_eq!(restored, SEASHELLS.as_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2 — our encoder, independent decoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn our_blocks_decode_under_lz4_flex() {
    for original in corpora() {
        let compressed = encode_to_vec(&original).expect("encode failed");
        let restored = lz4_flex::block::decompress(&compressed, original.len())
            .expect("lz4_flex rejected a block produced by this encoder");
        assert_eq!(
            restored, original,
            "cross-decoded bytes differ from the original"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3 — independent encoder, our decoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn lz4_flex_blocks_decode_under_ours() {
    for original in corpora() {
        let compressed = lz4_flex::block::compress(&original);
        let mut restored = vec![0u8; original.len()];
        let n = block_decode(&compressed, &mut restored)
            .expect("this decoder rejected a block produced by lz4_flex");
        assert_eq!(n, original.len());
        assert_eq!(
            &restored[..n],
            &original[..],
            "decoded bytes differ from the original"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4 — full cross round-trip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cross_roundtrip_ours_to_flex_to_ours() {
    let original = b"interop: ours -> flex -> ours must be the identity ".repeat(100);

    let ours = encode_to_vec(&original).expect("encode failed");
    let middle =
        lz4_flex::block::decompress(&ours, original.len()).expect("lz4_flex decode failed");
    let theirs = lz4_flex::block::compress(&middle);
    let restored = decode_to_vec(&theirs, original.len()).expect("decode failed");

    assert_eq!(restored, original);
}
