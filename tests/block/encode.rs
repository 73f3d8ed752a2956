// Unit tests for the block encoder and worst-case sizing.
//
// Covers:
//   - worst_case_dst_len formula and the src-too-long pre-check
//   - The dst-too-short pre-check (fails even when output would have fit)
//   - All-literal emission for short inputs (format spot checks)
//   - Exact output bytes for a simple run-length input
//   - Offset validity and the final-literal tail restriction, via a
//     sequence walker over real encoder output
//   - Determinism and the worst-case output bound

use lz4_block::block::encode::{block_encode, encode_to_vec, worst_case_dst_len};
use lz4_block::block::types::{BlockError, BLOCK_ENCODE_MAX_INCL_SRC_LEN};
use lz4_block::block_decode;

/// Allocate a worst-case destination buffer for `src_len` bytes.
fn make_dst(src_len: usize) -> Vec<u8> {
    vec![0u8; worst_case_dst_len(src_len).unwrap()]
}

// ─────────────────────────────────────────────────────────────────────────────
// worst_case_dst_len
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn worst_case_small_sizes() {
    assert_eq!(worst_case_dst_len(0), Ok(16));
    assert_eq!(worst_case_dst_len(1), Ok(17));
    assert_eq!(worst_case_dst_len(255), Ok(272));
    assert_eq!(worst_case_dst_len(1000), Ok(1019));
}

#[test]
fn worst_case_at_cap() {
    // 0x7E000000 + 0x7E000000/255 + 16
    assert_eq!(
        worst_case_dst_len(BLOCK_ENCODE_MAX_INCL_SRC_LEN),
        Ok(0x7E7E_7E8E)
    );
}

#[test]
fn worst_case_over_cap_is_error() {
    assert_eq!(
        worst_case_dst_len(BLOCK_ENCODE_MAX_INCL_SRC_LEN + 1),
        Err(BlockError::SrcTooLong)
    );
    assert_eq!(worst_case_dst_len(usize::MAX), Err(BlockError::SrcTooLong));
}

// ─────────────────────────────────────────────────────────────────────────────
// Pre-checks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_dst_one_byte_short_is_error() {
    // The check is against the worst case, not the realized output, so even
    // a highly compressible input is rejected.
    let src = vec![b'a'; 1000];
    let mut dst = vec![0u8; worst_case_dst_len(src.len()).unwrap() - 1];
    assert_eq!(block_encode(&src, &mut dst), Err(BlockError::DstTooShort));
}

#[test]
fn encode_empty_dst_is_error() {
    let mut dst = [0u8; 0];
    assert_eq!(block_encode(b"x", &mut dst), Err(BlockError::DstTooShort));
}

#[test]
fn encode_src_over_cap_is_error() {
    // The src-too-long check runs before the dst check, so a tiny dst is fine.
    let src = vec![0u8; BLOCK_ENCODE_MAX_INCL_SRC_LEN + 1];
    let mut dst = [0u8; 64];
    assert_eq!(block_encode(&src, &mut dst), Err(BlockError::SrcTooLong));
}

// ─────────────────────────────────────────────────────────────────────────────
// All-literal emission (format spot checks)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_empty_input_is_single_zero_token() {
    let mut dst = make_dst(0);
    let n = block_encode(&[], &mut dst).unwrap();
    assert_eq!(n, 1);
    assert_eq!(dst[0], 0x00);
}

#[test]
fn encode_single_byte() {
    // Token 0x10 (one literal, no match) followed by the byte itself.
    let mut dst = make_dst(1);
    let n = block_encode(&[0x42], &mut dst).unwrap();
    assert_eq!(&dst[..n], &[0x10, 0x42]);
}

#[test]
fn encode_twelve_bytes_stays_literal() {
    // Inputs of 12 bytes or fewer skip the matcher entirely.
    let src = b"abcdefghijkl";
    let mut dst = make_dst(src.len());
    let n = block_encode(src, &mut dst).unwrap();
    assert_eq!(n, 13);
    assert_eq!(dst[0], 0xC0);
    assert_eq!(&dst[1..13], src);
}

#[test]
fn encode_thirteen_distinct_bytes_stays_literal() {
    // One byte past the short-input cutoff, but nothing matches: the scan
    // gives up and the whole input lands in the final literal run.
    let src = b"abcdefghijklm";
    let mut dst = make_dst(src.len());
    let n = block_encode(src, &mut dst).unwrap();
    assert_eq!(n, 14);
    assert_eq!(dst[0], 0xD0);
    assert_eq!(&dst[1..14], src);
}

// ─────────────────────────────────────────────────────────────────────────────
// Match emission
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_byte_run_exact_output() {
    // 28 × 'a'. The first window at offset 1 matches the table's zero entry
    // (a genuine position-0 match): one literal, then an offset-1 match of
    // length 22 (nibble 15 + extension 3), then the 5-byte literal tail.
    let src = [b'a'; 28];
    let mut dst = make_dst(src.len());
    let n = block_encode(&src, &mut dst).unwrap();
    assert_eq!(
        &dst[..n],
        &[0x1F, b'a', 0x01, 0x00, 0x03, 0x50, b'a', b'a', b'a', b'a', b'a']
    );
}

#[test]
fn encode_byte_run_roundtrip() {
    let src = [b'a'; 28];
    let compressed = encode_to_vec(&src).unwrap();
    let mut restored = [0u8; 28];
    let n = block_decode(&compressed, &mut restored).unwrap();
    assert_eq!(n, 28);
    assert_eq!(restored, src);
}

#[test]
fn encode_repetitive_text_compresses() {
    let src = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    let compressed = encode_to_vec(&src).unwrap();
    assert!(
        compressed.len() < src.len(),
        "repetitive text should shrink: {} -> {}",
        src.len(),
        compressed.len()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequence walker — structural invariants of encoder output
// ─────────────────────────────────────────────────────────────────────────────

/// Walk the sequences of a block, checking each copy offset against the
/// output produced so far. Returns (decoded_len, sequence_count,
/// final_literal_len).
fn walk_block(block: &[u8]) -> (usize, usize, usize) {
    let mut sp = 0usize;
    let mut decoded = 0usize;
    let mut sequences = 0usize;
    loop {
        sequences += 1;
        let token = block[sp];
        sp += 1;
        let mut literal_len = (token >> 4) as usize;
        if literal_len == 15 {
            loop {
                let b = block[sp] as usize;
                sp += 1;
                literal_len += b;
                if b != 255 {
                    break;
                }
            }
        }
        sp += literal_len;
        decoded += literal_len;
        if sp == block.len() {
            return (decoded, sequences, literal_len);
        }
        let off = block[sp] as usize | (block[sp + 1] as usize) << 8;
        sp += 2;
        assert!(
            (1..=65_535).contains(&off) && off <= decoded,
            "copy offset {off} invalid after {decoded} decoded bytes"
        );
        let mut match_len = (token & 15) as usize + 4;
        if match_len == 19 {
            loop {
                let b = block[sp] as usize;
                sp += 1;
                match_len += b;
                if b != 255 {
                    break;
                }
            }
        }
        decoded += match_len;
    }
}

#[test]
fn encode_offsets_and_tail_are_valid() {
    let byte_run = [b'a'; 1000];
    let periodic = b"abcdefgh".repeat(200);
    let corpora: [&[u8]; 4] = [
        b"She sells sea shells by the sea shore. The shells she sells are surely seashells.",
        &byte_run,
        &periodic,
        b"no matches here at all, or maybe a few here and there; here goes",
    ];
    for src in corpora {
        let block = encode_to_vec(src).unwrap();
        let (decoded, sequences, final_literal_len) = walk_block(&block);
        assert_eq!(decoded, src.len());
        if sequences > 1 {
            assert!(
                final_literal_len >= 5,
                "final literal run of {final_literal_len} bytes after a match"
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Determinism and the worst-case bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_is_deterministic() {
    let src = b"deterministic output check: repeated call must match exactly";
    let a = encode_to_vec(src).unwrap();
    let b = encode_to_vec(src).unwrap();
    assert_eq!(a, b);
}

#[test]
fn encode_output_within_worst_case() {
    // Incompressible-ish data expands, but never past the bound.
    let mut src = vec![0u8; 4096];
    let mut state = 0x2545_F491u32;
    for b in src.iter_mut() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        *b = (state >> 24) as u8;
    }
    let compressed = encode_to_vec(&src).unwrap();
    assert!(compressed.len() <= worst_case_dst_len(src.len()).unwrap());

    let mut restored = vec![0u8; src.len()];
    let n = block_decode(&compressed, &mut restored).unwrap();
    assert_eq!(&restored[..n], &src[..]);
}

#[test]
fn encode_to_vec_matches_slice_api() {
    let src = b"to_vec and the slice API must agree byte for byte, always";
    let from_vec = encode_to_vec(src).unwrap();
    let mut dst = make_dst(src.len());
    let n = block_encode(src, &mut dst).unwrap();
    assert_eq!(from_vec, &dst[..n]);
}
