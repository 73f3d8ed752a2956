//! LZ4 block compression — worst-case sizing and the one-shot encoder.
//!
//! The encoder is a single-pass greedy matcher over a 4096-entry hash table
//! of source offsets. Each compressed sequence is a literal run followed by
//! a match (16-bit offset + length); bytes that cannot participate in a
//! match are flushed as a final literal run.
//!
//! [`block_encode`] requires the destination to hold
//! [`worst_case_dst_len`] bytes up front — it fails with
//! [`BlockError::DstTooShort`] before compressing otherwise — so the
//! emission paths below never re-check destination bounds.
//!
//! See the [LZ4 block format specification] for the authoritative
//! description of the on-wire layout.
//!
//! [LZ4 block format specification]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md

use super::types::{
    hash4, longest_common_prefix, peek_u32le, BlockError, BLOCK_ENCODE_MAX_INCL_SRC_LEN,
    HASH_TABLE_LEN, LASTLITERALS, MAX_DISTANCE, MFLIMIT, MINMATCH, ML_BITS, ML_MASK, RUN_MASK,
};

// ─────────────────────────────────────────────────────────────────────────────
// Worst-case sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for `src_len` input bytes.
///
/// Fails with [`BlockError::SrcTooLong`] when `src_len` exceeds
/// [`BLOCK_ENCODE_MAX_INCL_SRC_LEN`]. The `+ 16` covers the token, offset,
/// and extension bytes of very small inputs and the trailing literal run;
/// at the input cap the result is 0x7E7E_7E8E, so the sum cannot overflow.
#[inline]
pub fn worst_case_dst_len(src_len: usize) -> Result<usize, BlockError> {
    if src_len > BLOCK_ENCODE_MAX_INCL_SRC_LEN {
        return Err(BlockError::SrcTooLong);
    }
    Ok(src_len + (src_len / 255) + 16)
}

// ─────────────────────────────────────────────────────────────────────────────
// Emission helper
// ─────────────────────────────────────────────────────────────────────────────

/// Write a literal-run token (high nibble) plus any 255-run extension bytes,
/// returning the advanced output cursor.
#[inline]
fn put_literal_len(dst: &mut [u8], mut dp: usize, literal_len: usize) -> usize {
    if literal_len < RUN_MASK as usize {
        dst[dp] = (literal_len as u8) << ML_BITS;
        dp += 1;
    } else {
        dst[dp] = (RUN_MASK << ML_BITS) as u8;
        dp += 1;
        let mut n = literal_len - RUN_MASK as usize;
        while n >= 255 {
            dst[dp] = 0xFF;
            dp += 1;
            n -= 255;
        }
        dst[dp] = n as u8;
        dp += 1;
    }
    dp
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot encoder
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst` as a single LZ4 block, returning the number of
/// bytes written.
///
/// The destination must hold at least `worst_case_dst_len(src.len())` bytes;
/// otherwise the call fails with [`BlockError::DstTooShort`] before any
/// compression work, even when the actual compressed form would have fit.
/// The up-front check is what keeps destination bounds out of the hot loop.
///
/// The hash table lives on this call's stack frame; nothing is retained
/// between calls.
pub fn block_encode(src: &[u8], dst: &mut [u8]) -> Result<usize, BlockError> {
    let worst_case = worst_case_dst_len(src.len())?;
    if worst_case > dst.len() {
        return Err(BlockError::DstTooShort);
    }

    let mut dp = 0usize;
    let mut literal_start = 0usize;

    // Breaking out of 'matching at any point skips to the final-literals
    // epilogue below, which encodes any remaining unmatched bytes.
    'matching: {
        // Inputs of MFLIMIT bytes or fewer have no match-eligible region.
        if src.len() <= MFLIMIT {
            break 'matching;
        }

        // A match may extend no further than LASTLITERALS bytes short of the
        // end of input, and no new match may start once the scan cursor is
        // within MFLIMIT - 1 bytes of it.
        let match_limit = src.len() - LASTLITERALS;
        let final_literals_limit = src.len() - (MFLIMIT - 1);

        // Maps hash4 of a 4-byte window to the most recent source offset at
        // which that window was seen. Slot value 0 doubles as "never
        // written"; the 4-byte comparison rejects the spurious position-0
        // candidates this produces.
        let mut hash_table = [0u32; HASH_TABLE_LEN];

        let mut sp = 0usize;
        loop {
            // ── Find a match ─────────────────────────────────────────────
            // Scan forward with an accelerating stride: 1 for the first 64
            // probes, then 2 for the next 64, and so on. Each probe hashes
            // one position ahead so the table lookup and the next hash
            // computation overlap.
            let mut step = 1usize;
            let mut step_counter = 1usize << 6;

            let mut next_sp = sp + 1;
            let mut next_hash = hash4(peek_u32le(src, next_sp));

            let mut match_off;
            loop {
                sp = next_sp;
                next_sp += step;
                step = step_counter >> 6;
                step_counter += 1;
                if next_sp > final_literals_limit {
                    break 'matching;
                }
                let slot = next_hash;
                match_off = hash_table[slot] as usize;
                next_hash = hash4(peek_u32le(src, next_sp));
                hash_table[slot] = sp as u32;

                // A candidate is a match iff its distance is encodable and
                // the 4-byte windows actually agree.
                if sp - match_off <= MAX_DISTANCE
                    && peek_u32le(src, sp) == peek_u32le(src, match_off)
                {
                    break;
                }
            }

            // ── Extend the match backwards ───────────────────────────────
            // Bytes between literal_start and sp that also precede the
            // earlier copy belong in the match, not the literal run.
            while sp > literal_start && match_off > 0 && src[sp - 1] == src[match_off - 1] {
                sp -= 1;
                match_off -= 1;
            }

            // ── Emit the token's literal half and the literal bytes ──────
            // The match half is ORed into the token once its length is
            // known.
            let mut token_pos = dp;
            let literal_len = sp - literal_start;
            dp = put_literal_len(dst, dp, literal_len);
            dst[dp..dp + literal_len].copy_from_slice(&src[literal_start..sp]);
            dp += literal_len;

            // ── Emit the match, then probe the position right after it ───
            loop {
                // Here sp is the start of the match's later copy, match_off
                // the start of its earlier copy, and token_pos the token
                // awaiting its match nibble.
                let copy_off = sp - match_off;
                dst[dp] = copy_off as u8;
                dst[dp + 1] = (copy_off >> 8) as u8;
                dp += 2;

                let adj_copy_len =
                    longest_common_prefix(src, sp + MINMATCH, match_off + MINMATCH, match_limit);
                if adj_copy_len < ML_MASK as usize {
                    dst[token_pos] |= adj_copy_len as u8;
                } else {
                    dst[token_pos] |= ML_MASK as u8;
                    let mut n = adj_copy_len - ML_MASK as usize;
                    while n >= 255 {
                        dst[dp] = 0xFF;
                        dp += 1;
                        n -= 255;
                    }
                    dst[dp] = n as u8;
                    dp += 1;
                }
                sp += MINMATCH + adj_copy_len;

                literal_start = sp;
                if sp >= final_literals_limit {
                    break 'matching;
                }

                // The scan skipped hashing the interior of the match; insert
                // one of the skipped windows to improve recall.
                hash_table[hash4(peek_u32le(src, sp - 2))] = (sp - 2) as u32;

                // If another match starts immediately, stay in this loop
                // with a fresh zero token (the sequence has no literals).
                let slot = hash4(peek_u32le(src, sp));
                let old_off = hash_table[slot] as usize;
                hash_table[slot] = sp as u32;
                if sp - old_off > MAX_DISTANCE || peek_u32le(src, sp) != peek_u32le(src, old_off)
                {
                    break;
                }
                match_off = old_off;
                token_pos = dp;
                dst[token_pos] = 0;
                dp += 1;
            }
        }
    }

    // ── Final-literals epilogue ──────────────────────────────────────────────
    // Everything from literal_start to the end of input, with no offset or
    // match part. Always present — an empty input yields the single token
    // byte 0x00.
    let final_literal_len = src.len() - literal_start;
    dp = put_literal_len(dst, dp, final_literal_len);
    dst[dp..dp + final_literal_len].copy_from_slice(&src[literal_start..]);
    dp += final_literal_len;

    Ok(dp)
}

/// Compress `src` into a freshly-allocated `Vec`, sized by
/// [`worst_case_dst_len`] and truncated to the compressed length.
pub fn encode_to_vec(src: &[u8]) -> Result<Vec<u8>, BlockError> {
    let mut dst = vec![0u8; worst_case_dst_len(src.len())?];
    let n = block_encode(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}
