//! `lz4-block` — a pure-Rust codec for the LZ4 **block** compression format.
//!
//! The crate implements the symmetric pair of one-shot operations on whole
//! in-memory buffers: [`block_encode`] losslessly compresses a byte buffer
//! into a single LZ4 block and [`block_decode`] restores the original bytes.
//! Both run to completion without I/O, retain no state between calls, and
//! allocate nothing beyond the encoder's fixed-size hash table. The LZ4
//! frame format (magic number, checksums, content size) is a separate layer
//! and is not provided here.
//!
//! # Crate layout
//!
//! | Module          | Contents |
//! |-----------------|----------|
//! | `block::types`  | Format constants, byte-level primitives, the [`BlockError`] status type. |
//! | `block::encode` | Worst-case output sizing and the block encoder. |
//! | `block::decode` | The validating block decoder. |
//!
//! # Example
//!
//! ```
//! use lz4_block::{block_decode, block_encode, worst_case_dst_len};
//!
//! let src = b"an example of an example of an example";
//! let mut compressed = vec![0u8; worst_case_dst_len(src.len()).unwrap()];
//! let n = block_encode(src, &mut compressed).unwrap();
//!
//! let mut restored = vec![0u8; src.len()];
//! let m = block_decode(&compressed[..n], &mut restored).unwrap();
//! assert_eq!(&restored[..m], src);
//! ```

pub mod block;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::decode::{block_decode, decode_to_vec};
pub use block::encode::{block_encode, encode_to_vec, worst_case_dst_len};
pub use block::types::{
    BlockError, BLOCK_DECODE_MAX_INCL_SRC_LEN, BLOCK_ENCODE_MAX_INCL_SRC_LEN,
};
