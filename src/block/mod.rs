//! LZ4 block compression and decompression.
//!
//! This module contains the core LZ4 block-format engine: a greedy one-shot
//! encoder driven by a single fixed-size hash table, and a single-pass
//! decoder that validates every length, offset, and buffer bound.

pub mod decode;
pub mod encode;
pub mod types;

// Re-export the most important public API items at the module level.
pub use decode::{block_decode, decode_to_vec};
pub use encode::{block_encode, encode_to_vec, worst_case_dst_len};
pub use types::{BlockError, BLOCK_DECODE_MAX_INCL_SRC_LEN, BLOCK_ENCODE_MAX_INCL_SRC_LEN};
