//! Usage demo: encode a small text corpus, dump the block bytes, decode it
//! back.
//!
//! Run with:
//!   cargo run --example seashells

use lz4_block::{block_decode, block_encode, worst_case_dst_len};

const SEASHELLS: &str = concat!(
    "She sells sea shells by the sea shore.\n",
    "The shells she sells are surely seashells.\n",
    "So if she sells shells on the seashore,\n",
    "I'm sure she sells seashore shells.\n",
);

const ENC_BUFFER_SIZE: usize = 1024;
const DEC_BUFFER_SIZE: usize = 1024;

fn main() {
    let src = SEASHELLS.as_bytes();

    let worst_case = match worst_case_dst_len(src.len()) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("worst_case_dst_len failed: {e}");
            std::process::exit(1);
        }
    };
    if worst_case > ENC_BUFFER_SIZE {
        eprintln!("input is too long");
        std::process::exit(1);
    }

    let mut enc_buffer = [0u8; ENC_BUFFER_SIZE];
    let enc_len = match block_encode(src, &mut enc_buffer) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("block_encode failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Encoded {} bytes as {} bytes:", src.len(), enc_len);
    for (i, byte) in enc_buffer[..enc_len].iter().enumerate() {
        let column = i & 7;
        print!(
            "{}0x{:02X},{}",
            if column == 0 { "    " } else { " " },
            byte,
            if column == 7 || i + 1 == enc_len {
                "\n"
            } else {
                ""
            }
        );
    }

    let mut dec_buffer = [0u8; DEC_BUFFER_SIZE];
    let dec_len = match block_decode(&enc_buffer[..enc_len], &mut dec_buffer) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("block_decode failed: {e}");
            std::process::exit(1);
        }
    };

    println!("\nDecoded {} bytes as {} bytes:", enc_len, dec_len);
    print!("{}", String::from_utf8_lossy(&dec_buffer[..dec_len]));
}
