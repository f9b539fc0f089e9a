//! バイト列とビット配列
//! ビット配列本体と、それが利用するバイト列変換ユーティリティ

pub mod bit_array;
pub mod bytes_util;

// 便利な再エクスポート
pub use bit_array::{BitArray, BitOrder};
pub use bytes_util::{
    bin_str_to_bytes, bytes_to_bin_str, bytes_to_hex_str, bytes_to_int, chunk_bytes,
    hex_str_to_bytes, int_to_bytes, xor, xor_u8,
};
