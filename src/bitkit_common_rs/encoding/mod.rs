//! エンコーディング判定と変換

pub mod encode_util;

// 便利な再エクスポート
pub use encode_util::{
    decode_base32, decode_base64, decode_hex, encode_base32, encode_base64, encode_hex,
    is_base32_str, is_base64_str, is_hex_str, is_sha1_base32_str, is_sha1_hex_str,
};
