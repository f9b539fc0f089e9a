/// エンコーディングユーティリティ
/// base64 / hex / base32 文字列の判定と変換、SHA1 ハッシュ表記の判定

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::bitkit_common_rs::core::exceptions::{FormatError, UtilResult};

static BASE64_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap());
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());
static BASE32_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[A-Z2-7]+=*$").unwrap());

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// base64 文字列か（長さは4の倍数）
pub fn is_base64_str(value: &str) -> bool {
    if value.is_empty() || value.len() % 4 != 0 {
        return false;
    }
    BASE64_PATTERN.is_match(value)
}

/// 16進数文字列か
pub fn is_hex_str(value: &str) -> bool {
    !value.is_empty() && HEX_PATTERN.is_match(value)
}

/// base32 文字列か（大文字小文字は区別しない）
pub fn is_base32_str(value: &str) -> bool {
    !value.is_empty() && BASE32_PATTERN.is_match(value)
}

/// SHA1 の16進表記か
/// 例: magnet:?xt=urn:btih:7f3c78907acced299d059b2af1b67c2550dbd429
pub fn is_sha1_hex_str(hash: &str) -> bool {
    hash.len() == 40 && is_hex_str(hash)
}

/// SHA1 の base32 表記か
/// 例: magnet:?xt=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C
pub fn is_sha1_base32_str(hash: &str) -> bool {
    hash.len() == 32 && is_base32_str(hash)
}

pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

pub fn decode_hex(value: &str) -> UtilResult<Vec<u8>> {
    hex::decode(value).map_err(|e| FormatError::malformed("hex", e).into())
}

pub fn encode_base64(data: &[u8]) -> String {
    BASE64.encode(data)
}

pub fn decode_base64(value: &str) -> UtilResult<Vec<u8>> {
    BASE64
        .decode(value)
        .map_err(|e| FormatError::malformed("base64", e).into())
}

/// RFC 4648 base32 でエンコードする（'=' パディング付き）
pub fn encode_base32(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() + 4) / 5 * 8);

    for chunk in data.chunks(5) {
        let mut block = [0u8; 5];
        block[..chunk.len()].copy_from_slice(chunk);
        let value = block.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);

        // 40ビットのブロックを5ビットずつ、有効ビットを含む桁だけ出力する
        let symbols = (chunk.len() * 8 + 4) / 5;
        for i in 0..8 {
            if i < symbols {
                let index = ((value >> (35 - i * 5)) & 0x1F) as usize;
                out.push(BASE32_ALPHABET[index] as char);
            } else {
                out.push('=');
            }
        }
    }

    out
}

/// base32 文字列をデコードする（大文字小文字は区別しない）
pub fn decode_base32(value: &str) -> UtilResult<Vec<u8>> {
    let trimmed = value.trim_end_matches('=');
    if trimmed.len() != value.len() && value.len() % 8 != 0 {
        return Err(FormatError::malformed("base32", "パディング込みの長さが8の倍数ではありません").into());
    }
    // 最終ブロックの有効桁数は 2, 4, 5, 7 のいずれか
    if matches!(trimmed.len() % 8, 1 | 3 | 6) {
        return Err(FormatError::malformed("base32", format!("不正な長さ: {}", trimmed.len())).into());
    }

    let mut out = Vec::with_capacity(trimmed.len() * 5 / 8);
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for c in trimmed.chars() {
        let symbol = match c.to_ascii_uppercase() {
            upper @ 'A'..='Z' => upper as u32 - 'A' as u32,
            digit @ '2'..='7' => digit as u32 - '2' as u32 + 26,
            other => {
                return Err(FormatError::malformed("base32", format!("不正な文字: '{}'", other)).into());
            }
        };

        buffer = (buffer << 5) | symbol;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}
