/// バイト列ユーティリティ
/// XOR・2進/16進/整数変換・チャンク分割

use bitvec::prelude::*;
use num_bigint::BigUint;

use crate::bitkit_common_rs::core::exceptions::{DomainError, FormatError, UtilResult};

/// 2つのバイト列のXORを計算する
///
/// 長さが異なる場合は短い方の長さに切り詰める（長い側の余りは捨てる）。
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// 2つのバイト値のXORを1バイトの列として返す
pub fn xor_u8(a: u8, b: u8) -> Vec<u8> {
    vec![a ^ b]
}

/// バイト列を2進数文字列に変換する（1バイトにつき8文字、上位ビットから）
pub fn bytes_to_bin_str(value: &[u8]) -> String {
    value
        .view_bits::<Msb0>()
        .iter()
        .map(|bit| if *bit { '1' } else { '0' })
        .collect()
}

/// 2進数文字列をバイト列に変換する
///
/// Args:
///     value: '00000001' のような8の倍数長の2進数文字列
pub fn bin_str_to_bytes(value: &str) -> UtilResult<Vec<u8>> {
    if value.len() % 8 != 0 {
        return Err(FormatError::InvalidLength { unit: 8, actual: value.len() }.into());
    }
    if !value.bytes().all(|c| c == b'0' || c == b'1') {
        return Err(FormatError::NotBinaryString(value.to_string()).into());
    }

    let mut result = Vec::with_capacity(value.len() / 8);
    for chunk in value.as_bytes().chunks(8) {
        let byte = chunk
            .iter()
            .fold(0u8, |acc, &c| (acc << 1) | (c - b'0'));
        result.push(byte);
    }
    Ok(result)
}

/// バイト列をビッグエンディアンの符号なし整数として解釈する
pub fn bytes_to_int(value: &[u8]) -> BigUint {
    BigUint::from_bytes_be(value)
}

/// 1バイト値をバイト列に変換する
pub fn int_to_bytes(value: u8) -> Vec<u8> {
    vec![value]
}

/// バイト列を小文字の16進数文字列に変換する
pub fn bytes_to_hex_str(value: &[u8]) -> String {
    hex::encode(value)
}

/// 16進数文字列をバイト列に変換する
pub fn hex_str_to_bytes(value: &str) -> UtilResult<Vec<u8>> {
    hex::decode(value).map_err(|e| FormatError::malformed("hex", e).into())
}

/// バイト列を指定長のチャンクに分割する
///
/// 例: chunk_length = 4 のとき [1,2,3,4,5,6,7,8] => [[1,2,3,4], [5,6,7,8]]
/// データ長がチャンク長以下ならデータをそのまま1要素として返す（パディングなし）。
pub fn chunk_bytes(data: &[u8], chunk_length: usize) -> UtilResult<Vec<Vec<u8>>> {
    if chunk_length == 0 {
        return Err(DomainError::ZeroChunkLength.into());
    }

    if data.len() <= chunk_length {
        return Ok(vec![data.to_vec()]);
    }

    Ok(data.chunks(chunk_length).map(|chunk| chunk.to_vec()).collect())
}
