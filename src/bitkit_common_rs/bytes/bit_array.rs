/// ビット配列
/// 固定長バイト列の上にビット単位のアクセス・比較・XORを提供する
///
/// バイト順はビッグエンディアン（data[0] が最上位バイト）。
/// 比較はすべて符号なし多倍長整数としての値で行うため、
/// 先頭のゼロバイトは値に影響しない。

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::bitkit_common_rs::bytes::bytes_util;
use crate::bitkit_common_rs::core::exceptions::{
    DomainError, FormatError, RangeError, UtilError, UtilResult,
};

/// ビットインデックスの数え方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitOrder {
    /// 最終バイトの最下位ビットを 0 とする（右から左へ）
    #[default]
    Lowest,
    /// 先頭バイトの最上位ビットを 0 とする（左から右へ）
    Highest,
}

impl BitOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            BitOrder::Lowest => "lowest",
            BitOrder::Highest => "highest",
        }
    }
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BitOrder {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lowest" => Ok(BitOrder::Lowest),
            "highest" => Ok(BitOrder::Highest),
            _ => Err(FormatError::malformed("bit order", format!("'{}' (lowest|highest)", s)).into()),
        }
    }
}

/// ビットを含むバイトの位置
///
/// Lowest はバッファ末尾から、Highest は先頭から数える。
fn byte_index(byte_count: usize, bit_index: usize, order: BitOrder) -> usize {
    match order {
        BitOrder::Lowest => byte_count - 1 - bit_index / 8,
        BitOrder::Highest => bit_index / 8,
    }
}

/// バイト内のビット位置（最下位ビットを 0 とする）
fn bit_offset(bit_index: usize, order: BitOrder) -> u32 {
    let offset = (bit_index % 8) as u32;
    match order {
        BitOrder::Lowest => offset,
        BitOrder::Highest => 7 - offset,
    }
}

/// 値の前に 0 を詰めて min_bit_length 桁以上にする
fn pad_binary(binary: String, min_bit_length: usize) -> String {
    if binary.len() >= min_bit_length {
        return binary;
    }
    format!("{:0>width$}", binary, width = min_bit_length)
}

/// ビット単位でアクセスできる固定長バイト列
#[derive(Debug, Clone)]
pub struct BitArray {
    data: Vec<u8>,
}

impl BitArray {
    /// バイト列からそのまま生成する（空でもよい）
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// 2進数文字列から生成する
    ///
    /// 文字列はビッグエンディアンの整数として解釈され、
    /// ceil(len / 8) バイトに上位側をゼロ埋めして格納される。
    /// 例: "101" => [0b0000_0101]
    pub fn from_binary_string(data: &str) -> UtilResult<Self> {
        if !Self::is_binary_string(data) {
            return Err(FormatError::NotBinaryString(data.to_string()).into());
        }

        let bytes_length = (data.len() + 7) / 8;
        let padded = pad_binary(data.to_string(), bytes_length * 8);
        let bytes = bytes_util::bin_str_to_bytes(&padded)?;
        trace!("BitArray を生成: {} ビット -> {} バイト", data.len(), bytes.len());

        Ok(Self { data: bytes })
    }

    /// 整数から生成する
    ///
    /// Args:
    ///     value: 0 以上の整数
    ///     min_bit_length: 最小ビット長。値のビット長がこれより短ければ上位を 0 で埋める
    pub fn from_int(value: i64, min_bit_length: usize) -> UtilResult<Self> {
        if value < 0 {
            return Err(DomainError::Negative(value.to_string()).into());
        }

        Self::from_binary_string(&pad_binary(format!("{:b}", value), min_bit_length))
    }

    /// 多倍長整数から生成する（ネイティブ整数幅を超えるビット列用）
    pub fn from_big_int(value: &BigInt, min_bit_length: usize) -> UtilResult<Self> {
        if value.is_negative() {
            return Err(DomainError::Negative(value.to_string()).into());
        }

        Ok(Self::from_big_uint(value.magnitude(), min_bit_length))
    }

    /// 符号なし多倍長整数から生成する
    pub fn from_big_uint(value: &BigUint, min_bit_length: usize) -> Self {
        let natural_bit_length = (value.bits() as usize).max(1);
        let bit_length = natural_bit_length.max(min_bit_length);
        let bytes_length = (bit_length + 7) / 8;

        let magnitude = value.to_bytes_be();
        let mut data = vec![0u8; bytes_length - magnitude.len()];
        data.extend_from_slice(&magnitude);

        Self { data }
    }

    /// 空でなく '0' と '1' だけから成る文字列か
    pub fn is_binary_string(data: &str) -> bool {
        !data.is_empty() && data.bytes().all(|c| c == b'0' || c == b'1')
    }

    /// ビット長（常に 8 の倍数）
    pub fn len(&self) -> usize {
        self.data.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// 指定インデックスのビットを取得する
    pub fn get(&self, index: usize, order: BitOrder) -> UtilResult<bool> {
        self.check_index(index)?;
        Ok(self.bit(index, order))
    }

    /// 指定インデックスのビットを設定する
    pub fn set(&mut self, index: usize, value: bool, order: BitOrder) -> UtilResult<()> {
        self.check_index(index)?;

        let byte_index = byte_index(self.data.len(), index, order);
        let mask = 1u8 << bit_offset(index, order);
        if value {
            self.data[byte_index] |= mask;
        } else {
            self.data[byte_index] &= !mask;
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), RangeError> {
        if index >= self.len() {
            return Err(RangeError { index, length: self.len() });
        }
        Ok(())
    }

    // index は範囲内であること
    fn bit(&self, index: usize, order: BitOrder) -> bool {
        let byte = self.data[byte_index(self.data.len(), index, order)];
        byte & (1 << bit_offset(index, order)) != 0
    }

    /// 符号なし多倍長整数としての値
    pub fn to_big_int(&self) -> BigUint {
        BigUint::parse_bytes(self.to_string().as_bytes(), 2).unwrap_or_default()
    }

    pub fn equals(&self, other: &BitArray) -> bool {
        self == other
    }

    pub fn greater_than(&self, other: &BitArray) -> bool {
        self > other
    }

    pub fn greater_than_or_equal(&self, other: &BitArray) -> bool {
        self >= other
    }

    pub fn less_than(&self, other: &BitArray) -> bool {
        self < other
    }

    pub fn less_than_or_equal(&self, other: &BitArray) -> bool {
        self <= other
    }

    /// 同じバイト長のビット配列とのXORを新しいビット配列として返す
    ///
    /// バイト長が異なる場合は DomainError。
    pub fn xor(&self, other: &BitArray) -> UtilResult<BitArray> {
        if self.data.len() != other.data.len() {
            return Err(DomainError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            }
            .into());
        }

        Ok(Self {
            data: bytes_util::xor(&self.data, &other.data),
        })
    }

    /// 値が異なるビットのインデックス（Lowest 基準、昇順）
    pub fn diff(&self, other: &BitArray) -> UtilResult<Vec<usize>> {
        if self.len() != other.len() {
            return Err(DomainError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            }
            .into());
        }

        Ok((0..self.len())
            .filter(|&i| self.bit(i, BitOrder::Lowest) != other.bit(i, BitOrder::Lowest))
            .collect())
    }

    pub fn to_hex_string(&self) -> String {
        bytes_util::bytes_to_hex_str(&self.data)
    }

    /// 10進数表記
    pub fn to_int_string(&self) -> String {
        self.to_big_int().to_string()
    }

    // 先頭のゼロバイトを除いた部分。値が等しければ一致する
    fn significant_bytes(&self) -> &[u8] {
        let start = self
            .data
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(self.data.len());
        &self.data[start..]
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_util::bytes_to_bin_str(&self.data))
    }
}

impl FromStr for BitArray {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_binary_string(s)
    }
}

impl From<Vec<u8>> for BitArray {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for BitArray {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for BitArray {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.to_big_int() == other.to_big_int()
    }
}

impl Eq for BitArray {}

impl PartialOrd for BitArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitArray {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_big_int().cmp(&other.to_big_int())
    }
}

impl Hash for BitArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_bytes().hash(state);
    }
}
