/// bitkit 用エラー型定義
/// 書式エラー・値域エラー・範囲外エラー等を分類して表現する

use std::fmt;
use std::error::Error;

/// 入力文字列が要求される書式を満たさない
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// 2進数文字列ではない
    NotBinaryString(String),
    /// 長さが単位の倍数ではない
    InvalidLength { unit: usize, actual: usize },
    /// 指定エンコーディングとして解釈できない
    Malformed { encoding: &'static str, reason: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotBinaryString(data) => {
                write!(f, "2進数文字列ではありません: '{}'", data)
            }
            FormatError::InvalidLength { unit, actual } => {
                write!(f, "長さが {} の倍数ではありません: {}", unit, actual)
            }
            FormatError::Malformed { encoding, reason } => {
                write!(f, "{} として解釈できません: {}", encoding, reason)
            }
        }
    }
}

impl Error for FormatError {}

/// 数値の前提条件違反
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 負の値は受け付けない
    Negative(String),
    /// チャンク長は1以上
    ZeroChunkLength,
    /// 長さ一致が必要な操作で長さが異なる
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Negative(value) => {
                write!(f, "符号なし整数ではありません: {}", value)
            }
            DomainError::ZeroChunkLength => {
                write!(f, "チャンク長は0より大きくなければなりません")
            }
            DomainError::LengthMismatch { left, right } => {
                write!(f, "長さが一致しません: {} != {}", left, right)
            }
        }
    }
}

impl Error for DomainError {}

/// ビットインデックスが範囲外
#[derive(Debug, Clone, PartialEq)]
pub struct RangeError {
    pub index: usize,
    pub length: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "インデックス {} は範囲外です (長さ: {})", self.index, self.length)
    }
}

impl Error for RangeError {}

/// バッファ読み出しエラー
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// バッファが空
    Empty,
    /// 残りバイト数が不足
    Insufficient { requested: usize, available: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Empty => write!(f, "バッファが空です"),
            BufferError::Insufficient { requested, available } => {
                write!(f, "バッファが不足しています: 要求 {}バイト, 残り {}バイト", requested, available)
            }
        }
    }
}

impl Error for BufferError {}

/// bitkit の統合エラー型
#[derive(Debug, Clone, PartialEq)]
pub enum UtilError {
    Format(FormatError),
    Domain(DomainError),
    Range(RangeError),
    Buffer(BufferError),
    /// I/O エラー
    Io(String),
    /// 未対応のOS
    UnsupportedPlatform(String),
    /// 設定エラー
    Config(String),
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::Format(err) => write!(f, "書式エラー: {}", err),
            UtilError::Domain(err) => write!(f, "値域エラー: {}", err),
            UtilError::Range(err) => write!(f, "範囲エラー: {}", err),
            UtilError::Buffer(err) => write!(f, "バッファエラー: {}", err),
            UtilError::Io(msg) => write!(f, "I/Oエラー: {}", msg),
            UtilError::UnsupportedPlatform(os) => write!(f, "未対応のOSです: {}", os),
            UtilError::Config(msg) => write!(f, "設定エラー: {}", msg),
        }
    }
}

impl Error for UtilError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UtilError::Format(err) => Some(err),
            UtilError::Domain(err) => Some(err),
            UtilError::Range(err) => Some(err),
            UtilError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for UtilError {
    fn from(err: FormatError) -> Self {
        UtilError::Format(err)
    }
}

impl From<DomainError> for UtilError {
    fn from(err: DomainError) -> Self {
        UtilError::Domain(err)
    }
}

impl From<RangeError> for UtilError {
    fn from(err: RangeError) -> Self {
        UtilError::Range(err)
    }
}

impl From<BufferError> for UtilError {
    fn from(err: BufferError) -> Self {
        UtilError::Buffer(err)
    }
}

impl From<std::io::Error> for UtilError {
    fn from(err: std::io::Error) -> Self {
        UtilError::Io(err.to_string())
    }
}

/// Result型のエイリアス
pub type UtilResult<T> = Result<T, UtilError>;

impl FormatError {
    /// デコード失敗エラーを作成
    pub fn malformed(encoding: &'static str, reason: impl fmt::Display) -> Self {
        FormatError::Malformed {
            encoding,
            reason: reason.to_string(),
        }
    }
}

impl UtilError {
    pub fn is_format(&self) -> bool {
        matches!(self, UtilError::Format(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, UtilError::Domain(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, UtilError::Range(_))
    }
}
