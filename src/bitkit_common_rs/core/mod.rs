//! コア機能
//! エラー型と Result エイリアス

pub mod exceptions;

// 便利な再エクスポート
pub use exceptions::{BufferError, DomainError, FormatError, RangeError, UtilError, UtilResult};
