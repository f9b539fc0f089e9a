/// bitkit Rust Implementation
/// ビット配列とバイト列・エンコーディング・ネットワーク関連の小さなユーティリティ集

pub mod bitkit_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::bitkit_common_rs::bytes::bit_array::{BitArray, BitOrder};
    pub use crate::bitkit_common_rs::bytes::bytes_util;
    pub use crate::bitkit_common_rs::core::exceptions::{UtilError, UtilResult};
    pub use crate::bitkit_common_rs::encoding::encode_util;
    pub use crate::bitkit_common_rs::io::simple_buffer::SimpleBuffer;
    pub use crate::bitkit_common_rs::net::net_util;
}
