//! bitkit 共通ライブラリ
//! ビット配列、バイト列変換、エンコーディング判定、バッファ、ネットワーク判定

pub mod bytes;
pub mod core;
pub mod encoding;
pub mod io;
pub mod net;
pub mod utils;
