//! 入出力ユーティリティ

pub mod simple_buffer;

pub use simple_buffer::SimpleBuffer;
