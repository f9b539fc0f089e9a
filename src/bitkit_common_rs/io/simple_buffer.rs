/// 簡易バイトバッファ
/// 書き込んだ順にバイトを読み出す FIFO バッファ

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crate::bitkit_common_rs::core::exceptions::{BufferError, UtilResult};

#[derive(Debug, Clone, Default)]
pub struct SimpleBuffer {
    buf: VecDeque<u8>,
}

impl SimpleBuffer {
    pub fn new() -> Self {
        Self { buf: VecDeque::new() }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            buf: data.iter().copied().collect(),
        }
    }

    /// 末尾にバイト列を追加する
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend(data.iter().copied());
    }

    /// 先頭から len バイト読み出す
    ///
    /// バッファが空なら BufferError::Empty、残りが len 未満なら BufferError::Insufficient。
    pub fn read_bytes(&mut self, len: usize) -> UtilResult<Vec<u8>> {
        if self.buf.is_empty() {
            return Err(BufferError::Empty.into());
        }
        if len > self.buf.len() {
            return Err(BufferError::Insufficient {
                requested: len,
                available: self.buf.len(),
            }
            .into());
        }

        Ok(self.buf.drain(..len).collect())
    }

    /// 1バイト読み出す
    pub fn read_byte(&mut self) -> UtilResult<u8> {
        self.buf.pop_front().ok_or_else(|| BufferError::Empty.into())
    }

    pub fn has_next(&self) -> bool {
        !self.buf.is_empty()
    }

    /// 未読のバイト数
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Read for SimpleBuffer {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.buf.read(out)
    }
}

impl Write for SimpleBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.write_bytes(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitkit_common_rs::core::exceptions::UtilError;

    #[test]
    fn test_read_in_write_order() {
        let mut buffer = SimpleBuffer::new();
        buffer.write_bytes(&[1, 2, 3]);
        buffer.write_bytes(&[4]);

        assert_eq!(buffer.read_byte().unwrap(), 1);
        assert_eq!(buffer.read_bytes(2).unwrap(), vec![2, 3]);
        assert!(buffer.has_next());
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.read_byte().unwrap(), 4);
        assert!(!buffer.has_next());
    }

    #[test]
    fn test_errors() {
        let mut buffer = SimpleBuffer::new();
        assert_eq!(buffer.read_byte().unwrap_err(), UtilError::from(BufferError::Empty));
        assert_eq!(buffer.read_bytes(1).unwrap_err(), UtilError::from(BufferError::Empty));

        buffer.write_bytes(&[9, 9]);
        assert_eq!(
            buffer.read_bytes(3).unwrap_err(),
            UtilError::from(BufferError::Insufficient { requested: 3, available: 2 })
        );
        // 失敗した読み出しはバッファを消費しない
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_std_io_traits() {
        let mut buffer = SimpleBuffer::from_bytes(b"ab");
        buffer.write_all(b"cd").unwrap();

        let mut out = String::new();
        buffer.read_to_string(&mut out).unwrap();
        assert_eq!(out, "abcd");
        assert!(buffer.is_empty());
    }
}
