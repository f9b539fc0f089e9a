use std::io::{Read, Write};

use bitkit_rust::bitkit_common_rs::core::exceptions::{BufferError, UtilError};
use bitkit_rust::bitkit_common_rs::io::simple_buffer::SimpleBuffer;

#[test]
fn test_read_bytes_and_byte() {
    let mut buffer = SimpleBuffer::from_bytes(&[0x10, 0x20, 0x30, 0x40]);

    assert!(buffer.has_next());
    assert_eq!(buffer.read_byte().unwrap(), 0x10);
    assert_eq!(buffer.read_bytes(2).unwrap(), vec![0x20, 0x30]);
    assert_eq!(buffer.len(), 1);
    assert_eq!(buffer.read_bytes(1).unwrap(), vec![0x40]);
    assert!(!buffer.has_next());
}

#[test]
fn test_read_from_empty_buffer() {
    let mut buffer = SimpleBuffer::new();
    assert_eq!(buffer.read_byte().unwrap_err(), UtilError::Buffer(BufferError::Empty));
    assert_eq!(buffer.read_bytes(0).unwrap_err(), UtilError::Buffer(BufferError::Empty));
}

#[test]
fn test_read_more_than_available() {
    let mut buffer = SimpleBuffer::from_bytes(&[1, 2]);
    assert_eq!(
        buffer.read_bytes(5).unwrap_err(),
        UtilError::Buffer(BufferError::Insufficient { requested: 5, available: 2 })
    );
    assert_eq!(buffer.read_bytes(2).unwrap(), vec![1, 2]);
}

#[test]
fn test_interleaved_write_and_read() {
    let mut buffer = SimpleBuffer::new();
    buffer.write_all(&[1, 2, 3]).unwrap();
    assert_eq!(buffer.read_byte().unwrap(), 1);
    buffer.write_bytes(&[4, 5]);

    let mut rest = Vec::new();
    buffer.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, vec![2, 3, 4, 5]);
    assert!(buffer.is_empty());
}
