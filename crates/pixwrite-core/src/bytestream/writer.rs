/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteSinkTrait;

/// Errors raised by a byte sink
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// Not enough space in the sink
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we tried to write
    /// - 2nd argument is the space left in the sink
    NotEnoughBuffer(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// Encapsulates a byte sink with
/// support for little endian writes
///
/// # Example
/// ```
/// use pixwrite_core::bytestream::ByteWriter;
/// let mut out = vec![];
/// let mut writer = ByteWriter::new(&mut out);
/// writer.write_u16_le(0x4D42).unwrap();
/// assert_eq!(writer.bytes_written(), 2);
/// drop(writer);
/// assert_eq!(&out, b"BM");
/// ```
pub struct ByteWriter<T: ByteSinkTrait> {
    sink:          T,
    bytes_written: usize
}

impl<T: ByteSinkTrait> ByteWriter<T> {
    /// Create a new writer for the sink
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            sink,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Write all of `buf` to the sink
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.sink.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write a fixed size array to the sink
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.sink.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Hint the sink about the number of bytes that are about to be written
    pub fn reserve(&mut self, additional: usize) -> Result<(), ByteIoError> {
        self.sink.reserve_capacity(additional)
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.sink.flush_bytes()
    }
}

// every integer in a BMP file is little endian
macro_rules! write_single_type {
    ($name_le:tt,$int_type:tt) => {
        impl<T: ByteSinkTrait> ByteWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[inline]
            pub fn $name_le(&mut self, value: $int_type) -> Result<(), ByteIoError> {
                self.write_const_bytes(&value.to_le_bytes())
            }
        }
    };
}

write_single_type!(write_u16_le, u16);
write_single_type!(write_u32_le, u32);
write_single_type!(write_i32_le, i32);

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::bytestream::ByteWriter;

    #[test]
    fn test_endian_writes() {
        let mut out = Vec::new();
        let mut writer = ByteWriter::new(&mut out);
        writer.write_u32_le(0x0102_0304).unwrap();
        writer.write_u16_le(0x0506).unwrap();
        writer.write_i32_le(-1).unwrap();
        writer.write_const_bytes(b"BM").unwrap();
        assert_eq!(writer.bytes_written(), 12);
        drop(writer);

        assert_eq!(
            out,
            [4, 3, 2, 1, 6, 5, 0xFF, 0xFF, 0xFF, 0xFF, b'B', b'M']
        );
    }

    #[test]
    fn test_slice_sink_reports_short_buffer() {
        let mut storage = [0_u8; 3];
        let mut writer = ByteWriter::new(&mut storage[..]);
        assert!(writer.write_u16_le(7).is_ok());
        assert!(writer.write_u16_le(7).is_err());
    }
}
