/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The output trait implemented for byte sinks

use crate::bytestream::ByteIoError;

/// The writer trait implemented for sinks of encoded images
///
/// Anything that implements this trait can be used as the destination
/// of an encoder.
pub trait ByteSinkTrait {
    /// Write all bytes to the sink or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    ///
    /// This is provided to allow for optimized writes where possible. (when the compiler can const fold them)
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;
    /// A hint to tell the implementation how big of a size we expect the image to be
    ///
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding, others are free to ignore it.
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}

#[cfg(feature = "std")]
impl<T: std::io::Write> ByteSinkTrait for T {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}

// Without std we cannot blanket over `Write`, so the in memory sinks
// are implemented directly.
#[cfg(not(feature = "std"))]
impl ByteSinkTrait for &mut [u8] {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        if buf.len() > self.len() {
            return Err(ByteIoError::NotEnoughBuffer(buf.len(), self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(buf.len());
        a.copy_from_slice(buf);
        *self = b;

        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

#[cfg(not(feature = "std"))]
impl ByteSinkTrait for &mut alloc::vec::Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}
