/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Byte sinks and an endian aware writer
//!
//! Encoders push their output through [`ByteWriter`], which wraps anything
//! implementing [`ByteSinkTrait`].
//!
//! With the `std` feature every [`std::io::Write`] is a sink, otherwise
//! `&mut Vec<u8>` and `&mut [u8]` are.
pub use traits::ByteSinkTrait;
pub use writer::{ByteIoError, ByteWriter};

mod traits;
mod writer;
