/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! An uncompressed BMP encoder
//!
//! This crate writes `BITMAPINFOHEADER` bitmaps at six bit depths
//!
//! | depth | pixel                          | palette   |
//! |-------|--------------------------------|-----------|
//! | 1     | one bit, MSB is the first pixel| 2 entries |
//! | 4     | nibble, high is the first pixel| 16        |
//! | 8     | palette index                  | 256       |
//! | 16    | RGB565                         | none      |
//! | 24    | RGB888, stored B G R           | none      |
//! | 32    | RGBA8888, stored B G R A       | none      |
//!
//! Every scanline is padded with zeroes to a multiple of four bytes.
//!
//! # Features
//! - `no_std` with `alloc` when the `std` feature is disabled
//! - Exact output size known before encoding, a single allocation for
//!   [`encode_bmp`]
//! - Validation happens before the first byte is written
//!
//! # Unsupported
//! - RLE and bitfield compression
//! - Decoding
//!
//! # Example
//! ```
//! use pixwrite_bmp::encode_bmp;
//! use pixwrite_bmp::pixwrite_core::bit_depth::BitDepth;
//! use pixwrite_bmp::pixwrite_core::color::Color;
//!
//! let rows = vec![vec![Color::new(1.0, 0.0, 0.0); 3]; 2];
//! let bytes = encode_bmp(&rows, BitDepth::Rgb888, None).unwrap();
//! // 54 bytes of headers, 2 rows of 9 bytes padded to 12
//! assert_eq!(bytes.len(), 54 + 24);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use pixwrite_core;

pub use crate::encoder::{encode_bmp, encoded_size, BmpEncoder};
pub use crate::errors::{BmpEncodeErrors, PaletteErrors};
pub use crate::palette::validate_palette;

mod encoder;
mod errors;
mod headers;
mod pack;
mod palette;
