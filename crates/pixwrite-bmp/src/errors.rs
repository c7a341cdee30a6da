/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::bytestream::ByteIoError;

/// A palette does not fit the requested bit depth
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PaletteErrors {
    /// The depth stores palette indices but no palette was given
    Missing(BitDepth),
    /// The palette must have exactly `2^bits_per_pixel` entries
    WrongSize { expected: usize, found: usize }
}

impl Debug for PaletteErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteErrors::Missing(depth) => {
                writeln!(f, "Missing palette, {depth} images require one")
            }
            PaletteErrors::WrongSize { expected, found } => {
                writeln!(
                    f,
                    "Wrong palette size, expected {expected} entries but found {found}"
                )
            }
        }
    }
}

impl Display for PaletteErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

/// Errors that can occur during encoding
#[non_exhaustive]
pub enum BmpEncodeErrors {
    /// The palette is missing or has the wrong length
    Palette(PaletteErrors),
    /// The pixel buffer has no rows or its rows have no pixels
    EmptyBuffer,
    /// A row is not as long as the first row
    RaggedRows {
        row:      usize,
        expected: usize,
        found:    usize
    },
    /// Too large dimensions for a given width or height,
    /// BMP stores both as signed 32 bit integers
    TooLargeDimensions(&'static str, usize),
    /// The file size does not fit in 32 bits
    OverflowOccurred,
    IoErrors(ByteIoError)
}

impl Debug for BmpEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Palette(err) => {
                write!(f, "{:?}", err)
            }
            Self::EmptyBuffer => {
                writeln!(f, "Empty pixel buffer, width and height must be non zero")
            }
            Self::RaggedRows {
                row,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Row {row} has {found} pixels but the first row has {expected}"
                )
            }
            Self::TooLargeDimensions(dimension, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {}",
                    i32::MAX
                )
            }
            Self::OverflowOccurred => {
                writeln!(f, "Overflow occurred, the file would be larger than 4 GiB")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for BmpEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaletteErrors {}

#[cfg(feature = "std")]
impl std::error::Error for BmpEncodeErrors {}

impl From<PaletteErrors> for BmpEncodeErrors {
    fn from(value: PaletteErrors) -> Self {
        BmpEncodeErrors::Palette(value)
    }
}

impl From<ByteIoError> for BmpEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        BmpEncodeErrors::IoErrors(value)
    }
}
