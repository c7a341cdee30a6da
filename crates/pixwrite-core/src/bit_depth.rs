/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Supported bit depths, and the geometry of a scanline at each depth

use core::fmt::{Display, Formatter};

/// The bit depth a bitmap is encoded in.
///
/// This is a closed set, each variant describes how a single
/// pixel is laid out on disk.
///
/// Depths of 8 bits and below store palette indices and therefore need
/// a palette, larger depths store packed colors directly.
///
/// The traditional aliases (`pal8`, `bpp8`, ...) are provided as
/// constructor functions instead of duplicate variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BitDepth {
    /// One bit per pixel, 8 pixels per byte, first pixel in the most
    /// significant bit.
    Monochrome,
    /// Four bits per pixel, two palette indices per byte, first pixel in
    /// the high nibble.
    Palette4,
    /// Eight bits per pixel, one palette index per byte.
    Palette8,
    /// Sixteen bits per pixel, 5 bits red, 6 bits green and 5 bits blue.
    Rgb565,
    /// Twenty four bits per pixel, stored as blue, green, red.
    Rgb888,
    /// Thirty two bits per pixel, stored as blue, green, red, alpha.
    Rgba8888
}

impl BitDepth {
    /// All supported depths, from the smallest to the largest
    pub const ALL: [BitDepth; 6] = [
        BitDepth::Monochrome,
        BitDepth::Palette4,
        BitDepth::Palette8,
        BitDepth::Rgb565,
        BitDepth::Rgb888,
        BitDepth::Rgba8888
    ];

    pub const fn monochrome() -> BitDepth {
        BitDepth::Monochrome
    }
    pub const fn bpp1() -> BitDepth {
        BitDepth::Monochrome
    }
    pub const fn palette4() -> BitDepth {
        BitDepth::Palette4
    }
    pub const fn pal4() -> BitDepth {
        BitDepth::Palette4
    }
    pub const fn bpp4() -> BitDepth {
        BitDepth::Palette4
    }
    pub const fn palette8() -> BitDepth {
        BitDepth::Palette8
    }
    pub const fn pal8() -> BitDepth {
        BitDepth::Palette8
    }
    pub const fn bpp8() -> BitDepth {
        BitDepth::Palette8
    }
    pub const fn rgb565() -> BitDepth {
        BitDepth::Rgb565
    }
    pub const fn bpp16() -> BitDepth {
        BitDepth::Rgb565
    }
    pub const fn rgb888() -> BitDepth {
        BitDepth::Rgb888
    }
    pub const fn bpp24() -> BitDepth {
        BitDepth::Rgb888
    }
    pub const fn rgba8888() -> BitDepth {
        BitDepth::Rgba8888
    }
    pub const fn bpp32() -> BitDepth {
        BitDepth::Rgba8888
    }

    /// Look up the depth which uses `bits` bits per pixel
    ///
    /// # Example
    /// ```
    /// use pixwrite_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::from_bits_per_pixel(24), Some(BitDepth::Rgb888));
    /// assert_eq!(BitDepth::from_bits_per_pixel(2), None);
    /// ```
    pub const fn from_bits_per_pixel(bits: u16) -> Option<BitDepth> {
        match bits {
            1 => Some(BitDepth::Monochrome),
            4 => Some(BitDepth::Palette4),
            8 => Some(BitDepth::Palette8),
            16 => Some(BitDepth::Rgb565),
            24 => Some(BitDepth::Rgb888),
            32 => Some(BitDepth::Rgba8888),
            _ => None
        }
    }

    /// Number of bits a single pixel occupies on disk
    pub const fn bits_per_pixel(self) -> u16 {
        match self {
            BitDepth::Monochrome => 1,
            BitDepth::Palette4 => 4,
            BitDepth::Palette8 => 8,
            BitDepth::Rgb565 => 16,
            BitDepth::Rgb888 => 24,
            BitDepth::Rgba8888 => 32
        }
    }

    /// Number of bytes needed to hold one packed pixel.
    ///
    /// Sub-byte depths round up to a single byte.
    ///
    /// ```
    /// use pixwrite_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Monochrome.bytes_per_pixel(), 1);
    /// assert_eq!(BitDepth::Rgb888.bytes_per_pixel(), 3);
    /// ```
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() as usize).div_ceil(8)
    }

    /// Whether pixels at this depth are palette indices
    pub const fn requires_palette(self) -> bool {
        self.bits_per_pixel() <= 8
    }

    /// Number of entries a palette must have for this depth,
    /// or zero if the depth does not use a palette
    pub const fn palette_len(self) -> usize {
        if self.requires_palette() {
            1 << self.bits_per_pixel()
        } else {
            0
        }
    }

    /// Bytes of packed pixel data in one scanline of `width` pixels,
    /// excluding padding.
    ///
    /// Returns `None` if the calculation overflows
    pub const fn scanline_bytes(self, width: usize) -> Option<usize> {
        match width.checked_mul(self.bits_per_pixel() as usize) {
            Some(bits) => Some(bits.div_ceil(8)),
            None => None
        }
    }

    /// Zero bytes appended after each scanline so its stored
    /// length is a multiple of four
    pub const fn scanline_padding(self, width: usize) -> Option<usize> {
        match self.scanline_bytes(width) {
            Some(bytes) => Some((4 - (bytes % 4)) % 4),
            None => None
        }
    }

    /// Stored length of one scanline, including padding
    ///
    /// ```
    /// use pixwrite_core::bit_depth::BitDepth;
    /// // 3 pixels * 3 bytes = 9 bytes, padded to 12
    /// assert_eq!(BitDepth::Rgb888.padded_scanline_bytes(3), Some(12));
    /// ```
    pub const fn padded_scanline_bytes(self, width: usize) -> Option<usize> {
        match (self.scanline_bytes(width), self.scanline_padding(width)) {
            (Some(bytes), Some(padding)) => bytes.checked_add(padding),
            _ => None
        }
    }

    const fn name(self) -> &'static str {
        match self {
            BitDepth::Monochrome => "monochrome",
            BitDepth::Palette4 => "palette4",
            BitDepth::Palette8 => "palette8",
            BitDepth::Rgb565 => "rgb565",
            BitDepth::Rgb888 => "rgb888",
            BitDepth::Rgba8888 => "rgba8888"
        }
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::Rgb888
    }
}

impl Display for BitDepth {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit {}", self.bits_per_pixel(), self.name())
    }
}
