/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per depth scanline packing
//!
//! Each packer takes one row of pixels and fills the first
//! `scanline_bytes` bytes of `out`. Padding after that is never touched.

use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::color::Pixel;

/// Packs one row of pixels into its on-disk bytes
pub(crate) type PackFn<P> = fn(row: &[P], out: &mut [u8]);

/// Pick the packer for `depth`, once per image
pub(crate) fn packer_for<P: Pixel>(depth: BitDepth) -> PackFn<P> {
    match depth {
        BitDepth::Monochrome => pack_monochrome::<P>,
        BitDepth::Palette4 => pack_nibbles::<P>,
        BitDepth::Palette8 => pack_index8::<P>,
        BitDepth::Rgb565 => pack_rgb565::<P>,
        BitDepth::Rgb888 => pack_rgb888::<P>,
        BitDepth::Rgba8888 => pack_rgba8888::<P>
    }
}

/// Collects sub-byte fields into a byte, first field in the lowest bits.
///
/// On disk the first pixel sits in the highest bits, so completed bytes
/// have their fields reversed before they are handed out.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BitAccumulator {
    byte:   u8,
    filled: u8,
    width:  u8
}

impl BitAccumulator {
    /// `width` must be 1 or 4
    pub const fn new(width: u8) -> BitAccumulator {
        BitAccumulator {
            byte: 0,
            filled: 0,
            width
        }
    }

    /// Add a field, returning the finished byte when it fills up
    #[inline(always)]
    pub fn push(&mut self, field: u8) -> Option<u8> {
        let mask = (1_u8 << self.width) - 1;

        self.byte |= (field & mask) << self.filled;
        self.filled += self.width;

        if self.filled == 8 {
            return self.take();
        }
        None
    }

    /// Flush a partially filled byte, unused trailing fields are zero
    pub fn finish(mut self) -> Option<u8> {
        if self.filled == 0 {
            return None;
        }
        self.take()
    }

    fn take(&mut self) -> Option<u8> {
        let byte = reverse_fields(self.byte, self.width);
        self.byte = 0;
        self.filled = 0;
        Some(byte)
    }
}

/// Reverse the order of the `width` bit fields inside `byte`
#[inline(always)]
const fn reverse_fields(byte: u8, width: u8) -> u8 {
    match width {
        1 => byte.reverse_bits(),
        4 => byte.rotate_left(4),
        _ => byte
    }
}

fn pack_sub_byte<P: Pixel>(row: &[P], out: &mut [u8], width: u8, field: fn(&P) -> u8) {
    let mut acc = BitAccumulator::new(width);
    let mut position = 0;

    for pixel in row {
        if let Some(byte) = acc.push(field(pixel)) {
            out[position] = byte;
            position += 1;
        }
    }
    if let Some(byte) = acc.finish() {
        out[position] = byte;
    }
}

fn pack_monochrome<P: Pixel>(row: &[P], out: &mut [u8]) {
    pack_sub_byte(row, out, 1, |pixel| u8::from(pixel.index() != 0));
}

#[allow(clippy::cast_possible_truncation)]
fn pack_nibbles<P: Pixel>(row: &[P], out: &mut [u8]) {
    pack_sub_byte(row, out, 4, |pixel| (pixel.index() & 0x0F) as u8);
}

#[allow(clippy::cast_possible_truncation)]
fn pack_index8<P: Pixel>(row: &[P], out: &mut [u8]) {
    for (out_byte, pixel) in out.iter_mut().zip(row) {
        *out_byte = (pixel.index() & 0xFF) as u8;
    }
}

fn pack_rgb565<P: Pixel>(row: &[P], out: &mut [u8]) {
    for (out_px, pixel) in out.chunks_exact_mut(2).zip(row) {
        out_px.copy_from_slice(&pixel.rgb565().to_le_bytes());
    }
}

fn pack_rgb888<P: Pixel>(row: &[P], out: &mut [u8]) {
    for (out_px, pixel) in out.chunks_exact_mut(3).zip(row) {
        // little endian 0x00RRGGBB, the top byte is dropped
        let [b, g, r, _] = (pixel.rgb888() & 0x00FF_FFFF).to_le_bytes();
        out_px.copy_from_slice(&[b, g, r]);
    }
}

fn pack_rgba8888<P: Pixel>(row: &[P], out: &mut [u8]) {
    for (out_px, pixel) in out.chunks_exact_mut(4).zip(row) {
        out_px.copy_from_slice(&pixel.rgba8888().to_le_bytes());
    }
}
