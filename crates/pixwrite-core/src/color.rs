/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pixel color model
//!
//! A pixel reaches the encoder either as a [`Color`], four normalized
//! channels plus a raw `value`, or as a raw integer which already holds
//! the packed representation.
//!
//! Both are exposed through the [`Pixel`] trait, which derives the packed
//! forms each bit depth stores.
//!
//! # Precision
//! Channels are scaled by the maximum value of their field and truncated
//! toward zero, so `0.5` becomes `15` in a 5 bit field and `127` in an
//! 8 bit field.
//!
//! Channels outside `[0, 1]` are not clamped. They wrap after the cast and
//! may spill into neighbouring fields, only the final packed value is
//! masked to the width of the output.

/// A pixel the encoder knows how to pack
pub trait Pixel {
    /// Palette index, or the monochrome bit (non zero is set)
    fn index(&self) -> u32;
    /// 5-6-5 packed red, green and blue
    fn rgb565(&self) -> u16;
    /// 8-8-8 packed red, green and blue, red in bits 16..24
    fn rgb888(&self) -> u32;
    /// 8-8-8-8 packed, alpha in the top byte, then red, green, blue
    fn rgba8888(&self) -> u32;
}

/// A color with normalized channels.
///
/// `value` is carried alongside the channels and used as the palette
/// index or monochrome bit when encoding to a depth of 8 bits or less.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Color {
    pub r:     f32,
    pub g:     f32,
    pub b:     f32,
    pub a:     f32,
    pub value: u32
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create an opaque color
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color::with_alpha(r, g, b, 1.0)
    }

    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a, value: 0 }
    }

    /// A black pixel which only carries a raw index
    pub const fn from_value(value: u32) -> Color {
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
            value
        }
    }

    /// An opaque gray where every channel is `level`
    pub const fn gray(level: f32) -> Color {
        Color::new(level, level, level)
    }

    /// Create a color from 8 bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0
        )
    }

    /// Return a copy of this color carrying `value` as its index
    #[must_use]
    pub const fn with_value(mut self, value: u32) -> Color {
        self.value = value;
        self
    }

    /// Coarse on/off test, true when the channel sum is above one half.
    ///
    /// Useful for turning a color image into a monochrome one,
    /// the encoder itself never calls it.
    pub fn enabled(&self) -> bool {
        (self.r + self.g + self.b) > 0.5
    }

    pub fn to_rgb565(&self) -> u16 {
        let packed = (scale(self.r, 31) << 11) | (scale(self.g, 63) << 5) | scale(self.b, 31);
        (packed & 0xFFFF) as u16
    }

    pub fn to_rgb888(&self) -> u32 {
        let packed = (scale(self.r, 255) << 16) | (scale(self.g, 255) << 8) | scale(self.b, 255);
        packed & 0x00FF_FFFF
    }

    pub fn to_rgba8888(&self) -> u32 {
        (scale(self.a, 255) << 24) | self.to_rgb888()
    }
}

/// Scale a normalized channel to `max` and truncate toward zero.
///
/// Out of range inputs wrap instead of saturating at the field size.
#[inline(always)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(channel: f32, max: u16) -> u32 {
    (channel * f32::from(max)) as i64 as u32
}

impl Pixel for Color {
    #[inline]
    fn index(&self) -> u32 {
        self.value
    }
    #[inline]
    fn rgb565(&self) -> u16 {
        self.to_rgb565()
    }
    #[inline]
    fn rgb888(&self) -> u32 {
        self.to_rgb888()
    }
    #[inline]
    fn rgba8888(&self) -> u32 {
        self.to_rgba8888()
    }
}

macro_rules! raw_pixel {
    ($int_type:tt) => {
        /// A raw integer is used as-is, masked to the width of the field
        impl Pixel for $int_type {
            #[inline]
            fn index(&self) -> u32 {
                u32::from(*self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn rgb565(&self) -> u16 {
                (u32::from(*self) & 0xFFFF) as u16
            }
            #[inline]
            fn rgb888(&self) -> u32 {
                u32::from(*self) & 0x00FF_FFFF
            }
            #[inline]
            fn rgba8888(&self) -> u32 {
                u32::from(*self)
            }
        }
    };
}

raw_pixel!(u8);
raw_pixel!(u16);
raw_pixel!(u32);

#[cfg(test)]
mod tests {
    use crate::color::{Color, Pixel};

    #[test]
    fn test_rgb565_truncates() {
        assert_eq!(Color::WHITE.to_rgb565(), 0xFFFF);
        assert_eq!(Color::BLACK.to_rgb565(), 0);
        // 0.5 * 31 = 15.5 -> 15, 0.5 * 63 = 31.5 -> 31
        assert_eq!(Color::gray(0.5).to_rgb565(), (15 << 11) | (31 << 5) | 15);
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_rgb565(), 0xF800);
        assert_eq!(Color::new(0.0, 1.0, 0.0).to_rgb565(), 0x07E0);
    }

    #[test]
    fn test_rgb888_and_rgba8888() {
        assert_eq!(Color::new(1.0, 0.5, 0.0).to_rgb888(), 0x00FF_7F00);
        assert_eq!(Color::with_alpha(0.0, 0.0, 1.0, 0.5).to_rgba8888(), 0x7F00_00FF);
        assert_eq!(Color::WHITE.to_rgba8888(), 0xFFFF_FFFF);
        assert_eq!(Color::with_alpha(1.0, 1.0, 1.0, 0.0).to_rgba8888(), 0x00FF_FFFF);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        // 2.0 * 31 = 62 which no longer fits 5 bits and spills into the
        // neighbouring bit above, then the 16 bit mask drops it
        let color = Color::new(2.0, 0.0, 0.0);
        assert_eq!(color.to_rgb565(), ((62_u32 << 11) & 0xFFFF) as u16);
        // the blue field overflows into green
        let color = Color::new(0.0, 0.0, 2.0);
        assert_eq!(color.to_rgb888(), 510);
    }

    #[test]
    fn test_enabled() {
        assert!(Color::WHITE.enabled());
        assert!(!Color::BLACK.enabled());
        assert!(!Color::gray(0.125).enabled());
        assert!(Color::gray(0.25).enabled());
    }

    #[test]
    fn test_raw_pixels_are_masked() {
        assert_eq!(0x1122_3344_u32.rgb888(), 0x0022_3344);
        assert_eq!(0x1122_3344_u32.rgb565(), 0x3344);
        assert_eq!(0x1122_3344_u32.rgba8888(), 0x1122_3344);
        assert_eq!(7_u8.index(), 7);
        assert_eq!(0xF800_u16.rgb565(), 0xF800);
    }

    #[test]
    fn test_value_is_index() {
        let color = Color::gray(0.25).with_value(9);
        assert_eq!(color.index(), 9);
        assert_eq!(Color::from_value(3).index(), 3);
    }
}
