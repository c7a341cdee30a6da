/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::bytestream::{ByteSinkTrait, ByteWriter};
use pixwrite_core::color::{Color, Pixel};
use pixwrite_core::log::debug;

use crate::errors::{BmpEncodeErrors, PaletteErrors};

/// Check that `palette` is consistent with `depth`.
///
/// Depths of 8 bits and below need a palette of exactly `2^bits_per_pixel`
/// entries. Larger depths accept and ignore any palette.
///
/// # Example
/// ```
/// use pixwrite_bmp::{validate_palette, PaletteErrors};
/// use pixwrite_bmp::pixwrite_core::bit_depth::BitDepth;
/// use pixwrite_bmp::pixwrite_core::color::Color;
///
/// let palette = [Color::BLACK; 15];
/// assert_eq!(
///     validate_palette(BitDepth::Palette4, Some(&palette)),
///     Err(PaletteErrors::WrongSize { expected: 16, found: 15 })
/// );
/// ```
pub fn validate_palette(depth: BitDepth, palette: Option<&[Color]>) -> Result<(), PaletteErrors> {
    if !depth.requires_palette() {
        if let Some(palette) = palette {
            debug!(
                "Ignoring palette of {} entries, {} does not use one",
                palette.len(),
                depth
            );
        }
        return Ok(());
    }
    let palette = palette.ok_or(PaletteErrors::Missing(depth))?;
    let expected = depth.palette_len();

    if palette.len() != expected {
        return Err(PaletteErrors::WrongSize {
            expected,
            found: palette.len()
        });
    }
    Ok(())
}

/// Write the color table, four bytes per entry in blue, green, red,
/// reserved order
pub(crate) fn write_palette<T: ByteSinkTrait>(
    palette: &[Color], writer: &mut ByteWriter<T>
) -> Result<(), BmpEncodeErrors> {
    for entry in palette {
        // little endian 0x00RRGGBB is B G R 0
        writer.write_u32_le(entry.rgb888())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use pixwrite_core::bit_depth::BitDepth;
    use pixwrite_core::bytestream::ByteWriter;
    use pixwrite_core::color::Color;

    use crate::errors::PaletteErrors;
    use crate::palette::{validate_palette, write_palette};

    #[test]
    fn test_missing_palette() {
        for depth in [BitDepth::Monochrome, BitDepth::Palette4, BitDepth::Palette8] {
            assert_eq!(
                validate_palette(depth, None),
                Err(PaletteErrors::Missing(depth))
            );
        }
    }

    #[test]
    fn test_palette_sizes() {
        let palette = [Color::BLACK; 256];

        assert!(validate_palette(BitDepth::Palette4, Some(&palette[..16])).is_ok());
        assert_eq!(
            validate_palette(BitDepth::Palette4, Some(&palette[..15])),
            Err(PaletteErrors::WrongSize {
                expected: 16,
                found:    15
            })
        );
        assert!(validate_palette(BitDepth::Monochrome, Some(&palette[..2])).is_ok());
        assert!(validate_palette(BitDepth::Palette8, Some(&palette)).is_ok());
        assert!(validate_palette(BitDepth::Palette8, Some(&palette[..16])).is_err());
    }

    #[test]
    fn test_true_color_ignores_palette() {
        let palette = [Color::WHITE; 3];
        for depth in [BitDepth::Rgb565, BitDepth::Rgb888, BitDepth::Rgba8888] {
            assert!(validate_palette(depth, None).is_ok());
            assert!(validate_palette(depth, Some(&palette)).is_ok());
        }
    }

    #[test]
    fn test_palette_entries_are_bgrx() {
        let mut out = Vec::new();
        let mut writer = ByteWriter::new(&mut out);
        let palette = [Color::new(1.0, 0.5, 0.0), Color::WHITE];
        write_palette(&palette, &mut writer).unwrap();
        drop(writer);

        assert_eq!(out, [0x00, 0x7F, 0xFF, 0x00, 0xFF, 0xFF, 0xFF, 0x00]);
    }
}
