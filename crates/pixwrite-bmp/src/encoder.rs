/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::bytestream::{ByteSinkTrait, ByteWriter};
use pixwrite_core::color::{Color, Pixel};
use pixwrite_core::log::{debug, trace};
use pixwrite_core::options::{EncoderOptions, RowOrder};

use crate::errors::BmpEncodeErrors;
use crate::headers::BmpLayout;
use crate::pack::packer_for;
use crate::palette::{validate_palette, write_palette};

/// An uncompressed BMP encoder
///
/// The encoder borrows a buffer of rows, each row being anything that
/// can be viewed as a slice of [`Pixel`]s, e.g `Vec<Vec<Color>>` or
/// `[[u32; W]; H]`.
///
/// # Example
/// - Encode a 4 by 2 image at 4 bits per pixel
///
/// ```
/// use pixwrite_bmp::BmpEncoder;
/// use pixwrite_bmp::BmpEncodeErrors;
/// use pixwrite_bmp::pixwrite_core::bit_depth::BitDepth;
/// use pixwrite_bmp::pixwrite_core::color::Color;
/// use pixwrite_bmp::pixwrite_core::options::EncoderOptions;
///
/// fn main() -> Result<(), BmpEncodeErrors> {
///     let rows: [[u8; 4]; 2] = [[0, 1, 2, 3], [15, 14, 13, 12]];
///     let palette: Vec<Color> = (0..16).map(|i| Color::gray(i as f32 / 15.0)).collect();
///
///     let mut encoder = BmpEncoder::new(&rows, EncoderOptions::new(BitDepth::Palette4));
///     encoder.set_palette(&palette);
///
///     let bytes = encoder.encode_to_vec()?;
///     assert_eq!(bytes.len(), encoder.encoded_size()?);
///     Ok(())
/// }
/// ```
pub struct BmpEncoder<'a, P: Pixel, R: AsRef<[P]>> {
    rows:    &'a [R],
    palette: Option<&'a [Color]>,
    options: EncoderOptions,
    _pixel:  PhantomData<P>
}

impl<'a, P: Pixel, R: AsRef<[P]>> BmpEncoder<'a, P, R> {
    /// Create a new encoder which will encode the rows
    ///
    /// # Arguments
    /// - rows: The pixel buffer, row 0 first, every row of equal length
    /// - options: Bit depth and row order of the output
    pub const fn new(rows: &'a [R], options: EncoderOptions) -> BmpEncoder<'a, P, R> {
        BmpEncoder {
            rows,
            palette: None,
            options,
            _pixel: PhantomData
        }
    }

    /// Set the color table used by depths of 8 bits and below.
    ///
    /// It must have exactly `2^bits_per_pixel` entries, palette index `i`
    /// maps pixel value `i`. Larger depths ignore it.
    pub fn set_palette(&mut self, palette: &'a [Color]) {
        self.palette = Some(palette);
    }

    pub const fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Check the buffer and palette, and compute the file layout
    fn layout(&self) -> Result<BmpLayout, BmpEncodeErrors> {
        let height = self.rows.len();
        let width = self.rows.first().map_or(0, |row| row.as_ref().len());

        if width == 0 || height == 0 {
            return Err(BmpEncodeErrors::EmptyBuffer);
        }
        if let Some((row, found)) = self
            .rows
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(BmpEncodeErrors::RaggedRows {
                row,
                expected: width,
                found
            });
        }
        let depth = self.options.depth();

        validate_palette(depth, self.palette)?;

        BmpLayout::new(width, height, depth)
    }

    /// Exact number of bytes [`encode`](Self::encode) will write
    ///
    /// # Errors
    /// The same validation errors encoding would return
    pub fn encoded_size(&self) -> Result<usize, BmpEncodeErrors> {
        Ok(self.layout()?.file_size)
    }

    /// Encode the image into `sink`
    ///
    /// All validation happens before the first byte is written, so a
    /// rejected image leaves the sink untouched. Only an error from the
    /// sink itself can leave a partial file behind.
    ///
    /// # Returns
    /// - Ok(size): Number of bytes written
    /// - Err: The error encountered during encoding
    pub fn encode<T: ByteSinkTrait>(&self, sink: T) -> Result<usize, BmpEncodeErrors> {
        let layout = self.layout()?;
        let depth = layout.depth;

        debug!(
            "Encoding {}x{} image at {}, {} bytes per scanline with {} bytes of padding",
            layout.width,
            layout.height,
            depth,
            layout.scanline_bytes,
            layout.padding
        );
        debug!(
            "Palette: {} bytes, pixel data at offset {}, file size {}",
            layout.palette_bytes,
            layout.pixel_offset,
            layout.file_size
        );

        let mut writer = ByteWriter::new(sink);
        writer.reserve(layout.file_size)?;

        layout.write_headers(&mut writer)?;

        if let (true, Some(palette)) = (depth.requires_palette(), self.palette) {
            write_palette(palette, &mut writer)?;
        }

        self.write_pixels(&layout, &mut writer)?;

        writer.flush()?;

        let written = writer.bytes_written();
        debug_assert_eq!(written, layout.file_size);

        Ok(written)
    }

    fn write_pixels<T: ByteSinkTrait>(
        &self, layout: &BmpLayout, writer: &mut ByteWriter<T>
    ) -> Result<(), BmpEncodeErrors> {
        let pack = packer_for::<P>(layout.depth);
        // padding bytes at the end are zero and the packer never touches them
        let mut scanline = vec![0_u8; layout.stride()];

        let mut emit = |row: &R| -> Result<(), BmpEncodeErrors> {
            pack(row.as_ref(), &mut scanline);
            writer.write_all(&scanline)?;
            Ok(())
        };

        match self.options.row_order() {
            RowOrder::FirstRowFirst => {
                trace!("Writing rows top to bottom");
                self.rows.iter().try_for_each(&mut emit)
            }
            RowOrder::BottomUp => {
                trace!("Writing rows bottom to top");
                self.rows.iter().rev().try_for_each(&mut emit)
            }
        }
    }

    /// Encode into a freshly allocated vector of exactly the file size
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, BmpEncodeErrors> {
        let size = self.encoded_size()?;
        let mut output = Vec::with_capacity(size);
        self.encode(&mut output)?;
        Ok(output)
    }
}

/// Encode `rows` at `depth`, writing rows in buffer order.
///
/// `palette` is required for depths of 8 bits and below and ignored
/// otherwise.
///
/// Either the complete file is returned or an error, never part of a file.
pub fn encode_bmp<P: Pixel, R: AsRef<[P]>>(
    rows: &[R], depth: BitDepth, palette: Option<&[Color]>
) -> Result<Vec<u8>, BmpEncodeErrors> {
    let mut encoder = BmpEncoder::new(rows, EncoderOptions::new(depth));
    if let Some(palette) = palette {
        encoder.set_palette(palette);
    }
    encoder.encode_to_vec()
}

/// Size in bytes of a `width` by `height` image encoded at `depth`,
/// or `None` if it can't be represented
///
/// ```
/// use pixwrite_bmp::encoded_size;
/// use pixwrite_bmp::pixwrite_core::bit_depth::BitDepth;
/// assert_eq!(encoded_size(256, 1, BitDepth::Palette8), Some(1334));
/// ```
pub fn encoded_size(width: usize, height: usize, depth: BitDepth) -> Option<usize> {
    BmpLayout::new(width, height, depth)
        .ok()
        .map(|layout| layout.file_size)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use pixwrite_core::bit_depth::BitDepth;
    use pixwrite_core::color::Color;
    use pixwrite_core::options::{EncoderOptions, RowOrder};

    use crate::encoder::{encode_bmp, BmpEncoder};
    use crate::errors::{BmpEncodeErrors, PaletteErrors};

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_empty_buffers() {
        let no_rows: Vec<Vec<u32>> = vec![];
        assert!(matches!(
            encode_bmp(&no_rows, BitDepth::Rgb888, None),
            Err(BmpEncodeErrors::EmptyBuffer)
        ));
        let empty_rows: Vec<Vec<u32>> = vec![vec![], vec![]];
        assert!(matches!(
            encode_bmp(&empty_rows, BitDepth::Rgb888, None),
            Err(BmpEncodeErrors::EmptyBuffer)
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let rows: Vec<Vec<u32>> = vec![vec![0; 4], vec![0; 4], vec![0; 3]];
        match encode_bmp(&rows, BitDepth::Rgb565, None) {
            Err(BmpEncodeErrors::RaggedRows {
                row,
                expected,
                found
            }) => {
                assert_eq!((row, expected, found), (2, 4, 3));
            }
            _ => panic!("ragged rows were accepted"),
        }
    }

    #[test]
    fn test_rejected_image_leaves_sink_untouched() {
        let rows = [[0_u8; 4]; 2];
        let encoder = BmpEncoder::new(&rows, EncoderOptions::new(BitDepth::Palette8));
        let mut sink = Vec::new();
        assert!(matches!(
            encoder.encode(&mut sink),
            Err(BmpEncodeErrors::Palette(PaletteErrors::Missing(
                BitDepth::Palette8
            )))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_rgb888_pixel_bytes() {
        let rows = [[0x0011_2233_u32]];
        let bytes = encode_bmp(&rows, BitDepth::Rgb888, None).unwrap();
        assert_eq!(bytes.len(), 54 + 4);
        assert_eq!(&bytes[54..], &[0x33, 0x22, 0x11, 0x00]);
        assert_eq!(read_u32(&bytes, 2) as usize, bytes.len());
    }

    #[test]
    fn test_monochrome_file() {
        let rows = [[1_u8, 1, 0, 0, 0, 0, 0, 0]];
        let palette = [Color::BLACK, Color::WHITE];
        let bytes = encode_bmp(&rows, BitDepth::Monochrome, Some(&palette)).unwrap();

        assert_eq!(read_u32(&bytes, 10), 54 + 8);
        assert_eq!(&bytes[54..62], &[0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0]);
        assert_eq!(&bytes[62..], &[0xC0, 0, 0, 0]);
    }

    #[test]
    fn test_true_color_ignores_palette() {
        let rows = [[Color::WHITE; 2]];
        let palette = [Color::BLACK; 7];
        let with = encode_bmp(&rows, BitDepth::Rgba8888, Some(&palette)).unwrap();
        let without = encode_bmp(&rows, BitDepth::Rgba8888, None).unwrap();
        assert_eq!(with, without);
        assert_eq!(read_u32(&with, 10), 54);
    }

    #[test]
    fn test_row_order() {
        let rows = [[0x0000_00AA_u32], [0x0000_00BB]];
        let top_down = BmpEncoder::new(&rows, EncoderOptions::new(BitDepth::Rgb888))
            .encode_to_vec()
            .unwrap();
        let bottom_up = BmpEncoder::new(
            &rows,
            EncoderOptions::new(BitDepth::Rgb888).set_row_order(RowOrder::BottomUp)
        )
        .encode_to_vec()
        .unwrap();

        assert_eq!(top_down[..54], bottom_up[..54]);
        assert_eq!(&top_down[54..], &[0xAA, 0, 0, 0, 0xBB, 0, 0, 0]);
        assert_eq!(&bottom_up[54..], &[0xBB, 0, 0, 0, 0xAA, 0, 0, 0]);
    }

    #[test]
    fn test_encode_reports_bytes_written() {
        let rows = vec![vec![Color::gray(0.5); 5]; 3];
        let encoder = BmpEncoder::new(&rows, EncoderOptions::new(BitDepth::Rgb565));
        let mut sink = Vec::new();
        let written = encoder.encode(&mut sink).unwrap();
        assert_eq!(written, sink.len());
        assert_eq!(written, encoder.encoded_size().unwrap());
        // 5 pixels * 2 bytes = 10, padded to 12
        assert_eq!(written, 54 + 12 * 3);
    }
}
