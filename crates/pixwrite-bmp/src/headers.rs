/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! File and info header serialization

use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::bytestream::{ByteSinkTrait, ByteWriter};

use crate::errors::BmpEncodeErrors;

pub(crate) const FILE_HEADER_SIZE: usize = 14;
/// uses the so-called `BITMAPINFOHEADER`
pub(crate) const INFO_HEADER_SIZE: usize = 40;
pub(crate) const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const BMP_MAGIC: [u8; 2] = *b"BM";
/// `BI_RGB`, uncompressed
const COMPRESSION_NONE: u32 = 0;

/// Sizes and offsets of every section of the file, all validated to
/// fit their header fields
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct BmpLayout {
    pub width:           usize,
    pub height:          usize,
    pub depth:           BitDepth,
    /// Packed pixel bytes per scanline, without padding
    pub scanline_bytes:  usize,
    pub padding:         usize,
    pub palette_bytes:   usize,
    pub pixel_data_size: usize,
    pub pixel_offset:    usize,
    pub file_size:       usize
}

impl BmpLayout {
    pub fn new(width: usize, height: usize, depth: BitDepth) -> Result<BmpLayout, BmpEncodeErrors> {
        if width > i32::MAX as usize {
            return Err(BmpEncodeErrors::TooLargeDimensions("width", width));
        }
        if height > i32::MAX as usize {
            return Err(BmpEncodeErrors::TooLargeDimensions("height", height));
        }
        let scanline_bytes = depth
            .scanline_bytes(width)
            .ok_or(BmpEncodeErrors::OverflowOccurred)?;
        let padding = depth
            .scanline_padding(width)
            .ok_or(BmpEncodeErrors::OverflowOccurred)?;

        let palette_bytes = depth.palette_len() * 4;

        let pixel_data_size = (scanline_bytes + padding)
            .checked_mul(height)
            .ok_or(BmpEncodeErrors::OverflowOccurred)?;

        let pixel_offset = HEADERS_SIZE + palette_bytes;

        let file_size = pixel_offset
            .checked_add(pixel_data_size)
            .ok_or(BmpEncodeErrors::OverflowOccurred)?;

        if file_size > u32::MAX as usize {
            return Err(BmpEncodeErrors::OverflowOccurred);
        }

        Ok(BmpLayout {
            width,
            height,
            depth,
            scanline_bytes,
            padding,
            palette_bytes,
            pixel_data_size,
            pixel_offset,
            file_size
        })
    }

    /// Stored length of a scanline, padding included
    pub const fn stride(&self) -> usize {
        self.scanline_bytes + self.padding
    }

    /// Write the 14 byte file header followed by the 40 byte info header
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn write_headers<T: ByteSinkTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), BmpEncodeErrors> {
        // the constructor checked every value below fits its field

        // file header
        writer.write_const_bytes(&BMP_MAGIC)?;
        writer.write_u32_le(self.file_size as u32)?;
        // "reserved 1" and "reserved 2"
        writer.write_u32_le(0)?;
        writer.write_u32_le(self.pixel_offset as u32)?;

        // info header
        writer.write_u32_le(INFO_HEADER_SIZE as u32)?;
        writer.write_i32_le(self.width as i32)?;
        writer.write_i32_le(self.height as i32)?;
        // planes
        writer.write_u16_le(1)?;
        writer.write_u16_le(self.depth.bits_per_pixel())?;
        writer.write_u32_le(COMPRESSION_NONE)?;
        // image size, zero is allowed for uncompressed images
        writer.write_u32_le(0)?;
        // "pixels per metre"
        writer.write_u32_le(0)?;
        writer.write_u32_le(0)?;
        // colors used, zero means the full 2^bpp table
        writer.write_u32_le(0)?;
        // important colors
        writer.write_u32_le(0)?;

        Ok(())
    }
}
