/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use pixwrite_bmp::encode_bmp;
use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::color::Color;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod layouts;

#[derive(Clone, Deserialize, Debug)]
pub struct LayoutEntry {
    pub depth:        u16,
    pub width:        usize,
    pub height:       usize,
    pub file_size:    usize,
    pub pixel_offset: usize,
    /// xxh3 of the whole file written by [`encode_ramp`]
    pub hash:         u128,
    pub comment:      Option<String>
}

pub fn hash(data: &[u8]) -> u128 {
    xxh3_128(data)
}

pub fn json_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

pub fn read_le_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut field = [0; 4];
    field.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(field)
}

/// A gray ramp with as many entries as `depth` needs
pub fn gray_palette(depth: BitDepth) -> Vec<Color> {
    let len = depth.palette_len();
    let max = len.saturating_sub(1).max(1) as f32;

    (0..len).map(|i| Color::gray(i as f32 / max)).collect()
}

/// Encode a `width` by `height` image whose pixel values walk through
/// what `depth` can represent
pub fn encode_ramp(width: usize, height: usize, depth: BitDepth) -> Vec<u8> {
    let mask = match depth.bits_per_pixel() {
        32 => u32::MAX,
        bits => (1_u32 << bits) - 1
    };
    let rows: Vec<Vec<u32>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| ((y * width + x) as u32).wrapping_mul(0x9E37_79B9) & mask)
                .collect()
        })
        .collect();

    let palette = gray_palette(depth);
    let palette = depth.requires_palette().then_some(palette.as_slice());

    encode_bmp(&rows, depth, palette).unwrap()
}
