/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use pixwrite_bmp::encoded_size;
use pixwrite_core::bit_depth::BitDepth;
use pixwrite_core::options::{EncoderOptions, RowOrder};

use crate::{encode_ramp, hash, json_path, read_le_u32, LayoutEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_layouts() {
    let json_file = read(json_path("layouts.json")).unwrap();

    let entries: Vec<LayoutEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut error = false;

    for entry in &entries {
        let depth = BitDepth::from_bits_per_pixel(entry.depth).unwrap();
        let bytes = encode_ramp(entry.width, entry.height, depth);

        let size = bytes.len();
        let stored_size = read_le_u32(&bytes, 2) as usize;
        let offset = read_le_u32(&bytes, 10) as usize;

        if size != entry.file_size
            || stored_size != entry.file_size
            || offset != entry.pixel_offset
            || encoded_size(entry.width, entry.height, depth) != Some(entry.file_size)
        {
            error = true;
            eprintln!(
                "Layout mismatch\nExpected size {} offset {}, found size {} (header says {}) offset {}\nConfig:{:#?}\n",
                entry.file_size, entry.pixel_offset, size, stored_size, offset, entry
            );
        }

        let found_hash = hash(&bytes);

        if found_hash != entry.hash {
            error = true;
            eprintln!(
                "Hash mismatch for {}x{} at {}\nExpected {} but found {}\nConfig:{:#?}\n",
                entry.width, entry.height, depth, entry.hash, found_hash, entry
            );
        }
    }
    if error {
        panic!("Layout mismatch, see stderr");
    }
}

#[test]
fn test_bottom_up_changes_only_pixel_data() {
    let rows: Vec<Vec<u32>> = (0..4_u32)
        .map(|y| (0..5).map(|x| y * 0x0001_0101 + x).collect())
        .collect();

    let top_down = pixwrite_bmp::BmpEncoder::new(&rows, EncoderOptions::new(BitDepth::Rgb888))
        .encode_to_vec()
        .unwrap();
    let bottom_up = pixwrite_bmp::BmpEncoder::new(
        &rows,
        EncoderOptions::new(BitDepth::Rgb888).set_row_order(RowOrder::BottomUp)
    )
    .encode_to_vec()
    .unwrap();

    assert_eq!(top_down.len(), bottom_up.len());
    assert_eq!(top_down[..54], bottom_up[..54]);
    assert_ne!(hash(&top_down), hash(&bottom_up));

    // 5 pixels of 3 bytes padded to 16
    let stride = 16;
    for (row, chunk) in top_down[54..].chunks_exact(stride).enumerate() {
        let mirrored = &bottom_up[54 + (3 - row) * stride..54 + (4 - row) * stride];
        assert_eq!(chunk, mirrored);
    }
}
